//! SRI (Servicio de Rentas Internas) taxpayer registry client.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::IdentifierLookup;
use crate::config::LOG_BODY_LIMIT;
use crate::error::{LookupError, Result};
use crate::http::truncate_for_log;
use crate::identifier::Identifier;

/// Path of the taxpayer lookup endpoint, relative to the SRI base URL.
pub const SRI_LOOKUP_PATH: &str = "/movil-servicios/api/v1.0/deudas/porIdentificacion";

#[derive(Debug, Deserialize)]
struct SriResponse {
    #[serde(default)]
    contribuyente: Option<Taxpayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Taxpayer {
    identificacion: Option<String>,
    denominacion: Option<String>,
    nombre_comercial: Option<String>,
    clase: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Pull the full name out of an SRI response body.
///
/// Prefers `denominacion`, falls back to `nombreComercial`. Both blank (or
/// no `contribuyente` at all) yields `Ok(None)`; a body that is not JSON of
/// the expected shape is an [`LookupError::UpstreamParse`].
pub fn extract_full_name(body: &str) -> Result<Option<String>> {
    let response: SriResponse =
        serde_json::from_str(body).map_err(|e| LookupError::UpstreamParse(e.to_string()))?;

    let Some(taxpayer) = response.contribuyente else {
        return Ok(None);
    };

    let name = non_blank(taxpayer.denominacion.as_deref())
        .or_else(|| non_blank(taxpayer.nombre_comercial.as_deref()))
        .map(str::to_string);

    if let Some(ref name) = name {
        tracing::debug!(
            identificacion = taxpayer.identificacion.as_deref().unwrap_or_default(),
            clase = taxpayer.clase.as_deref().unwrap_or_default(),
            name = %name,
            "taxpayer record found"
        );
    }

    Ok(name)
}

/// [`IdentifierLookup`] backed by the SRI public API.
pub struct SriClient {
    http: Client,
    base_url: String,
}

impl SriClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Lookup URL for `identifier`; the `_` parameter defeats caches.
    pub fn lookup_url(&self, identifier: &str, timestamp_millis: i64) -> String {
        format!(
            "{}{SRI_LOOKUP_PATH}/{identifier}/?tipoPersona=N&_={timestamp_millis}",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IdentifierLookup for SriClient {
    async fn lookup_by_identifier(&self, identifier: &Identifier) -> Result<Option<String>> {
        let url = self.lookup_url(identifier.as_str(), Utc::now().timestamp_millis());
        tracing::info!(%url, "querying SRI");

        let response = self.http.get(&url).send().await.inspect_err(|e| {
            tracing::warn!(%url, error = %e, "SRI request failed");
        })?;

        let status = response.status();
        let body = response.text().await?;
        let excerpt = truncate_for_log(&body, LOG_BODY_LIMIT);
        tracing::debug!(status = status.as_u16(), body = excerpt, "SRI response");

        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), body = excerpt, "unexpected SRI status");
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
                body: excerpt.to_string(),
            });
        }

        let name = extract_full_name(&body).inspect_err(|e| {
            tracing::warn!(%url, error = %e, body = excerpt, "SRI payload not understood");
        })?;

        if name.is_none() {
            tracing::info!(identifier = %identifier, "SRI response carries no name");
        }

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name(body: &str) -> Option<String> {
        extract_full_name(body).ok().flatten()
    }

    #[test]
    fn test_prefers_denominacion() {
        let body = r#"{"contribuyente":{"identificacion":"1712345678",
            "denominacion":"JUAN CARLOS PEREZ GOMEZ","nombreComercial":"TIENDA JUANCHO",
            "clase":"OTROS"}}"#;
        assert_eq!(name(body).as_deref(), Some("JUAN CARLOS PEREZ GOMEZ"));
    }

    #[test]
    fn test_falls_back_to_nombre_comercial() {
        let body = r#"{"contribuyente":{"denominacion":"","nombreComercial":"MARIA LOPEZ"}}"#;
        assert_eq!(name(body).as_deref(), Some("MARIA LOPEZ"));
    }

    #[test]
    fn test_blank_denominacion_counts_as_empty() {
        let body = r#"{"contribuyente":{"denominacion":"   ","nombreComercial":" MARIA LOPEZ "}}"#;
        assert_eq!(name(body).as_deref(), Some("MARIA LOPEZ"));
    }

    #[test]
    fn test_both_empty_is_not_found() {
        let body = r#"{"contribuyente":{"denominacion":"","nombreComercial":""}}"#;
        assert!(matches!(extract_full_name(body), Ok(None)));
    }

    #[test]
    fn test_missing_or_null_fields_are_not_found() {
        assert!(matches!(extract_full_name("{}"), Ok(None)));
        assert!(matches!(
            extract_full_name(r#"{"contribuyente":null}"#),
            Ok(None)
        ));
        assert!(matches!(
            extract_full_name(r#"{"contribuyente":{"denominacion":null}}"#),
            Ok(None)
        ));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"deudas":[],"contribuyente":{"denominacion":"ANA","extra":1}}"#;
        assert_eq!(name(body).as_deref(), Some("ANA"));
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        assert!(matches!(
            extract_full_name("<html>maintenance</html>"),
            Err(LookupError::UpstreamParse(_))
        ));
        assert!(matches!(
            extract_full_name(r#"{"contribuyente":"#),
            Err(LookupError::UpstreamParse(_))
        ));
    }

    #[test]
    fn test_lookup_url() {
        let client = SriClient::new(Client::new(), "https://example.org/");
        assert_eq!(
            client.lookup_url("1712345678", 1_700_000_000_000),
            "https://example.org/movil-servicios/api/v1.0/deudas/porIdentificacion/1712345678/?tipoPersona=N&_=1700000000000"
        );
    }
}
