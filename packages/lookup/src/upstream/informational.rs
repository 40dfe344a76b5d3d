//! Reverse lookup that explains where such lookups can be done instead.
//!
//! There is no free public API that resolves names to a cédula, so the
//! default deployment answers with a list of official and paid services.

use async_trait::async_trait;
use serde::Serialize;

use super::{NameLookup, NameLookupOutcome};
use crate::error::Result;

/// A service that can perform lookups by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Informational answer returned instead of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unavailable {
    pub message: String,
    pub alternatives: Vec<Alternative>,
}

const UNAVAILABLE_MESSAGE: &str =
    "Lookup by name is not available through free public APIs. \
     Use the lookup by identifier, which queries official SRI data.";

fn alternative(name: &str, description: &str, url: Option<&str>) -> Alternative {
    Alternative {
        name: name.to_string(),
        description: description.to_string(),
        url: url.map(str::to_string),
    }
}

/// Known places where a lookup by name can be performed.
pub fn known_alternatives() -> Vec<Alternative> {
    vec![
        alternative(
            "Función Judicial (SATJE)",
            "Search judicial proceedings by a person's name.",
            Some("https://procesosjudiciales.funcionjudicial.gob.ec/busqueda"),
        ),
        alternative(
            "Consejo Nacional Electoral (CNE)",
            "Voter registry search by given name and surname; only covers citizens eligible to vote.",
            None,
        ),
        alternative(
            "IESS (Instituto Ecuatoriano de Seguridad Social)",
            "Affiliate lookup protected by a captcha; no open public API.",
            Some("https://www.iess.gob.ec/"),
        ),
        alternative(
            "EcuadorLegalOnline",
            "Paid service offering lookup by given name and surname with full civil registry data.",
            Some("https://tramites.ecuadorlegalonline.com/"),
        ),
    ]
}

/// [`NameLookup`] that always answers with [`Unavailable`].
pub struct InformationalNameLookup;

#[async_trait]
impl NameLookup for InformationalNameLookup {
    async fn lookup_by_name(&self, given_name: &str, surname: &str) -> Result<NameLookupOutcome> {
        tracing::info!(given_name, surname, "lookup by name requested; answering with alternatives");
        Ok(NameLookupOutcome::Unavailable(Unavailable {
            message: UNAVAILABLE_MESSAGE.to_string(),
            alternatives: known_alternatives(),
        }))
    }
}
