//! Reverse lookup by scraping a third-party search page.
//!
//! The page format is uncontrolled; the only assumption is that the first
//! standalone run of 10 digits in the response is the identifier.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};

use super::{NameLookup, NameLookupOutcome};
use crate::config::LOG_BODY_LIMIT;
use crate::error::{LookupError, Result};
use crate::http::truncate_for_log;

/// Exactly 10 ASCII digits bounded by non-digits or the string ends.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IDENTIFIER_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^0-9])([0-9]{10})(?:[^0-9]|$)").expect("valid regex"));

/// Form field carrying the given names.
const GIVEN_NAME_FIELD: &str = "nombres";
/// Form field carrying the surnames.
const SURNAME_FIELD: &str = "apellidos";

/// Return the first standalone 10-digit run in `text`.
///
/// # Examples
/// ```
/// use cedula_lookup::upstream::extract_first_identifier;
///
/// assert_eq!(
///     extract_first_identifier("<td>CI: 1712345678</td>").as_deref(),
///     Some("1712345678")
/// );
/// assert_eq!(extract_first_identifier("tel 09912345678"), None);
/// ```
pub fn extract_first_identifier(text: &str) -> Option<String> {
    IDENTIFIER_IN_TEXT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// [`NameLookup`] that posts the names to a search form and scans the reply.
pub struct ScrapeNameLookup {
    http: Client,
    url: String,
}

impl ScrapeNameLookup {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl NameLookup for ScrapeNameLookup {
    async fn lookup_by_name(&self, given_name: &str, surname: &str) -> Result<NameLookupOutcome> {
        tracing::info!(url = %self.url, "scraping lookup by name");

        let response = self
            .http
            .post(&self.url)
            .form(&[(GIVEN_NAME_FIELD, given_name), (SURNAME_FIELD, surname)])
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(url = %self.url, error = %e, "name lookup request failed");
            })?;

        let status = response.status();
        let body = response.text().await?;
        let excerpt = truncate_for_log(&body, LOG_BODY_LIMIT);

        if status != StatusCode::OK {
            tracing::warn!(url = %self.url, status = status.as_u16(), body = excerpt, "unexpected status");
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
                body: excerpt.to_string(),
            });
        }

        match extract_first_identifier(&body) {
            Some(identifier) => Ok(NameLookupOutcome::Found(identifier)),
            None => {
                tracing::info!(body = excerpt, "no identifier in scraped page");
                Ok(NameLookupOutcome::NotFound)
            }
        }
    }
}
