//! Upstream data sources.
//!
//! The HTTP layer only talks to the [`IdentifierLookup`] and [`NameLookup`]
//! traits, so the payload heuristics can be swapped (or mocked in tests)
//! without touching the handlers.

pub mod informational;
pub mod scrape;
pub mod sri;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{AppConfig, NameLookupMode};
use crate::error::{LookupError, Result};
use crate::identifier::Identifier;

pub use informational::{Alternative, InformationalNameLookup, Unavailable};
pub use scrape::{extract_first_identifier, ScrapeNameLookup};
pub use sri::{extract_full_name, SriClient};

/// Resolve an identifier to the full name registered for it.
#[async_trait]
pub trait IdentifierLookup: Send + Sync {
    /// `Ok(None)` means the source answered but has no name for `identifier`.
    async fn lookup_by_identifier(&self, identifier: &Identifier) -> Result<Option<String>>;
}

/// Result of a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookupOutcome {
    Found(String),
    NotFound,
    /// Reverse lookup is not offered; carries informational content instead.
    Unavailable(Unavailable),
}

/// Resolve a person's names to an identifier.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn lookup_by_name(&self, given_name: &str, surname: &str) -> Result<NameLookupOutcome>;
}

/// Reverse lookup that never finds anything.
pub struct DisabledNameLookup;

#[async_trait]
impl NameLookup for DisabledNameLookup {
    async fn lookup_by_name(&self, _given_name: &str, _surname: &str) -> Result<NameLookupOutcome> {
        Ok(NameLookupOutcome::NotFound)
    }
}

/// Build the reverse lookup selected by `config.name_lookup_mode`.
pub fn name_lookup_from_config(config: &AppConfig, http: Client) -> Result<Arc<dyn NameLookup>> {
    let lookup: Arc<dyn NameLookup> = match config.name_lookup_mode {
        NameLookupMode::Informational => Arc::new(InformationalNameLookup),
        NameLookupMode::Disabled => Arc::new(DisabledNameLookup),
        NameLookupMode::Scrape => {
            let url = config.name_lookup_url.clone().ok_or_else(|| {
                LookupError::Config("NAME_LOOKUP_MODE=scrape requires NAME_LOOKUP_URL".into())
            })?;
            Arc::new(ScrapeNameLookup::new(http, url))
        }
    };
    Ok(lookup)
}
