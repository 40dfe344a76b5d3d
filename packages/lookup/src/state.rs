use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::http::create_client;
use crate::upstream::{name_lookup_from_config, IdentifierLookup, NameLookup, SriClient};

#[derive(Clone)]
pub struct AppState {
    pub identifier_lookup: Arc<dyn IdentifierLookup>,
    pub name_lookup: Arc<dyn NameLookup>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire the upstream clients described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let http = create_client(config.upstream_timeout)?;
        let identifier_lookup = Arc::new(SriClient::new(http.clone(), config.sri_base_url.clone()));
        let name_lookup = name_lookup_from_config(&config, http)?;

        Ok(Self {
            identifier_lookup,
            name_lookup,
            config: Arc::new(config),
        })
    }
}
