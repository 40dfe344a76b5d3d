//! Configuration constants and environment-driven settings.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{LookupError, Result};

/// Default base URL of the SRI online services.
pub const SRI_API_BASE_URL: &str = "https://srienlinea.sri.gob.ec";

/// Outbound HTTP timeout in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Upstream bodies are cut to this many characters before being logged.
pub const LOG_BODY_LIMIT: usize = 500;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8085";
const DEFAULT_STATIC_DIR: &str = "ui/static";

/// How the lookup-by-name endpoint answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLookupMode {
    /// Always answer with an informational payload listing alternatives.
    #[default]
    Informational,
    /// Scrape `NAME_LOOKUP_URL` for the first 10-digit identifier.
    Scrape,
    /// Reverse lookup switched off; every request is a 404.
    Disabled,
}

impl FromStr for NameLookupMode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "informational" | "info" => Ok(Self::Informational),
            "scrape" => Ok(Self::Scrape),
            "disabled" | "off" => Ok(Self::Disabled),
            other => Err(LookupError::Config(format!(
                "unknown NAME_LOOKUP_MODE '{other}' (expected informational, scrape or disabled)"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub static_dir: String,
    pub sri_base_url: String,
    pub upstream_timeout: Duration,
    pub name_lookup_mode: NameLookupMode,
    pub name_lookup_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into())
            .parse::<SocketAddr>()
            .map_err(|e| LookupError::Config(format!("invalid LISTEN_ADDR: {e}")))?;

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.into());

        let sri_base_url =
            std::env::var("SRI_API_BASE_URL").unwrap_or_else(|_| SRI_API_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(UPSTREAM_TIMEOUT_SECS);

        let name_lookup_mode = match std::env::var("NAME_LOOKUP_MODE") {
            Ok(v) => v.parse::<NameLookupMode>()?,
            Err(_) => NameLookupMode::default(),
        };

        let name_lookup_url = std::env::var("NAME_LOOKUP_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let config = Self {
            listen_addr,
            static_dir,
            sri_base_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            name_lookup_mode,
            name_lookup_url,
        };
        config.validate()?;

        tracing::info!(mode = ?config.name_lookup_mode, "lookup by name configured");

        Ok(config)
    }

    /// Defaults pointing the identifier lookup at `sri_base_url`.
    pub fn new(sri_base_url: impl Into<String>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8085)),
            static_dir: DEFAULT_STATIC_DIR.into(),
            sri_base_url: sri_base_url.into(),
            upstream_timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
            name_lookup_mode: NameLookupMode::default(),
            name_lookup_url: None,
        }
    }

    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<String>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    pub fn with_name_lookup(mut self, mode: NameLookupMode, url: Option<String>) -> Self {
        self.name_lookup_mode = mode;
        self.name_lookup_url = url;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_lookup_mode == NameLookupMode::Scrape && self.name_lookup_url.is_none() {
            return Err(LookupError::Config(
                "NAME_LOOKUP_MODE=scrape requires NAME_LOOKUP_URL".into(),
            ));
        }
        Ok(())
    }
}
