//! Cédula lookup - find a person's name from their national identifier.
//!
//! The service relays identifier lookups to the SRI taxpayer registry and
//! splits the returned full name into given names and surnames. A reverse
//! lookup by name is available in one of several configurable modes.
//!
//! # Example
//!
//! ```
//! use cedula_lookup::{is_valid_identifier, split_full_name};
//!
//! assert!(is_valid_identifier("1712345678"));
//!
//! let split = split_full_name("Juan Carlos Perez");
//! assert_eq!(split.given_name, "Juan");
//! assert_eq!(split.surname, "Carlos Perez");
//! ```
//!
//! # Architecture
//!
//! - [`identifier`]: identifier validation
//! - [`name`]: full name splitting
//! - [`upstream`]: lookup traits and the SRI / scraping / informational sources
//! - [`http`]: outbound HTTP client
//! - [`config`]: environment configuration
//! - [`error`]: error types and Result alias
//! - [`handlers`], [`models`], [`state`], [`app`]: the axum service

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod identifier;
pub mod models;
pub mod name;
pub mod state;
pub mod upstream;

pub use config::{AppConfig, NameLookupMode};
pub use error::{ErrorKind, LookupError, Result};
pub use identifier::{is_valid_identifier, Identifier};
pub use name::{split_full_name, NameSplit};
pub use state::AppState;
