//! National identifier (cédula) validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LookupError, Result};

/// Identifier pattern: exactly 10 ASCII digits. No checksum is verified.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// Check whether `value` is a well-formed identifier.
///
/// # Examples
/// ```
/// use cedula_lookup::identifier::is_valid_identifier;
///
/// assert!(is_valid_identifier("1712345678"));
/// assert!(!is_valid_identifier("171234567"));
/// assert!(!is_valid_identifier("17123456a8"));
/// ```
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}

/// A validated 10-digit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap `value`.
    ///
    /// # Returns
    /// * `Ok(Identifier)` if valid
    /// * `Err(LookupError::InvalidIdentifier)` otherwise
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_identifier(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(LookupError::InvalidIdentifier(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
