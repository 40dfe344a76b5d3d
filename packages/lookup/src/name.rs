//! Splitting a full legal name into given names and surnames.
//!
//! The registry returns one concatenated string with no field separation.
//! The split below approximates the common two-given-names plus
//! two-surnames convention and is kept stable for downstream consumers:
//!
//! | tokens | given names      | surnames        |
//! |--------|------------------|-----------------|
//! | 0      | `""`             | `""`            |
//! | 1      | t0               | `""`            |
//! | 2      | t0               | t1              |
//! | 3      | t0               | t1 t2           |
//! | n >= 4 | t[..n/2]         | t[n/2..]        |
//!
//! With an odd count of four or more the extra token goes to the surname.

use serde::Serialize;

/// Given-name / surname pair produced by [`split_full_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSplit {
    pub given_name: String,
    pub surname: String,
}

impl NameSplit {
    fn new(given_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
        }
    }
}

/// Split `full_name` into given names and surnames.
///
/// Never fails; the surname may be empty.
///
/// # Examples
/// ```
/// use cedula_lookup::name::split_full_name;
///
/// let split = split_full_name("Juan Carlos Perez Gomez");
/// assert_eq!(split.given_name, "Juan Carlos");
/// assert_eq!(split.surname, "Perez Gomez");
/// ```
pub fn split_full_name(full_name: &str) -> NameSplit {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => NameSplit::default(),
        [only] => NameSplit::new(*only, ""),
        [given, surname] => NameSplit::new(*given, *surname),
        [given, first, second] => NameSplit::new(*given, format!("{first} {second}")),
        _ => {
            let mid = tokens.len() / 2;
            NameSplit::new(tokens[..mid].join(" "), tokens[mid..].join(" "))
        }
    }
}
