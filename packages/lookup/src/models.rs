use serde::{Deserialize, Serialize};

use crate::upstream::Alternative;

#[derive(Debug, Deserialize)]
pub struct IdentifierLookupRequest {
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupRequest {
    pub given_name: String,
    pub surname: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupResponse {
    pub identifier: String,
    pub given_name: String,
    pub surname: String,
}

/// Returned with status 200 when lookup by name is not offered.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupUnavailableResponse {
    pub success: bool,
    pub given_name: String,
    pub surname: String,
    pub message: String,
    pub alternatives_info: bool,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
