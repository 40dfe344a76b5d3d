//! Outbound HTTP client shared by all upstream lookups.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::Client;

use crate::error::Result;

/// Desktop browser user agent; the upstream sites reject unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
const ACCEPT_LANGUAGE_VALUE: &str = "es-ES,es;q=0.9,en;q=0.8";
const REFERER_VALUE: &str = "https://srienlinea.sri.gob.ec/";

/// Create a configured HTTP client.
///
/// Every request carries browser-like `User-Agent`, `Accept`,
/// `Accept-Language` and `Referer` headers and is bounded by `timeout`.
pub fn create_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Cut `body` to at most `limit` characters for logging.
pub fn truncate_for_log(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
