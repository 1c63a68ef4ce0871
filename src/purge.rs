//! Cache purge requests
//!
//! Submits an authenticated purge for an already-rendered URL to the fixed
//! purge endpoint. Body construction is pure so it can be tested without
//! any network; the transport is a single POST with no internal retry -
//! the raw response is handed back to the caller.

use serde_json::{json, Value};

use crate::constants::PURGE_ENDPOINT;
use crate::error::Error;

/// JSON body of a purge request for `url`.
pub fn purge_body(url: &str) -> Value {
    json!({
        "data": {
            "attributes": {
                "url": url
            },
            "type": "purges"
        }
    })
}

/// POSTs the purge request and returns the raw response.
pub(crate) async fn send(
    api_key: &str,
    url: &str,
    user_agent: &str,
) -> Result<reqwest::Response, Error> {
    tracing::debug!(url, "sending purge request");

    let client = reqwest::Client::new();
    let response = client
        .post(PURGE_ENDPOINT)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .header("User-Agent", user_agent)
        .json(&purge_body(url))
        .send()
        .await?;

    Ok(response)
}
