//! Shared request/response plumbing for the provider clients.
//!
//! Keeps the error taxonomy layered: transport failures surface as
//! [`VantageError::Http`], non-success statuses as
//! [`VantageError::Upstream`], malformed bodies as
//! [`VantageError::Json`], and wrong-shaped (but valid) JSON as
//! [`VantageError::Parse`].

use serde_json::Value;

use crate::error::{Result, VantageError};

/// Sends a GET request and returns the response body as raw JSON.
pub(crate) async fn get_json(
    http: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Value> {
    let response = http.get(url).query(query).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(VantageError::Upstream {
            status,
            url: url.to_string(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Decodes raw JSON into a typed response, classifying shape
/// mismatches as [`VantageError::Parse`].
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| VantageError::Parse(format!("{what}: {e}")))
}
