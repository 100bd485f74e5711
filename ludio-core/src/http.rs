//! Shared HTTP plumbing for provider crates.
//!
//! Providers build their own requests; this module owns the client
//! construction and the status-to-error mapping so every connector
//! classifies upstream failures the same way.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::LudioError;

/// Build the client provider crates share: JSON-only, bounded by `timeout`.
pub fn default_client(timeout: Duration) -> Result<reqwest::Client, LudioError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LudioError::config(format!("building http client: {e}")))
}

/// Send a prepared request and decode the JSON body into `T`.
///
/// `what` names the resource for `NotFound`; transport failures, timeouts,
/// and undecodable bodies all surface as `Upstream` for `provider`.
pub async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    what: &str,
    req: reqwest::RequestBuilder,
) -> Result<T, LudioError> {
    let resp = req
        .send()
        .await
        .map_err(|e| LudioError::upstream(provider, e.to_string()))?;
    let resp = error_for_status(provider, what, resp)?;
    resp.json::<T>()
        .await
        .map_err(|e| LudioError::upstream(provider, format!("decoding {what}: {e}")))
}

/// Map a non-success HTTP status to the matching error variant.
pub fn error_for_status(
    provider: &'static str,
    what: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, LudioError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status.as_u16() {
        401 | 403 => Err(LudioError::auth(
            provider,
            format!("{what}: http {status}"),
        )),
        404 => Err(LudioError::not_found(what)),
        429 => Err(LudioError::rate_limited(provider)),
        _ => Err(LudioError::upstream(provider, format!("{what}: http {status}"))),
    }
}
