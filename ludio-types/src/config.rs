//! Configuration types shared by the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LudioError;
use crate::key::ProviderKey;

/// Global configuration for the `Ludio` orchestrator.
#[derive(Debug, Clone)]
pub struct LudioConfig {
    /// Preferred provider ordering. Listed connectors are tried first, in
    /// order; unlisted connectors keep their registration order after them.
    pub priority: Vec<ProviderKey>,
    /// Timeout applied to each individual provider call. Exceeding it
    /// surfaces as an upstream error for that call.
    pub provider_timeout: Duration,
    /// Maximum number of batch items fetched concurrently. `1` keeps the
    /// strictly sequential behavior; higher values fan out while the
    /// aggregator re-orders results to match input order.
    pub batch_concurrency: usize,
}

impl Default for LudioConfig {
    fn default() -> Self {
        Self {
            priority: Vec::new(),
            provider_timeout: Duration::from_secs(10),
            batch_concurrency: 1,
        }
    }
}

fn required_env(name: &'static str) -> Result<String, LudioError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(LudioError::config(format!(
            "required environment variable {name} is not set"
        ))),
    }
}

/// OAuth2 client credentials for the live-streaming platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TwitchCredentials {
    /// Application client id, also sent as the `Client-ID` header.
    pub client_id: String,
    /// Application client secret for the client-credentials grant.
    pub client_secret: String,
}

impl TwitchCredentials {
    /// Build from explicit values.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `TWITCH_CLIENT_ID` / `TWITCH_CLIENT_SECRET` from the process
    /// environment. Intended for process bootstrap only; the engine never
    /// reads the environment in deep call paths.
    ///
    /// # Errors
    /// Returns `Config` when a variable is absent or empty.
    pub fn from_env() -> Result<Self, LudioError> {
        Ok(Self {
            client_id: required_env("TWITCH_CLIENT_ID")?,
            client_secret: required_env("TWITCH_CLIENT_SECRET")?,
        })
    }
}

/// OAuth2 client credentials for the MMO profile/guild platform.
///
/// The optional refresh token is only consumed by the connector's explicit
/// refresh-grant method; the engine never invokes it implicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WowCredentials {
    /// OAuth client id, sent via HTTP Basic auth to the token endpoint.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Pre-issued refresh token, if the caller holds one.
    pub refresh_token: Option<String>,
}

impl WowCredentials {
    /// Build from explicit values.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: None,
        }
    }

    /// Attach a pre-issued refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Read `WOW_CLIENT_ID` / `WOW_CLIENT_SECRET` from the process
    /// environment.
    ///
    /// # Errors
    /// Returns `Config` when a variable is absent or empty.
    pub fn from_env() -> Result<Self, LudioError> {
        Ok(Self {
            client_id: required_env("WOW_CLIENT_ID")?,
            client_secret: required_env("WOW_CLIENT_SECRET")?,
            refresh_token: None,
        })
    }
}

/// API key credentials for the storefront/telemetry platform.
///
/// The key is only required by the recently-played fan-out; the public
/// storefront endpoints are unauthenticated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SteamCredentials {
    /// Web API key, sent as the `key` query parameter where required.
    pub api_key: Option<String>,
}

impl SteamCredentials {
    /// Build with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    /// Build without an API key; key-gated operations will fail with a
    /// configuration error when invoked.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { api_key: None }
    }

    /// Read `STEAM_API_KEY` from the process environment.
    ///
    /// # Errors
    /// Returns `Config` when the variable is absent or empty.
    pub fn from_env() -> Result<Self, LudioError> {
        Ok(Self {
            api_key: Some(required_env("STEAM_API_KEY")?),
        })
    }
}
