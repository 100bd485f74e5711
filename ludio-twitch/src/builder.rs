//! Builder for [`TwitchConnector`].

use std::time::Duration;

use url::Url;

use ludio_core::auth::TokenCache;
use ludio_core::http::default_client;
use ludio_core::{LudioError, TwitchCredentials};

use crate::TwitchConnector;

const DEFAULT_API_BASE: &str = "https://api.twitch.tv/";
const DEFAULT_AUTH_BASE: &str = "https://id.twitch.tv/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configures and constructs a [`TwitchConnector`].
#[derive(Debug)]
pub struct TwitchBuilder {
    creds: TwitchCredentials,
    api_base: Option<Url>,
    auth_base: Option<Url>,
    timeout: Duration,
}

impl TwitchBuilder {
    /// Start from the app credentials every Helix call requires.
    #[must_use]
    pub fn new(creds: TwitchCredentials) -> Self {
        Self {
            creds,
            api_base: None,
            auth_base: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the Helix API base URL. Intended for tests.
    #[must_use]
    pub fn api_base(mut self, base: Url) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Override the OAuth token endpoint base URL. Intended for tests.
    #[must_use]
    pub fn auth_base(mut self, base: Url) -> Self {
        self.auth_base = Some(base);
        self
    }

    /// Per-request timeout. Defaults to ten seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Construct the connector.
    ///
    /// # Errors
    /// Returns `Config` when a default base URL fails to parse or the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<TwitchConnector, LudioError> {
        let api_base = match self.api_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_BASE)
                .map_err(|e| LudioError::config(format!("twitch api base: {e}")))?,
        };
        let auth_base = match self.auth_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_AUTH_BASE)
                .map_err(|e| LudioError::config(format!("twitch auth base: {e}")))?,
        };
        Ok(TwitchConnector {
            creds: self.creds,
            http: default_client(self.timeout)?,
            api_base,
            auth_base,
            tokens: TokenCache::new(),
        })
    }
}
