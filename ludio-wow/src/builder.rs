//! Builder for [`WowConnector`].

use std::time::Duration;

use url::Url;

use ludio_core::auth::TokenCache;
use ludio_core::http::default_client;
use ludio_core::{LudioError, WowCredentials};

use crate::WowConnector;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configures and constructs a [`WowConnector`].
#[derive(Debug)]
pub struct WowBuilder {
    creds: WowCredentials,
    api_base: Option<Url>,
    auth_base: Option<Url>,
    timeout: Duration,
}

impl WowBuilder {
    /// Start from the OAuth client credentials.
    #[must_use]
    pub fn new(creds: WowCredentials) -> Self {
        Self {
            creds,
            api_base: None,
            auth_base: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the profile API base URL for every region. Intended for
    /// tests; production URLs are derived from the per-call region.
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
    /// Returns `Config` when the HTTP client cannot be built.
    pub fn build(self) -> Result<WowConnector, LudioError> {
        Ok(WowConnector {
            creds: self.creds,
            http: default_client(self.timeout)?,
            api_base: self.api_base,
            auth_base: self.auth_base,
            tokens: TokenCache::new(),
        })
    }
}
