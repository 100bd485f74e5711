//! Builder for [`SteamConnector`].

use std::time::Duration;

use url::Url;

use ludio_core::http::default_client;
use ludio_core::{LudioError, SteamCredentials};

use crate::SteamConnector;

const DEFAULT_STORE_BASE: &str = "https://store.steampowered.com/";
const DEFAULT_API_BASE: &str = "https://api.steampowered.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configures and constructs a [`SteamConnector`].
#[derive(Debug)]
pub struct SteamBuilder {
    creds: SteamCredentials,
    store_base: Option<Url>,
    api_base: Option<Url>,
    timeout: Duration,
}

impl SteamBuilder {
    /// Start from the (possibly anonymous) credentials.
    ///
    /// Storefront endpoints need no key; the recently-played fan-out is
    /// gated on `creds.api_key` at call time.
    #[must_use]
    pub fn new(creds: SteamCredentials) -> Self {
        Self {
            creds,
            store_base: None,
            api_base: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the storefront base URL. Intended for tests.
    #[must_use]
    pub fn store_base(mut self, base: Url) -> Self {
        self.store_base = Some(base);
        self
    }

    /// Override the Web API base URL. Intended for tests.
    #[must_use]
    pub fn api_base(mut self, base: Url) -> Self {
        self.api_base = Some(base);
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
    pub fn build(self) -> Result<SteamConnector, LudioError> {
        let store_base = match self.store_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_STORE_BASE)
                .map_err(|e| LudioError::config(format!("steam store base: {e}")))?,
        };
        let api_base = match self.api_base {
            Some(u) => u,
            None => Url::parse(DEFAULT_API_BASE)
                .map_err(|e| LudioError::config(format!("steam api base: {e}")))?,
        };
        Ok(SteamConnector {
            creds: self.creds,
            http: default_client(self.timeout)?,
            store_base,
            api_base,
        })
    }
}
