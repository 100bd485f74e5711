//! Short-lived access tokens and the expiry-tracked token cache.
//!
//! Each connector owns one [`TokenCache`] per provider. A cached token is
//! reused while it remains inside its validity window; when the upstream
//! does not report an expiry the token is treated as single-use and
//! re-requested on every call. Tokens are never shared across providers
//! and never refreshed mid-batch: once handed out, a bearer secret is an
//! immutable value.

use core::future::Future;
use std::time::{Duration, Instant};

use ludio_types::LudioError;

/// Safety margin subtracted from the reported lifetime so a token is
/// never presented right at its expiry edge.
const EXPIRY_LEEWAY: Duration = Duration::from_secs(30);

/// A bearer token issued by one provider's token endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    secret: String,
    issued_at: Instant,
    expires_in: Option<Duration>,
}

impl AccessToken {
    /// Wrap a freshly issued token. `expires_in` is the upstream-reported
    /// lifetime; pass `None` when the endpoint did not report one, which
    /// makes the token single-use.
    #[must_use]
    pub fn new(secret: impl Into<String>, expires_in: Option<Duration>) -> Self {
        Self {
            secret: secret.into(),
            issued_at: Instant::now(),
            expires_in,
        }
    }

    /// The bearer secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Whether the token may still be presented upstream.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.expires_in {
            Some(ttl) => self.issued_at.elapsed() + EXPIRY_LEEWAY < ttl,
            None => false,
        }
    }
}

/// Serializes token acquisition for one provider and reuses tokens inside
/// their validity window.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: tokio::sync::Mutex<Option<AccessToken>>,
}

impl TokenCache {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: tokio::sync::Mutex::const_new(None),
        }
    }

    /// Return a valid bearer secret, invoking `fetch` only when no cached
    /// token is usable. Concurrent callers are serialized so a provider
    /// sees at most one in-flight token request.
    ///
    /// # Errors
    /// Propagates the fetch error; the cache is left unchanged.
    pub async fn bearer<F, Fut>(&self, fetch: F) -> Result<String, LudioError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AccessToken, LudioError>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref()
            && token.is_valid()
        {
            return Ok(token.secret().to_owned());
        }
        let token = fetch().await?;
        let secret = token.secret().to_owned();
        *slot = Some(token);
        Ok(secret)
    }

    /// Drop any cached token; the next call re-requests.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
