use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ludio workspace.
///
/// Mirrors the engine's error taxonomy: credential failures, configuration
/// gaps, caller input problems, benign not-found conditions, upstream
/// throttling and failures, capability mismatches, and an aggregate for
/// exhausted fallback chains.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LudioError {
    /// Token acquisition or an authenticated call was rejected by the
    /// upstream identity layer. Fatal for a whole batch: no item can
    /// proceed without a token.
    #[error("{provider} auth failed: {msg}")]
    Auth {
        /// Provider whose credential flow failed.
        provider: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// Required credentials or settings are absent. Fatal, surfaced
    /// immediately, never silently defaulted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied identifier or argument is not usable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The upstream has no such entity. Not a failure for batch
    /// operations; modeled as a typed missing outcome.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "game 'Foo'".
        what: String,
    },

    /// The upstream rejected the request for exceeding its rate limits.
    #[error("{provider} rate limited")]
    RateLimited {
        /// Provider that throttled the request.
        provider: String,
    },

    /// Upstream 4xx/5xx, malformed body, transport failure, or timeout.
    #[error("{provider} upstream error: {msg}")]
    Upstream {
        /// Provider whose endpoint failed.
        provider: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// No registered connector advertises the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label describing what was requested.
        capability: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<LudioError>),
}

/// Coarse classification of a [`LudioError`], carried on per-item failure
/// markers so transport layers can render outcomes without matching the
/// full error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Credential/token acquisition failure.
    Auth,
    /// Missing or invalid configuration.
    Config,
    /// Unusable caller input.
    InvalidInput,
    /// Entity absent upstream.
    NotFound,
    /// Upstream throttling.
    RateLimited,
    /// Upstream or transport failure.
    Upstream,
    /// Capability not offered by any provider.
    Unsupported,
}

impl LudioError {
    /// Helper: build an `Auth` error.
    pub fn auth(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Auth {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `RateLimited` error.
    pub fn rate_limited(provider: impl Into<String>) -> Self {
        Self::RateLimited {
            provider: provider.into(),
        }
    }

    /// Helper: build an `Upstream` error.
    pub fn upstream(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Coarse kind of this error. Aggregates are classified by their most
    /// severe member, falling back to `Upstream`.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Config(_) => ErrorKind::Config,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::AllProvidersFailed(inner) => inner
                .iter()
                .map(Self::kind)
                .find(|k| matches!(k, ErrorKind::Auth | ErrorKind::Config))
                .unwrap_or(ErrorKind::Upstream),
        }
    }

    /// True when the error must abort an entire batch rather than be
    /// recorded as a per-item failure.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Auth | ErrorKind::Config)
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
