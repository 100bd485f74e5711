//! Per-operation option bags with their documented defaults.
//!
//! Unrecognized transport-layer keys are the transport's concern; the
//! engine only ever sees these typed bags.

use serde::{Deserialize, Serialize};

/// Options for storefront review operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewOptions {
    /// Review language filter.
    pub language: String,
    /// Upper bound on reviews accumulated per app.
    pub max_reviews: usize,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            language: "portuguese".to_owned(),
            max_reviews: 50,
        }
    }
}

/// Options for live-stream listing operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamOptions {
    /// Broadcast language filter.
    pub language: String,
    /// Upper bound on streams returned per game. A single upstream
    /// request serves at most 100, so limits above 100 are clamped.
    pub limit: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            language: "pt".to_owned(),
            limit: 100,
        }
    }
}

/// Options for the recently-played reviewer fan-out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentOptions {
    /// Number of recent reviewers sampled per app.
    pub num_players: usize,
}

impl Default for RecentOptions {
    fn default() -> Self {
        Self { num_players: 10 }
    }
}

/// Options for guild roster enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterOptions {
    /// Battle.net region, e.g. "us" or "eu".
    pub region: String,
    /// Realm slug the guilds live on.
    pub realm: String,
    /// Number of member profiles skipped before collection starts.
    pub offset: usize,
    /// Maximum number of member profiles collected.
    pub limit: usize,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            region: "us".to_owned(),
            realm: "azralon".to_owned(),
            offset: 0,
            limit: 50,
        }
    }
}
