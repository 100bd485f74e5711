//! Storefront and Web API response shapes.

use std::collections::HashMap;

use serde::Deserialize;

/// `appdetails` responds with a map keyed by the requested app id.
pub(crate) type DetailsEnvelope = HashMap<String, DetailsEntry>;

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<DetailsData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetailsData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub release_date: ReleaseDate,
    #[serde(default)]
    pub genres: Vec<Described>,
    #[serde(default)]
    pub categories: Vec<Described>,
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
    #[serde(default)]
    pub pc_requirements: Requirements,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReleaseDate {
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Described {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceOverview {
    #[serde(default)]
    pub final_formatted: String,
}

/// The storefront serializes absent requirements as an empty JSON array
/// instead of an object, so the field needs both shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Requirements {
    Detailed {
        #[serde(default)]
        minimum: Option<String>,
        #[serde(default)]
        recommended: Option<String>,
    },
    Empty(Vec<serde_json::Value>),
}

impl Default for Requirements {
    fn default() -> Self {
        Self::Empty(Vec::new())
    }
}

impl Requirements {
    pub(crate) fn minimum(&self) -> &str {
        match self {
            Self::Detailed {
                minimum: Some(m), ..
            } => m,
            _ => "",
        }
    }

    pub(crate) fn recommended(&self) -> &str {
        match self {
            Self::Detailed {
                recommended: Some(r),
                ..
            } => r,
            _ => "",
        }
    }
}

/// `appreviews` body: reviews plus a continuation cursor and an aggregate
/// summary block.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewsEnvelope {
    #[serde(default)]
    pub reviews: Vec<ReviewWire>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub query_summary: Option<QuerySummary>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuerySummary {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub review_score_desc: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewWire {
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub author: AuthorWire,
    #[serde(default)]
    pub voted_up: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorWire {
    #[serde(default)]
    pub steamid: Option<String>,
    /// Lifetime playtime in minutes.
    #[serde(default)]
    pub playtime_forever: u64,
}

/// `GetNumberOfCurrentPlayers` body.
#[derive(Debug, Deserialize)]
pub(crate) struct PlayersEnvelope {
    #[serde(default)]
    pub response: PlayersResponse,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayersResponse {
    #[serde(default)]
    pub player_count: Option<u64>,
}

/// `GetRecentlyPlayedGames` body.
#[derive(Debug, Deserialize)]
pub(crate) struct RecentEnvelope {
    #[serde(default)]
    pub response: RecentResponse,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentResponse {
    #[serde(default)]
    pub games: Vec<RecentWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentWire {
    #[serde(default)]
    pub name: String,
    pub appid: u32,
}
