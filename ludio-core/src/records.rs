//! Normalized record types.
//!
//! Each operation keeps its own field set; field names are stable per
//! operation regardless of the upstream JSON shape that produced them.
//! Absent upstream fields map to type-appropriate defaults (empty string,
//! zero, empty list) rather than failing normalization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One game matched by an exact-name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHit {
    /// Upstream game id.
    pub id: String,
    /// Canonical game name.
    pub name: String,
    /// Box-art URL with `{width}`/`{height}` placeholders resolved.
    pub box_art_url: String,
}

/// One channel/user from the bulk lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Upstream user id.
    pub id: String,
    /// Login name the channel was looked up by.
    pub login: String,
    /// Display name.
    pub display_name: String,
    /// User type ("staff", "admin", "" for regular users).
    pub kind: String,
    /// Broadcaster tier ("partner", "affiliate", "").
    pub broadcaster_type: String,
    /// Channel description.
    pub description: String,
    /// Profile image URL.
    pub profile_image_url: String,
    /// Offline banner URL.
    pub offline_image_url: String,
    /// Lifetime channel view count.
    pub view_count: u64,
    /// Account creation timestamp, RFC 3339.
    pub created_at: String,
}

/// One live broadcast of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStream {
    /// Upstream stream id.
    pub id: String,
    /// Broadcaster user id.
    pub user_id: String,
    /// Broadcaster login name.
    pub user_login: String,
    /// Broadcaster display name.
    pub user_name: String,
    /// Game id being broadcast.
    pub game_id: String,
    /// Game name being broadcast.
    pub game_name: String,
    /// Stream type ("live"; "" for anomalies).
    pub kind: String,
    /// Stream title.
    pub title: String,
    /// Current viewer count.
    pub viewer_count: u64,
    /// Broadcast start timestamp, RFC 3339.
    pub started_at: String,
    /// Broadcast language code.
    pub language: String,
    /// Thumbnail URL with `{width}`/`{height}` placeholders resolved.
    pub thumbnail_url: String,
    /// Mature-content flag.
    pub is_mature: bool,
}

/// One entry of the top-games ranking, enriched with live viewer data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopGame {
    /// Upstream game id.
    pub id: String,
    /// Game name.
    pub name: String,
    /// Box-art URL with placeholders resolved.
    pub box_art_url: String,
    /// Summed viewers across the game's sampled live streams.
    pub viewer_count: u64,
    /// Number of sampled live streams.
    pub stream_count: usize,
}

/// Detail snapshot for one game: identity plus a first page of live activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The resolved game.
    pub game: GameHit,
    /// Number of streams on the sampled first page.
    pub stream_count: usize,
    /// Summed viewers across the sampled streams.
    pub total_viewers: u64,
}

/// One ranked streamer inside a [`StreamSummary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamerRank {
    /// Broadcaster display name.
    pub user_name: String,
    /// Viewer count at sampling time.
    pub viewer_count: u64,
}

/// Aggregated live-stream summary for one game across all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    /// Game id the summary was computed for.
    pub game_id: String,
    /// Total live streams observed.
    pub total_streams: usize,
    /// Summed viewers across all streams.
    pub total_viewers: u64,
    /// Mean viewers per stream; 0.0 when no streams are live.
    pub average_viewers: f64,
    /// Stream count per broadcast language.
    pub languages: BTreeMap<String, u64>,
    /// Top streamers by viewer count, descending, at most ten entries.
    /// Ties keep upstream order.
    pub top_streamers: Vec<StreamerRank>,
}

/// Storefront app details composite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDetails {
    /// Storefront app id.
    pub app_id: u32,
    /// App name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Release date as rendered by the storefront.
    pub release_date: String,
    /// Genre labels.
    pub genres: Vec<String>,
    /// Category labels.
    pub categories: Vec<String>,
    /// Formatted final price; empty for free or unlisted apps.
    pub price: String,
    /// Concurrent player count at call time; 0 when the telemetry
    /// sub-fetch fails.
    pub current_players: u64,
    /// Total review count from the review summary.
    pub total_reviews: u64,
    /// Review score description, e.g. "Very Positive".
    pub review_score: String,
    /// Bodies of the most recent reviews.
    pub reviews: Vec<String>,
    /// Minimum PC requirements, HTML as supplied upstream.
    pub pc_requirements_minimum: String,
    /// Recommended PC requirements, HTML as supplied upstream.
    pub pc_requirements_recommended: String,
}

/// One storefront review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// App the review belongs to.
    pub app_id: u32,
    /// Review body.
    pub review: String,
    /// Reviewer account id.
    pub user_id: String,
    /// Reviewer playtime in hours.
    pub hours_played: f64,
    /// Whether the reviewer recommended the app (upstream `voted_up`).
    pub recommended: bool,
}

/// One recently-played game aggregated across an app's recent reviewers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentGame {
    /// Game name.
    pub name: String,
    /// Storefront app id of the game.
    pub app_id: u32,
    /// Number of sampled reviewers who recently played it.
    pub player_count: u64,
}

/// One guild roster entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    /// Character name.
    pub name: String,
    /// Character level, when the roster payload carries it.
    pub level: Option<u32>,
    /// Guild rank, when the roster payload carries it.
    pub rank: Option<u32>,
}

/// Basic profile of one enumerated guild member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMemberProfile {
    /// Character name.
    pub name: String,
    /// Character level.
    pub level: u32,
}

/// Windowed guild roster enumeration result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterReport {
    /// Total member entries walked (across all requested guilds).
    pub total: usize,
    /// Offset the window started at.
    pub offset: usize,
    /// Window size requested.
    pub limit: usize,
    /// Collected member profiles, roster order preserved.
    pub results: Vec<GuildMemberProfile>,
}

/// Character combat statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStatistics {
    /// Maximum health.
    pub health: u64,
    /// Maximum primary power.
    pub power: u64,
    /// Primary power type, e.g. "mana".
    pub power_type: String,
}

/// One equipped item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    /// Equipment slot name.
    pub slot: String,
    /// Item name.
    pub name: String,
    /// Item level, when present.
    pub item_level: Option<u32>,
}

/// Character profile composite.
///
/// The profile fields come from the primary lookup; `statistics`,
/// `equipment`, and `achievement_points` come from secondary sub-fetches
/// and downgrade to empty defaults when those fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Character name.
    pub name: String,
    /// Character level.
    pub level: u32,
    /// Playable class name.
    pub character_class: String,
    /// Playable race name.
    pub race: String,
    /// Faction name.
    pub faction: String,
    /// Realm slug the character lives on.
    pub realm: String,
    /// Lifetime achievement points; 0 when the sub-fetch fails.
    pub achievement_points: u64,
    /// Combat statistics; `None` when the sub-fetch fails.
    pub statistics: Option<CharacterStatistics>,
    /// Equipped items; empty when the sub-fetch fails.
    pub equipment: Vec<EquippedItem>,
}
