use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with router endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding
/// new capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Game lookup by exact name (one-to-many hits per name).
    GameSearch,
    /// Game detail snapshot: game info plus first page of live streams.
    GameSnapshot,
    /// Most popular games ranking with per-game viewer aggregation.
    TopGames,
    /// Full live-stream summary for one game (totals, languages, top streamers).
    StreamSummary,
    /// Live streams currently broadcasting a game.
    LiveStreams,
    /// Bulk channel/user lookup by login name.
    ChannelsBulk,

    /// Storefront app details composite (details, players, review summary).
    AppDetails,
    /// Concurrent player count for one app.
    CurrentPlayers,
    /// Paginated storefront reviews.
    Reviews,
    /// Recently played games of an app's recent reviewers.
    RecentlyPlayed,

    /// Guild roster with windowed member enumeration.
    GuildRoster,
    /// Character profile composite (profile, achievements, equipment, statistics).
    CharacterProfile,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GameSearch => "game-search",
            Self::GameSnapshot => "game-snapshot",
            Self::TopGames => "top-games",
            Self::StreamSummary => "stream-summary",
            Self::LiveStreams => "live-streams",
            Self::ChannelsBulk => "channels-bulk",
            Self::AppDetails => "app-details",
            Self::CurrentPlayers => "current-players",
            Self::Reviews => "reviews",
            Self::RecentlyPlayed => "recently-played",
            Self::GuildRoster => "guild-roster",
            Self::CharacterProfile => "character-profile",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
