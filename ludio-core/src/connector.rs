use async_trait::async_trait;

use crate::LudioError;
pub use ludio_types::ProviderKey;

use crate::records::{
    AppDetails, Channel, CharacterProfile, GameHit, GameSnapshot, GuildMember, GuildMemberProfile,
    LiveStream, RecentGame, Review, StreamSummary, TopGame,
};
use ludio_types::{RecentOptions, ReviewOptions, RosterOptions, StreamOptions};

/// Focused role trait for connectors that can search the game catalog.
#[async_trait]
pub trait GameSearchProvider: Send + Sync {
    /// Search the catalog for games matching `name`, best matches first.
    async fn search_game(&self, name: &str) -> Result<Vec<GameHit>, LudioError>;
}

/// Focused role trait for connectors that can assemble a live snapshot of a
/// game: identity plus a sample of current broadcast activity.
#[async_trait]
pub trait GameSnapshotProvider: Send + Sync {
    /// Resolve `name` to a game and sample its current broadcasts.
    async fn game_snapshot(&self, name: &str) -> Result<GameSnapshot, LudioError>;
}

/// Focused role trait for connectors that rank games by live audience.
#[async_trait]
pub trait TopGamesProvider: Send + Sync {
    /// Fetch the `limit` most-watched games, sorted by viewers descending.
    async fn top_games(&self, limit: usize) -> Result<Vec<TopGame>, LudioError>;
}

/// Focused role trait for connectors that can summarize every live broadcast
/// of a single game.
#[async_trait]
pub trait StreamSummaryProvider: Send + Sync {
    /// Walk all live broadcasts of the game identified by `game_id` and
    /// aggregate viewer and language totals.
    async fn stream_summary(&self, game_id: &str) -> Result<StreamSummary, LudioError>;
}

/// Focused role trait for connectors that list live broadcasts of a game.
#[async_trait]
pub trait LiveStreamsProvider: Send + Sync {
    /// Fetch live broadcasts of the game identified by `game_id`, filtered
    /// and capped according to `opts`.
    async fn live_streams(
        &self,
        game_id: &str,
        opts: &StreamOptions,
    ) -> Result<Vec<LiveStream>, LudioError>;
}

/// Focused role trait for connectors that resolve channel profiles in bulk.
#[async_trait]
pub trait ChannelsBulkProvider: Send + Sync {
    /// Largest number of logins a single upstream request accepts.
    fn max_batch(&self) -> usize {
        100
    }

    /// Resolve one chunk of logins (at most [`max_batch`](Self::max_batch))
    /// to channel profiles. Unknown logins are silently absent from the
    /// result.
    async fn channels_chunk(&self, logins: &[String]) -> Result<Vec<Channel>, LudioError>;
}

/// Focused role trait for connectors that serve store-page details.
#[async_trait]
pub trait AppDetailsProvider: Send + Sync {
    /// Fetch the store page for `app_id`, enriched with live player and
    /// review figures where available.
    async fn app_details(&self, app_id: u32, opts: &ReviewOptions)
    -> Result<AppDetails, LudioError>;
}

/// Focused role trait for connectors that report concurrent player counts.
#[async_trait]
pub trait CurrentPlayersProvider: Send + Sync {
    /// Fetch the number of players in `app_id` right now.
    async fn current_players(&self, app_id: u32) -> Result<u64, LudioError>;
}

/// Focused role trait for connectors that serve user reviews.
#[async_trait]
pub trait ReviewsProvider: Send + Sync {
    /// Fetch up to `opts.max_reviews` reviews for `app_id` in the language
    /// `opts.language` names.
    async fn app_reviews(&self, app_id: u32, opts: &ReviewOptions)
    -> Result<Vec<Review>, LudioError>;
}

/// Focused role trait for connectors that derive what an app's audience is
/// playing now.
#[async_trait]
pub trait RecentlyPlayedProvider: Send + Sync {
    /// Sample recent reviewers of `app_id`, fetch each reviewer's
    /// recently-played list, and aggregate occurrence counts per game,
    /// largest first.
    async fn recent_games(
        &self,
        app_id: u32,
        opts: &RecentOptions,
    ) -> Result<Vec<RecentGame>, LudioError>;
}

/// Focused role trait for connectors that serve guild rosters.
#[async_trait]
pub trait GuildRosterProvider: Send + Sync {
    /// Fetch the full member list of `guild` (display name, slugged by the
    /// connector) on `realm`.
    async fn guild_members(
        &self,
        realm: &str,
        guild: &str,
        opts: &RosterOptions,
    ) -> Result<Vec<GuildMember>, LudioError>;

    /// Fetch a minimal profile for one roster member, or `None` when the
    /// character no longer exists upstream.
    async fn member_profile(
        &self,
        realm: &str,
        name: &str,
        opts: &RosterOptions,
    ) -> Result<Option<GuildMemberProfile>, LudioError>;
}

/// Focused role trait for connectors that serve full character profiles.
#[async_trait]
pub trait CharacterProfileProvider: Send + Sync {
    /// Fetch the profile of `name` on `realm` in `region`, enriched with
    /// statistics and equipment where available.
    async fn character_profile(
        &self,
        realm: &str,
        name: &str,
        region: &str,
    ) -> Result<CharacterProfile, LudioError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait LudioConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "ludio-twitch", "ludio-steam").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    ///
    /// Use this helper when configuring routing policies.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Acquire or refresh whatever upstream credential the connector needs.
    ///
    /// Routers call this once before a batch so that a dead credential
    /// aborts the batch instead of failing every item. The default is a
    /// no-op for connectors with no credential lifecycle.
    async fn ensure_ready(&self) -> Result<(), LudioError> {
        Ok(())
    }

    /// Advertise game search capability by returning a usable trait object reference when supported.
    fn as_game_search_provider(&self) -> Option<&dyn GameSearchProvider> {
        None
    }

    /// If implemented, returns a trait object for game snapshots.
    fn as_game_snapshot_provider(&self) -> Option<&dyn GameSnapshotProvider> {
        None
    }
    /// If implemented, returns a trait object for top-game rankings.
    fn as_top_games_provider(&self) -> Option<&dyn TopGamesProvider> {
        None
    }
    /// If implemented, returns a trait object for broadcast summaries.
    fn as_stream_summary_provider(&self) -> Option<&dyn StreamSummaryProvider> {
        None
    }
    /// If implemented, returns a trait object for live broadcast listings.
    fn as_live_streams_provider(&self) -> Option<&dyn LiveStreamsProvider> {
        None
    }
    /// If implemented, returns a trait object for bulk channel resolution.
    fn as_channels_bulk_provider(&self) -> Option<&dyn ChannelsBulkProvider> {
        None
    }

    /// If implemented, returns a trait object for store-page details.
    fn as_app_details_provider(&self) -> Option<&dyn AppDetailsProvider> {
        None
    }
    /// If implemented, returns a trait object for concurrent player counts.
    fn as_current_players_provider(&self) -> Option<&dyn CurrentPlayersProvider> {
        None
    }
    /// If implemented, returns a trait object for user reviews.
    fn as_reviews_provider(&self) -> Option<&dyn ReviewsProvider> {
        None
    }
    /// If implemented, returns a trait object for recently played games.
    fn as_recently_played_provider(&self) -> Option<&dyn RecentlyPlayedProvider> {
        None
    }

    /// If implemented, returns a trait object for guild rosters.
    fn as_guild_roster_provider(&self) -> Option<&dyn GuildRosterProvider> {
        None
    }
    /// If implemented, returns a trait object for character profiles.
    fn as_character_profile_provider(&self) -> Option<&dyn CharacterProfileProvider> {
        None
    }
}
