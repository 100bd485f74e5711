//! ludio-mock
//!
//! Mock connector for CI-safe examples and tests. Serves deterministic
//! data from static fixtures and implements every capability. The inputs
//! `"FAIL"` and `"TIMEOUT"` (and the [`MockConnector::FAIL_APP`] /
//! [`MockConnector::TIMEOUT_APP`] app ids) script failures and latency.

use std::collections::BTreeMap;

use async_trait::async_trait;
use ludio_core::connector::{
    AppDetailsProvider, ChannelsBulkProvider, CharacterProfileProvider, CurrentPlayersProvider,
    GameSearchProvider, GameSnapshotProvider, GuildRosterProvider, LiveStreamsProvider,
    LudioConnector, RecentlyPlayedProvider, ReviewsProvider, StreamSummaryProvider,
    TopGamesProvider,
};
use ludio_core::records::{
    AppDetails, Channel, CharacterProfile, GameHit, GameSnapshot, GuildMember, GuildMemberProfile,
    LiveStream, RecentGame, Review, StreamSummary, StreamerRank, TopGame,
};
use ludio_core::{
    LudioError, RecentOptions, ReviewOptions, RosterOptions, StreamOptions,
};

mod fixtures;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// App id that scripts a forced failure.
    pub const FAIL_APP: u32 = 999_001;
    /// App id that scripts latency long enough to trip short timeouts.
    pub const TIMEOUT_APP: u32 = 999_002;

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> LudioError {
        LudioError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(input: &str, capability: &'static str) -> Result<(), LudioError> {
        match input {
            "FAIL" => Err(LudioError::upstream(
                "ludio-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Short enough to keep tests fast, long enough for a
                // millisecond-scale orchestrator timeout to fire.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn maybe_fail_or_timeout_app(
        app_id: u32,
        capability: &'static str,
    ) -> Result<(), LudioError> {
        match app_id {
            Self::FAIL_APP => Self::maybe_fail_or_timeout("FAIL", capability).await,
            Self::TIMEOUT_APP => Self::maybe_fail_or_timeout("TIMEOUT", capability).await,
            _ => Ok(()),
        }
    }

    fn summarize(game_id: &str, streams: &[LiveStream]) -> StreamSummary {
        let total_viewers: u64 = streams.iter().map(|s| s.viewer_count).sum();
        let mut languages = BTreeMap::new();
        for s in streams {
            *languages.entry(s.language.clone()).or_insert(0u64) += 1;
        }
        let mut ranks: Vec<StreamerRank> = streams
            .iter()
            .map(|s| StreamerRank {
                user_name: s.user_name.clone(),
                viewer_count: s.viewer_count,
            })
            .collect();
        ranks.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
        ranks.truncate(10);
        StreamSummary {
            game_id: game_id.to_string(),
            total_streams: streams.len(),
            total_viewers,
            average_viewers: if streams.is_empty() {
                0.0
            } else {
                total_viewers as f64 / streams.len() as f64
            },
            languages,
            top_streamers: ranks,
        }
    }
}

#[async_trait]
impl LudioConnector for MockConnector {
    fn name(&self) -> &'static str {
        "ludio-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_game_search_provider(&self) -> Option<&dyn GameSearchProvider> {
        Some(self as &dyn GameSearchProvider)
    }
    fn as_game_snapshot_provider(&self) -> Option<&dyn GameSnapshotProvider> {
        Some(self as &dyn GameSnapshotProvider)
    }
    fn as_top_games_provider(&self) -> Option<&dyn TopGamesProvider> {
        Some(self as &dyn TopGamesProvider)
    }
    fn as_stream_summary_provider(&self) -> Option<&dyn StreamSummaryProvider> {
        Some(self as &dyn StreamSummaryProvider)
    }
    fn as_live_streams_provider(&self) -> Option<&dyn LiveStreamsProvider> {
        Some(self as &dyn LiveStreamsProvider)
    }
    fn as_channels_bulk_provider(&self) -> Option<&dyn ChannelsBulkProvider> {
        Some(self as &dyn ChannelsBulkProvider)
    }
    fn as_app_details_provider(&self) -> Option<&dyn AppDetailsProvider> {
        Some(self as &dyn AppDetailsProvider)
    }
    fn as_current_players_provider(&self) -> Option<&dyn CurrentPlayersProvider> {
        Some(self as &dyn CurrentPlayersProvider)
    }
    fn as_reviews_provider(&self) -> Option<&dyn ReviewsProvider> {
        Some(self as &dyn ReviewsProvider)
    }
    fn as_recently_played_provider(&self) -> Option<&dyn RecentlyPlayedProvider> {
        Some(self as &dyn RecentlyPlayedProvider)
    }
    fn as_guild_roster_provider(&self) -> Option<&dyn GuildRosterProvider> {
        Some(self as &dyn GuildRosterProvider)
    }
    fn as_character_profile_provider(&self) -> Option<&dyn CharacterProfileProvider> {
        Some(self as &dyn CharacterProfileProvider)
    }
}

#[async_trait]
impl GameSearchProvider for MockConnector {
    async fn search_game(&self, name: &str) -> Result<Vec<GameHit>, LudioError> {
        Self::maybe_fail_or_timeout(name, "search_game").await?;
        Ok(fixtures::games::by_name(name).unwrap_or_default())
    }
}

#[async_trait]
impl GameSnapshotProvider for MockConnector {
    async fn game_snapshot(&self, name: &str) -> Result<GameSnapshot, LudioError> {
        Self::maybe_fail_or_timeout(name, "game_snapshot").await?;
        let game = fixtures::games::by_name(name)
            .and_then(|hits| hits.into_iter().next())
            .ok_or_else(|| Self::not_found(&format!("game {name}")))?;
        let streams = fixtures::streams::for_game(&game.id);
        Ok(GameSnapshot {
            stream_count: streams.len(),
            total_viewers: streams.iter().map(|s| s.viewer_count).sum(),
            game,
        })
    }
}

#[async_trait]
impl TopGamesProvider for MockConnector {
    async fn top_games(&self, limit: usize) -> Result<Vec<TopGame>, LudioError> {
        let mut top = fixtures::games::top();
        top.truncate(limit);
        Ok(top)
    }
}

#[async_trait]
impl StreamSummaryProvider for MockConnector {
    async fn stream_summary(&self, game_id: &str) -> Result<StreamSummary, LudioError> {
        Self::maybe_fail_or_timeout(game_id, "stream_summary").await?;
        Ok(Self::summarize(game_id, &fixtures::streams::for_game(game_id)))
    }
}

#[async_trait]
impl LiveStreamsProvider for MockConnector {
    async fn live_streams(
        &self,
        game_id: &str,
        opts: &StreamOptions,
    ) -> Result<Vec<LiveStream>, LudioError> {
        Self::maybe_fail_or_timeout(game_id, "live_streams").await?;
        let mut streams: Vec<LiveStream> = fixtures::streams::for_game(game_id)
            .into_iter()
            .filter(|s| opts.language.is_empty() || s.language == opts.language)
            .collect();
        streams.truncate(opts.limit);
        Ok(streams)
    }
}

#[async_trait]
impl ChannelsBulkProvider for MockConnector {
    async fn channels_chunk(&self, logins: &[String]) -> Result<Vec<Channel>, LudioError> {
        for login in logins {
            Self::maybe_fail_or_timeout(login, "channels").await?;
        }
        Ok(logins
            .iter()
            .filter_map(|l| fixtures::streams::channel(l))
            .collect())
    }
}

#[async_trait]
impl AppDetailsProvider for MockConnector {
    async fn app_details(
        &self,
        app_id: u32,
        _opts: &ReviewOptions,
    ) -> Result<AppDetails, LudioError> {
        Self::maybe_fail_or_timeout_app(app_id, "app_details").await?;
        fixtures::apps::details(app_id).ok_or_else(|| Self::not_found(&format!("app {app_id}")))
    }
}

#[async_trait]
impl CurrentPlayersProvider for MockConnector {
    async fn current_players(&self, app_id: u32) -> Result<u64, LudioError> {
        Self::maybe_fail_or_timeout_app(app_id, "current_players").await?;
        Ok(fixtures::apps::players(app_id).unwrap_or(0))
    }
}

#[async_trait]
impl ReviewsProvider for MockConnector {
    async fn app_reviews(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
    ) -> Result<Vec<Review>, LudioError> {
        Self::maybe_fail_or_timeout_app(app_id, "app_reviews").await?;
        let mut reviews = fixtures::apps::reviews(app_id);
        reviews.truncate(opts.max_reviews);
        Ok(reviews)
    }
}

#[async_trait]
impl RecentlyPlayedProvider for MockConnector {
    async fn recent_games(
        &self,
        app_id: u32,
        _opts: &RecentOptions,
    ) -> Result<Vec<RecentGame>, LudioError> {
        Self::maybe_fail_or_timeout_app(app_id, "recent_games").await?;
        Ok(fixtures::apps::recent(app_id))
    }
}

#[async_trait]
impl GuildRosterProvider for MockConnector {
    async fn guild_members(
        &self,
        _realm: &str,
        guild: &str,
        _opts: &RosterOptions,
    ) -> Result<Vec<GuildMember>, LudioError> {
        Self::maybe_fail_or_timeout(guild, "guild_members").await?;
        fixtures::guilds::members(guild).ok_or_else(|| Self::not_found(&format!("guild {guild}")))
    }

    async fn member_profile(
        &self,
        _realm: &str,
        name: &str,
        _opts: &RosterOptions,
    ) -> Result<Option<GuildMemberProfile>, LudioError> {
        Self::maybe_fail_or_timeout(name, "member_profile").await?;
        Ok(fixtures::guilds::profile(name))
    }
}

#[async_trait]
impl CharacterProfileProvider for MockConnector {
    async fn character_profile(
        &self,
        realm: &str,
        name: &str,
        _region: &str,
    ) -> Result<CharacterProfile, LudioError> {
        Self::maybe_fail_or_timeout(name, "character_profile").await?;
        fixtures::guilds::character(name, realm)
            .ok_or_else(|| Self::not_found(&format!("character {name}")))
    }
}
