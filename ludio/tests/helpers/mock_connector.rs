#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ludio::{
    AppDetails, Channel, CharacterProfile, GameHit, GameSnapshot, GuildMember, GuildMemberProfile,
    LiveStream, LudioConnector, LudioError, RecentGame, RecentOptions, Review, ReviewOptions,
    RosterOptions, StreamOptions, StreamSummary, TopGame,
};
use ludio_core::connector::{
    AppDetailsProvider, ChannelsBulkProvider, CharacterProfileProvider, CurrentPlayersProvider,
    GameSearchProvider, GameSnapshotProvider, GuildRosterProvider, LiveStreamsProvider,
    RecentlyPlayedProvider, ReviewsProvider, StreamSummaryProvider, TopGamesProvider,
};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
///
/// Capabilities are advertised only when their closure is set, so each
/// test declares exactly the surface it needs. `calls` counts capability
/// invocations across the connector.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub ensure_ready_error: Option<LudioError>,
    pub max_batch: usize,
    pub calls: Arc<AtomicUsize>,

    pub search_fn: Option<Arc<dyn Fn(&str) -> Result<Vec<GameHit>, LudioError> + Send + Sync>>,
    pub snapshot_fn: Option<Arc<dyn Fn(&str) -> Result<GameSnapshot, LudioError> + Send + Sync>>,
    pub top_games_fn: Option<Arc<dyn Fn(usize) -> Result<Vec<TopGame>, LudioError> + Send + Sync>>,
    pub summary_fn: Option<Arc<dyn Fn(&str) -> Result<StreamSummary, LudioError> + Send + Sync>>,
    pub live_streams_fn:
        Option<Arc<dyn Fn(&str, &StreamOptions) -> Result<Vec<LiveStream>, LudioError> + Send + Sync>>,
    pub channels_fn:
        Option<Arc<dyn Fn(&[String]) -> Result<Vec<Channel>, LudioError> + Send + Sync>>,
    pub app_details_fn:
        Option<Arc<dyn Fn(u32, &ReviewOptions) -> Result<AppDetails, LudioError> + Send + Sync>>,
    pub current_players_fn: Option<Arc<dyn Fn(u32) -> Result<u64, LudioError> + Send + Sync>>,
    pub reviews_fn:
        Option<Arc<dyn Fn(u32, &ReviewOptions) -> Result<Vec<Review>, LudioError> + Send + Sync>>,
    pub recent_fn: Option<
        Arc<dyn Fn(u32, &RecentOptions) -> Result<Vec<RecentGame>, LudioError> + Send + Sync>,
    >,
    pub guild_members_fn:
        Option<Arc<dyn Fn(&str) -> Result<Vec<GuildMember>, LudioError> + Send + Sync>>,
    pub member_profile_fn:
        Option<Arc<dyn Fn(&str) -> Result<Option<GuildMemberProfile>, LudioError> + Send + Sync>>,
    pub character_fn:
        Option<Arc<dyn Fn(&str, &str) -> Result<CharacterProfile, LudioError> + Send + Sync>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            ensure_ready_error: None,
            max_batch: 100,
            calls: Arc::new(AtomicUsize::new(0)),

            search_fn: None,
            snapshot_fn: None,
            top_games_fn: None,
            summary_fn: None,
            live_streams_fn: None,
            channels_fn: None,
            app_details_fn: None,
            current_players_fn: None,
            reviews_fn: None,
            recent_fn: None,
            guild_members_fn: None,
            member_profile_fn: None,
            character_fn: None,
        }
    }
}

impl MockConnector {
    async fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

pub fn hit(id: &str, name: &str) -> GameHit {
    GameHit {
        id: id.to_owned(),
        name: name.to_owned(),
        box_art_url: String::new(),
    }
}

pub fn member(name: &str) -> GuildMember {
    GuildMember {
        name: name.to_owned(),
        level: Some(70),
        rank: Some(5),
    }
}

pub fn profile(name: &str) -> GuildMemberProfile {
    GuildMemberProfile {
        name: name.to_owned(),
        level: 70,
    }
}

#[async_trait]
impl LudioConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn ensure_ready(&self) -> Result<(), LudioError> {
        match &self.ensure_ready_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn as_game_search_provider(&self) -> Option<&dyn GameSearchProvider> {
        self.search_fn.as_ref().map(|_| self as &dyn GameSearchProvider)
    }
    fn as_game_snapshot_provider(&self) -> Option<&dyn GameSnapshotProvider> {
        self.snapshot_fn.as_ref().map(|_| self as &dyn GameSnapshotProvider)
    }
    fn as_top_games_provider(&self) -> Option<&dyn TopGamesProvider> {
        self.top_games_fn.as_ref().map(|_| self as &dyn TopGamesProvider)
    }
    fn as_stream_summary_provider(&self) -> Option<&dyn StreamSummaryProvider> {
        self.summary_fn.as_ref().map(|_| self as &dyn StreamSummaryProvider)
    }
    fn as_live_streams_provider(&self) -> Option<&dyn LiveStreamsProvider> {
        self.live_streams_fn.as_ref().map(|_| self as &dyn LiveStreamsProvider)
    }
    fn as_channels_bulk_provider(&self) -> Option<&dyn ChannelsBulkProvider> {
        self.channels_fn.as_ref().map(|_| self as &dyn ChannelsBulkProvider)
    }
    fn as_app_details_provider(&self) -> Option<&dyn AppDetailsProvider> {
        self.app_details_fn.as_ref().map(|_| self as &dyn AppDetailsProvider)
    }
    fn as_current_players_provider(&self) -> Option<&dyn CurrentPlayersProvider> {
        self.current_players_fn.as_ref().map(|_| self as &dyn CurrentPlayersProvider)
    }
    fn as_reviews_provider(&self) -> Option<&dyn ReviewsProvider> {
        self.reviews_fn.as_ref().map(|_| self as &dyn ReviewsProvider)
    }
    fn as_recently_played_provider(&self) -> Option<&dyn RecentlyPlayedProvider> {
        self.recent_fn.as_ref().map(|_| self as &dyn RecentlyPlayedProvider)
    }
    fn as_guild_roster_provider(&self) -> Option<&dyn GuildRosterProvider> {
        self.guild_members_fn.as_ref().map(|_| self as &dyn GuildRosterProvider)
    }
    fn as_character_profile_provider(&self) -> Option<&dyn CharacterProfileProvider> {
        self.character_fn.as_ref().map(|_| self as &dyn CharacterProfileProvider)
    }
}

#[async_trait]
impl GameSearchProvider for MockConnector {
    async fn search_game(&self, name: &str) -> Result<Vec<GameHit>, LudioError> {
        self.tick().await;
        match &self.search_fn {
            Some(f) => f(name),
            None => Err(LudioError::unsupported("search_games")),
        }
    }
}

#[async_trait]
impl GameSnapshotProvider for MockConnector {
    async fn game_snapshot(&self, name: &str) -> Result<GameSnapshot, LudioError> {
        self.tick().await;
        match &self.snapshot_fn {
            Some(f) => f(name),
            None => Err(LudioError::unsupported("game_snapshot")),
        }
    }
}

#[async_trait]
impl TopGamesProvider for MockConnector {
    async fn top_games(&self, limit: usize) -> Result<Vec<TopGame>, LudioError> {
        self.tick().await;
        match &self.top_games_fn {
            Some(f) => f(limit),
            None => Err(LudioError::unsupported("top_games")),
        }
    }
}

#[async_trait]
impl StreamSummaryProvider for MockConnector {
    async fn stream_summary(&self, game_id: &str) -> Result<StreamSummary, LudioError> {
        self.tick().await;
        match &self.summary_fn {
            Some(f) => f(game_id),
            None => Err(LudioError::unsupported("stream_summary")),
        }
    }
}

#[async_trait]
impl LiveStreamsProvider for MockConnector {
    async fn live_streams(
        &self,
        game_id: &str,
        opts: &StreamOptions,
    ) -> Result<Vec<LiveStream>, LudioError> {
        self.tick().await;
        match &self.live_streams_fn {
            Some(f) => f(game_id, opts),
            None => Err(LudioError::unsupported("live_streams")),
        }
    }
}

#[async_trait]
impl ChannelsBulkProvider for MockConnector {
    fn max_batch(&self) -> usize {
        self.max_batch
    }

    async fn channels_chunk(&self, logins: &[String]) -> Result<Vec<Channel>, LudioError> {
        self.tick().await;
        match &self.channels_fn {
            Some(f) => f(logins),
            None => Err(LudioError::unsupported("channels")),
        }
    }
}

#[async_trait]
impl AppDetailsProvider for MockConnector {
    async fn app_details(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
    ) -> Result<AppDetails, LudioError> {
        self.tick().await;
        match &self.app_details_fn {
            Some(f) => f(app_id, opts),
            None => Err(LudioError::unsupported("app_details")),
        }
    }
}

#[async_trait]
impl CurrentPlayersProvider for MockConnector {
    async fn current_players(&self, app_id: u32) -> Result<u64, LudioError> {
        self.tick().await;
        match &self.current_players_fn {
            Some(f) => f(app_id),
            None => Err(LudioError::unsupported("current_players")),
        }
    }
}

#[async_trait]
impl ReviewsProvider for MockConnector {
    async fn app_reviews(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
    ) -> Result<Vec<Review>, LudioError> {
        self.tick().await;
        match &self.reviews_fn {
            Some(f) => f(app_id, opts),
            None => Err(LudioError::unsupported("app_reviews")),
        }
    }
}

#[async_trait]
impl RecentlyPlayedProvider for MockConnector {
    async fn recent_games(
        &self,
        app_id: u32,
        opts: &RecentOptions,
    ) -> Result<Vec<RecentGame>, LudioError> {
        self.tick().await;
        match &self.recent_fn {
            Some(f) => f(app_id, opts),
            None => Err(LudioError::unsupported("recent_games")),
        }
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
        self.tick().await;
        match &self.guild_members_fn {
            Some(f) => f(guild),
            None => Err(LudioError::unsupported("guild_rosters")),
        }
    }

    async fn member_profile(
        &self,
        _realm: &str,
        name: &str,
        _opts: &RosterOptions,
    ) -> Result<Option<GuildMemberProfile>, LudioError> {
        self.tick().await;
        match &self.member_profile_fn {
            Some(f) => f(name),
            None => Err(LudioError::unsupported("guild_rosters")),
        }
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
        self.tick().await;
        match &self.character_fn {
            Some(f) => f(realm, name),
            None => Err(LudioError::unsupported("character_profile")),
        }
    }
}
