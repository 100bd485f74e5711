//! ludio-twitch
//!
//! Public connector that implements `LudioConnector` on top of the Twitch
//! Helix API. Exposes catalog search, game snapshots, top-game rankings,
//! live stream listings, per-game broadcast summaries, and bulk channel
//! resolution, all behind the client-credentials OAuth flow.
#![warn(missing_docs)]

mod builder;
mod client;
mod normalize;
mod wire;

pub use builder::TwitchBuilder;

use async_trait::async_trait;
use url::Url;

use ludio_core::connector::{
    ChannelsBulkProvider, GameSearchProvider, GameSnapshotProvider, LiveStreamsProvider,
    LudioConnector, ProviderKey, StreamSummaryProvider, TopGamesProvider,
};
use ludio_core::records::{Channel, GameHit, GameSnapshot, LiveStream, StreamSummary, TopGame};
use ludio_core::{LudioError, Page, StreamOptions, TokenCache, TwitchCredentials, drain_pages};

use crate::client::PROVIDER;
use crate::wire::{Envelope, GameWire, StreamWire, UserWire};

/// Largest `first` value a single Helix collection request accepts.
const PAGE_SIZE: usize = 100;

/// How many broadcasts a snapshot samples.
const SNAPSHOT_SAMPLE: usize = 20;

/// Public connector type. Construct through [`TwitchBuilder`].
pub struct TwitchConnector {
    pub(crate) creds: TwitchCredentials,
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: Url,
    pub(crate) auth_base: Url,
    pub(crate) tokens: TokenCache,
}

impl TwitchConnector {
    /// Static provider key for orchestrator priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new(PROVIDER);

    async fn streams_page(
        &self,
        game_id: &str,
        first: usize,
        language: Option<&str>,
        after: Option<String>,
    ) -> Result<Page<LiveStream>, LudioError> {
        let mut query = vec![
            ("game_id", game_id.to_string()),
            ("first", first.to_string()),
        ];
        if let Some(lang) = language {
            query.push(("language", lang.to_string()));
        }
        if let Some(cursor) = after {
            query.push(("after", cursor));
        }
        let env: Envelope<StreamWire> = self
            .get("helix/streams", &query, &format!("streams for game {game_id}"))
            .await?;
        let cursor = env.cursor();
        Ok(Page {
            items: env.data.into_iter().map(normalize::live_stream).collect(),
            cursor,
        })
    }
}

#[async_trait]
impl GameSearchProvider for TwitchConnector {
    async fn search_game(&self, name: &str) -> Result<Vec<GameHit>, LudioError> {
        let env: Envelope<GameWire> = self
            .get(
                "helix/games",
                &[("name", name.to_string())],
                &format!("game {name}"),
            )
            .await?;
        Ok(env.data.into_iter().map(normalize::game_hit).collect())
    }
}

#[async_trait]
impl GameSnapshotProvider for TwitchConnector {
    async fn game_snapshot(&self, name: &str) -> Result<GameSnapshot, LudioError> {
        let game = self
            .search_game(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LudioError::not_found(format!("game {name}")))?;
        let sample = self
            .streams_page(&game.id, SNAPSHOT_SAMPLE, None, None)
            .await?;
        Ok(GameSnapshot {
            stream_count: sample.items.len(),
            total_viewers: sample.items.iter().map(|s| s.viewer_count).sum(),
            game,
        })
    }
}

#[async_trait]
impl TopGamesProvider for TwitchConnector {
    async fn top_games(&self, limit: usize) -> Result<Vec<TopGame>, LudioError> {
        let first = PAGE_SIZE.min(limit.max(1));
        let hits = drain_pages(
            |after: Option<String>| async move {
                let mut query = vec![("first", first.to_string())];
                if let Some(cursor) = after {
                    query.push(("after", cursor));
                }
                let env: Envelope<GameWire> =
                    self.get("helix/games/top", &query, "top games").await?;
                let cursor = env.cursor();
                Ok(Page {
                    items: env.data.into_iter().map(normalize::game_hit).collect(),
                    cursor,
                })
            },
            Some(limit),
        )
        .await?;

        // Rank enrichment is best-effort: a game whose stream sample cannot
        // be fetched keeps its catalog entry with zeroed figures.
        let mut out = Vec::with_capacity(hits.len());
        for hit in hits {
            let (viewer_count, stream_count) =
                match self.streams_page(&hit.id, PAGE_SIZE, None, None).await {
                    Ok(page) => (
                        page.items.iter().map(|s| s.viewer_count).sum::<u64>(),
                        page.items.len(),
                    ),
                    Err(e) => {
                        tracing::warn!(game = %hit.name, error = %e, "viewer sample failed");
                        (0, 0)
                    }
                };
            out.push(TopGame {
                id: hit.id,
                name: hit.name,
                box_art_url: hit.box_art_url,
                viewer_count,
                stream_count,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl StreamSummaryProvider for TwitchConnector {
    async fn stream_summary(&self, game_id: &str) -> Result<StreamSummary, LudioError> {
        let streams = drain_pages(
            |after| self.streams_page(game_id, PAGE_SIZE, None, after),
            None,
        )
        .await?;
        Ok(normalize::summarize(game_id, &streams))
    }
}

#[async_trait]
impl LiveStreamsProvider for TwitchConnector {
    async fn live_streams(
        &self,
        game_id: &str,
        opts: &StreamOptions,
    ) -> Result<Vec<LiveStream>, LudioError> {
        let first = PAGE_SIZE.min(opts.limit.max(1));
        let lang = (!opts.language.is_empty()).then_some(opts.language.as_str());
        let page = self.streams_page(game_id, first, lang, None).await?;
        let mut items = page.items;
        items.truncate(opts.limit);
        Ok(items)
    }
}

#[async_trait]
impl ChannelsBulkProvider for TwitchConnector {
    fn max_batch(&self) -> usize {
        PAGE_SIZE
    }

    async fn channels_chunk(&self, logins: &[String]) -> Result<Vec<Channel>, LudioError> {
        if logins.is_empty() {
            return Ok(Vec::new());
        }
        if logins.len() > self.max_batch() {
            return Err(LudioError::invalid_input(format!(
                "at most {} logins per request, got {}",
                self.max_batch(),
                logins.len()
            )));
        }
        let query: Vec<(&str, String)> = logins.iter().map(|l| ("login", l.clone())).collect();
        let env: Envelope<UserWire> = self.get("helix/users", &query, "channels").await?;
        Ok(env.data.into_iter().map(normalize::channel).collect())
    }
}

#[async_trait]
impl LudioConnector for TwitchConnector {
    fn name(&self) -> &'static str {
        PROVIDER
    }
    fn vendor(&self) -> &'static str {
        "Twitch"
    }

    async fn ensure_ready(&self) -> Result<(), LudioError> {
        self.tokens.bearer(|| self.fetch_token()).await.map(|_| ())
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
}
