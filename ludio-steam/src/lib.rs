//! ludio-steam
//!
//! Public connector that implements `LudioConnector` on top of the Steam
//! storefront and Web API. Exposes store-page details, user reviews with
//! cursor pagination, concurrent player counts, and the recently-played
//! fan-out over an app's recent reviewers.
#![warn(missing_docs)]

mod builder;
mod wire;

pub use builder::SteamBuilder;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use ludio_core::connector::{
    AppDetailsProvider, CurrentPlayersProvider, LudioConnector, ProviderKey,
    RecentlyPlayedProvider, ReviewsProvider,
};
use ludio_core::http::send_json;
use ludio_core::records::{AppDetails, RecentGame, Review};
use ludio_core::{LudioError, Page, RecentOptions, ReviewOptions, SteamCredentials, drain_pages};

use crate::wire::{
    DetailsEnvelope, PlayersEnvelope, RecentEnvelope, ReviewWire, ReviewsEnvelope,
};

const PROVIDER: &str = "ludio-steam";

/// Reviews are paged ten at a time; the summary request may take up to 50.
const REVIEW_PAGE: usize = 10;
const SUMMARY_REVIEW_CAP: usize = 50;

/// The storefront's start-of-stream cursor sentinel.
const CURSOR_START: &str = "*";

/// Public connector type. Construct through [`SteamBuilder`].
pub struct SteamConnector {
    pub(crate) creds: SteamCredentials,
    pub(crate) http: reqwest::Client,
    pub(crate) store_base: Url,
    pub(crate) api_base: Url,
}

impl SteamConnector {
    /// Static provider key for orchestrator priority configuration.
    pub const KEY: ProviderKey = ProviderKey::new(PROVIDER);

    async fn get<T: DeserializeOwned>(
        &self,
        base: &Url,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, LudioError> {
        let url = base
            .join(path)
            .map_err(|e| LudioError::config(format!("steam url: {e}")))?;
        send_json(PROVIDER, what, self.http.get(url).query(query)).await
    }

    async fn reviews_page(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
        per_page: usize,
        cursor: Option<String>,
    ) -> Result<ReviewsEnvelope, LudioError> {
        let query = vec![
            ("json", "1".to_string()),
            ("filter", "recent".to_string()),
            ("language", opts.language.clone()),
            ("review_type", "all".to_string()),
            ("purchase_type", "all".to_string()),
            ("num_per_page", per_page.to_string()),
            ("cursor", cursor.unwrap_or_else(|| CURSOR_START.to_string())),
        ];
        self.get(
            &self.store_base,
            &format!("appreviews/{app_id}"),
            &query,
            &format!("reviews for app {app_id}"),
        )
        .await
    }

    fn review(app_id: u32, w: ReviewWire) -> Review {
        Review {
            app_id,
            review: w.review,
            user_id: w.author.steamid.unwrap_or_default(),
            hours_played: w.author.playtime_forever as f64 / 60.0,
            recommended: w.voted_up,
        }
    }
}

#[async_trait]
impl AppDetailsProvider for SteamConnector {
    async fn app_details(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
    ) -> Result<AppDetails, LudioError> {
        let env: DetailsEnvelope = self
            .get(
                &self.store_base,
                "api/appdetails",
                &[("appids", app_id.to_string())],
                &format!("app {app_id}"),
            )
            .await?;
        let data = env
            .get(&app_id.to_string())
            .filter(|entry| entry.success)
            .and_then(|entry| entry.data.as_ref())
            .ok_or_else(|| LudioError::not_found(format!("app {app_id}")))?;

        let mut details = AppDetails {
            app_id,
            name: data.name.clone(),
            description: data.short_description.clone(),
            release_date: data.release_date.date.clone(),
            genres: data.genres.iter().map(|g| g.description.clone()).collect(),
            categories: data
                .categories
                .iter()
                .map(|c| c.description.clone())
                .collect(),
            price: data
                .price_overview
                .as_ref()
                .map(|p| p.final_formatted.clone())
                .unwrap_or_default(),
            pc_requirements_minimum: data.pc_requirements.minimum().to_string(),
            pc_requirements_recommended: data.pc_requirements.recommended().to_string(),
            ..AppDetails::default()
        };

        // Live figures are best-effort: the store page stands on its own
        // when the stats or review endpoints are unavailable.
        match self.current_players(app_id).await {
            Ok(count) => details.current_players = count,
            Err(e) => tracing::warn!(app_id, error = %e, "player count fetch failed"),
        }
        match self
            .reviews_page(app_id, opts, SUMMARY_REVIEW_CAP.min(opts.max_reviews), None)
            .await
        {
            Ok(env) => {
                if let Some(summary) = env.query_summary {
                    details.total_reviews = summary.total_reviews;
                    details.review_score = summary.review_score_desc;
                }
                details.reviews = env.reviews.into_iter().map(|r| r.review).collect();
            }
            Err(e) => tracing::warn!(app_id, error = %e, "review summary fetch failed"),
        }
        Ok(details)
    }
}

#[async_trait]
impl CurrentPlayersProvider for SteamConnector {
    async fn current_players(&self, app_id: u32) -> Result<u64, LudioError> {
        let env: PlayersEnvelope = self
            .get(
                &self.api_base,
                "ISteamUserStats/GetNumberOfCurrentPlayers/v1/",
                &[("appid", app_id.to_string())],
                &format!("player count for app {app_id}"),
            )
            .await?;
        Ok(env.response.player_count.unwrap_or(0))
    }
}

#[async_trait]
impl ReviewsProvider for SteamConnector {
    async fn app_reviews(
        &self,
        app_id: u32,
        opts: &ReviewOptions,
    ) -> Result<Vec<Review>, LudioError> {
        let reviews = drain_pages(
            |cursor| async move {
                let env = self.reviews_page(app_id, opts, REVIEW_PAGE, cursor).await?;
                Ok(Page {
                    items: env.reviews,
                    cursor: env
                        .cursor
                        .filter(|c| !c.is_empty() && c.as_str() != CURSOR_START),
                })
            },
            Some(opts.max_reviews),
        )
        .await?;
        Ok(reviews
            .into_iter()
            .map(|w| Self::review(app_id, w))
            .collect())
    }
}

#[async_trait]
impl RecentlyPlayedProvider for SteamConnector {
    async fn recent_games(
        &self,
        app_id: u32,
        opts: &RecentOptions,
    ) -> Result<Vec<RecentGame>, LudioError> {
        let key = self.creds.api_key.as_deref().ok_or_else(|| {
            LudioError::config("recently-played lookup needs a Steam Web API key")
        })?;

        let query = vec![
            ("json", "1".to_string()),
            ("filter", "recent".to_string()),
            ("num_per_page", opts.num_players.to_string()),
        ];
        let env: ReviewsEnvelope = self
            .get(
                &self.store_base,
                &format!("appreviews/{app_id}"),
                &query,
                &format!("reviewers for app {app_id}"),
            )
            .await?;
        let reviewers: Vec<String> = env
            .reviews
            .into_iter()
            .filter_map(|r| r.author.steamid)
            .collect();

        // Per-reviewer failures (private profiles, rate hiccups) skip that
        // reviewer; the aggregate is built from whoever resolved.
        let mut counts: HashMap<(String, u32), u64> = HashMap::new();
        for steamid in &reviewers {
            let res: Result<RecentEnvelope, _> = self
                .get(
                    &self.api_base,
                    "IPlayerService/GetRecentlyPlayedGames/v1/",
                    &[("key", key.to_string()), ("steamid", steamid.clone())],
                    &format!("recent games of {steamid}"),
                )
                .await;
            match res {
                Ok(env) => {
                    for g in env.response.games {
                        *counts.entry((g.name, g.appid)).or_insert(0) += 1;
                    }
                }
                Err(e) => tracing::warn!(steamid = %steamid, error = %e, "reviewer lookup skipped"),
            }
        }

        let mut out: Vec<RecentGame> = counts
            .into_iter()
            .map(|((name, app_id), player_count)| RecentGame {
                name,
                app_id,
                player_count,
            })
            .collect();
        out.sort_by(|a, b| {
            b.player_count
                .cmp(&a.player_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(out)
    }
}

#[async_trait]
impl LudioConnector for SteamConnector {
    fn name(&self) -> &'static str {
        PROVIDER
    }
    fn vendor(&self) -> &'static str {
        "Steam"
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
}
