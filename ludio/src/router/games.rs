use ludio_core::{BatchResult, Capability, GameHit, GameSnapshot, LudioError, TopGame};

use crate::Ludio;
use crate::aggregate;

impl Ludio {
    /// Look up games by exact name, one batch entry per input name.
    ///
    /// Behavior and trade-offs:
    /// - The result has exactly one entry per name, in input order.
    /// - A name the catalog does not know yields `Missing`, never a silent
    ///   omission; a provider failure yields `Failed` and the batch
    ///   continues.
    /// - Provider credentials are checked once up front, so a dead secret
    ///   aborts before any item fetch.
    ///
    /// # Errors
    /// Returns an error when no provider supports game search, when the
    /// up-front credential check fails fatally, or when an item hits a
    /// fatal (`Auth`/`Config`) error mid-batch.
    pub async fn search_games(
        &self,
        names: &[&str],
    ) -> Result<BatchResult<Vec<GameHit>>, LudioError> {
        if names.is_empty() {
            return Ok(vec![]);
        }
        self.ensure_ready_where(|c| c.as_game_search_provider().is_some(), Capability::GameSearch)
            .await?;

        aggregate::run_batch(names, self.cfg.batch_concurrency, |name| async move {
            let hits = self
                .fetch_single(Capability::GameSearch, format!("game '{name}'"), |c| {
                    c.as_game_search_provider()?;
                    let name = name.to_owned();
                    Some(async move {
                        match c.as_game_search_provider() {
                            Some(p) => p.search_game(&name).await,
                            None => Err(LudioError::unsupported(Capability::GameSearch.as_str())),
                        }
                    })
                })
                .await?;
            // Zero upstream matches is a missing entity, not an empty hit.
            if hits.is_empty() {
                return Err(LudioError::not_found(format!("game '{name}'")));
            }
            Ok(hits)
        })
        .await
    }

    /// Resolve a game name and sample its current broadcast activity.
    ///
    /// # Errors
    /// Returns `NotFound` when no game matches the name, or an error when
    /// no eligible provider succeeds or none support the capability.
    pub async fn game_snapshot(&self, name: &str) -> Result<GameSnapshot, LudioError> {
        self.fetch_single(Capability::GameSnapshot, format!("game '{name}'"), |c| {
            c.as_game_snapshot_provider()?;
            let name = name.to_owned();
            Some(async move {
                match c.as_game_snapshot_provider() {
                    Some(p) => p.game_snapshot(&name).await,
                    None => Err(LudioError::unsupported(Capability::GameSnapshot.as_str())),
                }
            })
        })
        .await
    }

    /// Fetch the `limit` most-watched games, enriched with live viewer
    /// figures per game.
    ///
    /// The per-game viewer aggregation is performed by the provider; a game
    /// whose secondary aggregation fails reports zero viewers and streams
    /// rather than dropping out of the ranking.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support
    /// the capability.
    pub async fn top_games(&self, limit: usize) -> Result<Vec<TopGame>, LudioError> {
        self.fetch_single(Capability::TopGames, "top games".to_owned(), |c| {
            c.as_top_games_provider()?;
            Some(async move {
                match c.as_top_games_provider() {
                    Some(p) => p.top_games(limit).await,
                    None => Err(LudioError::unsupported(Capability::TopGames.as_str())),
                }
            })
        })
        .await
    }
}
