use ludio_core::{
    AppDetails, BatchResult, Capability, LudioError, RecentGame, RecentOptions, Review,
    ReviewOptions,
};

use crate::Ludio;
use crate::aggregate;

fn parse_app_id(input: &str) -> Result<u32, LudioError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| LudioError::invalid_input(format!("app id '{input}' is not a number")))
}

impl Ludio {
    /// Fetch store-page composites for multiple apps, one batch entry per
    /// app id.
    ///
    /// Behavior and trade-offs:
    /// - Inputs are strings straight off a transport layer; a non-numeric
    ///   id yields a `Failed` entry with an `InvalidInput` marker instead
    ///   of rejecting the whole batch.
    /// - An app the storefront does not know yields `Missing`.
    /// - Live player and review figures inside each composite are
    ///   best-effort and downgrade to defaults when their sub-fetches fail.
    ///
    /// # Errors
    /// Returns an error when no provider serves store details or when an
    /// item hits a fatal (`Auth`/`Config`) error mid-batch.
    pub async fn app_details(
        &self,
        app_ids: &[&str],
        opts: &ReviewOptions,
    ) -> Result<BatchResult<AppDetails>, LudioError> {
        if app_ids.is_empty() {
            return Ok(vec![]);
        }
        self.ensure_ready_where(|c| c.as_app_details_provider().is_some(), Capability::AppDetails)
            .await?;

        aggregate::run_batch(app_ids, self.cfg.batch_concurrency, |input| async move {
            let app_id = parse_app_id(input)?;
            self.fetch_single(Capability::AppDetails, format!("app {app_id}"), |c| {
                c.as_app_details_provider()?;
                let opts = opts.clone();
                Some(async move {
                    match c.as_app_details_provider() {
                        Some(p) => p.app_details(app_id, &opts).await,
                        None => Err(LudioError::unsupported(Capability::AppDetails.as_str())),
                    }
                })
            })
            .await
        })
        .await
    }

    /// Fetch user reviews for multiple apps, one batch entry per app id.
    ///
    /// Reviews are paginated upstream; each entry accumulates pages until
    /// `opts.max_reviews` or the final page, whichever comes first.
    ///
    /// # Errors
    /// Returns an error when no provider serves reviews or when an item
    /// hits a fatal (`Auth`/`Config`) error mid-batch.
    pub async fn app_reviews(
        &self,
        app_ids: &[&str],
        opts: &ReviewOptions,
    ) -> Result<BatchResult<Vec<Review>>, LudioError> {
        if app_ids.is_empty() {
            return Ok(vec![]);
        }
        self.ensure_ready_where(|c| c.as_reviews_provider().is_some(), Capability::Reviews)
            .await?;

        aggregate::run_batch(app_ids, self.cfg.batch_concurrency, |input| async move {
            let app_id = parse_app_id(input)?;
            self.fetch_single(Capability::Reviews, format!("app {app_id}"), |c| {
                c.as_reviews_provider()?;
                let opts = opts.clone();
                Some(async move {
                    match c.as_reviews_provider() {
                        Some(p) => p.app_reviews(app_id, &opts).await,
                        None => Err(LudioError::unsupported(Capability::Reviews.as_str())),
                    }
                })
            })
            .await
        })
        .await
    }

    /// Derive what each app's recent reviewers are playing now, one batch
    /// entry per app id.
    ///
    /// The provider samples recent reviewers and fans out to their
    /// recently-played lists; individual reviewers who fail or hide their
    /// play history are skipped, so counts are a lower bound.
    ///
    /// # Errors
    /// Returns an error when no provider supports the fan-out, when its
    /// key-gated endpoint is unconfigured (`Config` is fatal), or when an
    /// item hits a fatal error mid-batch.
    pub async fn recent_games(
        &self,
        app_ids: &[&str],
        opts: &RecentOptions,
    ) -> Result<BatchResult<Vec<RecentGame>>, LudioError> {
        if app_ids.is_empty() {
            return Ok(vec![]);
        }
        self.ensure_ready_where(
            |c| c.as_recently_played_provider().is_some(),
            Capability::RecentlyPlayed,
        )
        .await?;

        aggregate::run_batch(app_ids, self.cfg.batch_concurrency, |input| async move {
            let app_id = parse_app_id(input)?;
            let opts = *opts;
            self.fetch_single(Capability::RecentlyPlayed, format!("app {app_id}"), |c| {
                c.as_recently_played_provider()?;
                Some(async move {
                    match c.as_recently_played_provider() {
                        Some(p) => p.recent_games(app_id, &opts).await,
                        None => Err(LudioError::unsupported(Capability::RecentlyPlayed.as_str())),
                    }
                })
            })
            .await
        })
        .await
    }

    /// Fetch the current concurrent player count for one app.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support
    /// the capability.
    pub async fn current_players(&self, app_id: u32) -> Result<u64, LudioError> {
        self.fetch_single(Capability::CurrentPlayers, format!("app {app_id}"), |c| {
            c.as_current_players_provider()?;
            Some(async move {
                match c.as_current_players_provider() {
                    Some(p) => p.current_players(app_id).await,
                    None => Err(LudioError::unsupported(Capability::CurrentPlayers.as_str())),
                }
            })
        })
        .await
    }
}
