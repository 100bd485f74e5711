use ludio_core::{BatchResult, Capability, LiveStream, LudioError, StreamOptions, StreamSummary};

use crate::Ludio;
use crate::aggregate;

impl Ludio {
    /// List live broadcasts for multiple games, one batch entry per game id.
    ///
    /// Behavior and trade-offs:
    /// - The result has exactly one entry per game id, in input order.
    /// - A game with no live broadcasts is a `Hit` with an empty list; only
    ///   an unknown game id would be `Missing`.
    /// - Language filtering and the per-game cap come from `opts`.
    ///
    /// # Errors
    /// Returns an error when no provider supports live-stream listings,
    /// when the up-front credential check fails fatally, or when an item
    /// hits a fatal (`Auth`/`Config`) error mid-batch.
    pub async fn live_streams(
        &self,
        game_ids: &[&str],
        opts: &StreamOptions,
    ) -> Result<BatchResult<Vec<LiveStream>>, LudioError> {
        if game_ids.is_empty() {
            return Ok(vec![]);
        }
        self.ensure_ready_where(|c| c.as_live_streams_provider().is_some(), Capability::LiveStreams)
            .await?;

        aggregate::run_batch(game_ids, self.cfg.batch_concurrency, |game_id| async move {
            self.fetch_single(Capability::LiveStreams, format!("game '{game_id}'"), |c| {
                c.as_live_streams_provider()?;
                let game_id = game_id.to_owned();
                let opts = opts.clone();
                Some(async move {
                    match c.as_live_streams_provider() {
                        Some(p) => p.live_streams(&game_id, &opts).await,
                        None => Err(LudioError::unsupported(Capability::LiveStreams.as_str())),
                    }
                })
            })
            .await
        })
        .await
    }

    /// Summarize every live broadcast of one game.
    ///
    /// The provider walks all pages, so latency grows with how many
    /// channels are live; totals, the per-language histogram, and the
    /// top-ten streamer ranking cover the full set.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support
    /// the capability.
    pub async fn stream_summary(&self, game_id: &str) -> Result<StreamSummary, LudioError> {
        self.fetch_single(Capability::StreamSummary, format!("game '{game_id}'"), |c| {
            c.as_stream_summary_provider()?;
            let game_id = game_id.to_owned();
            Some(async move {
                match c.as_stream_summary_provider() {
                    Some(p) => p.stream_summary(&game_id).await,
                    None => Err(LudioError::unsupported(Capability::StreamSummary.as_str())),
                }
            })
        })
        .await
    }
}
