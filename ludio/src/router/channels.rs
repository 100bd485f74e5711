use ludio_core::{Capability, Channel, FailureMarker, LudioError, chunk};

use crate::Ludio;

impl Ludio {
    /// Resolve channel profiles for a list of logins, chunking requests to
    /// the provider's per-request cap.
    ///
    /// Behavior and trade-offs:
    /// - Logins are split into ordered chunks of at most the provider's
    ///   `max_batch` (100 for the live-streaming platform) and fetched
    ///   chunk by chunk.
    /// - A failed chunk yields one failure marker per login in that chunk
    ///   and the remaining chunks still run; the caller gets every profile
    ///   the upstream could serve.
    /// - Logins unknown upstream are simply absent from the profiles, per
    ///   the upstream contract; they produce no marker.
    ///
    /// # Errors
    /// Returns an error when no provider supports bulk channel resolution,
    /// when the up-front credential check fails fatally, or when a chunk
    /// hits a fatal (`Auth`/`Config`) error.
    pub async fn channels(
        &self,
        logins: &[&str],
    ) -> Result<(Vec<Channel>, Vec<FailureMarker>), LudioError> {
        if logins.is_empty() {
            return Ok((vec![], vec![]));
        }
        self.ensure_ready_where(
            |c| c.as_channels_bulk_provider().is_some(),
            Capability::ChannelsBulk,
        )
        .await?;

        let max_batch = self
            .ordered()
            .iter()
            .find_map(|c| c.as_channels_bulk_provider().map(|p| p.max_batch()))
            .unwrap_or(100);

        let owned: Vec<String> = logins.iter().map(ToString::to_string).collect();
        let mut profiles: Vec<Channel> = Vec::new();
        let mut failures: Vec<FailureMarker> = Vec::new();

        for piece in chunk(&owned, max_batch) {
            let label = format!("channels ({} logins)", piece.len());
            let res = self
                .fetch_single(Capability::ChannelsBulk, label, |c| {
                    c.as_channels_bulk_provider()?;
                    let logins = piece.clone();
                    Some(async move {
                        match c.as_channels_bulk_provider() {
                            Some(p) => p.channels_chunk(&logins).await,
                            None => Err(LudioError::unsupported(Capability::ChannelsBulk.as_str())),
                        }
                    })
                })
                .await;

            match res {
                Ok(mut batch) => profiles.append(&mut batch),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        chunk_len = piece.len(),
                        error = %e,
                        "channel chunk failed; continuing with remaining chunks"
                    );
                    let marker = FailureMarker::from_error(&e);
                    failures.extend(piece.iter().map(|_| marker.clone()));
                }
            }
        }

        Ok((profiles, failures))
    }
}
