use std::collections::HashMap;
use std::sync::Arc;

use ludio_core::{Capability, LudioConfig, LudioConnector, LudioError, ProviderKey};

/// Orchestrator that routes requests across registered providers.
pub struct Ludio {
    pub(crate) connectors: Vec<Arc<dyn LudioConnector>>,
    pub(crate) cfg: LudioConfig,
}

impl std::fmt::Debug for Ludio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ludio")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Ludio` orchestrator with custom configuration.
pub struct LudioBuilder {
    connectors: Vec<Arc<dyn LudioConnector>>,
    cfg: LudioConfig,
}

impl Default for LudioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LudioBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: no priority overrides, 10s per-provider
    ///   timeout, strictly sequential batches (`batch_concurrency = 1`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: LudioConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the fallback ordering when no explicit
    ///   priority is set via [`prefer`](Self::prefer).
    /// - Multiple connectors can support the same capability; the
    ///   orchestrator routes to the first eligible one and falls back on
    ///   failure.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn LudioConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred provider ordering using connector instances.
    ///
    /// Listed connectors are tried first, in the given order; unlisted but
    /// registered connectors keep their registration order after them.
    /// Type-safe: taking instances instead of strings eliminates typos.
    #[must_use]
    pub fn prefer(mut self, connectors_desc: &[Arc<dyn LudioConnector>]) -> Self {
        self.cfg.priority = connectors_desc.iter().map(|c| c.key()).collect();
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied to every individual provider call, including each page of a
    /// paginated operation. Exceeding it surfaces as an upstream error for
    /// that call and triggers fallback where one exists.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the number of batch items fetched concurrently.
    ///
    /// Behavior and trade-offs:
    /// - `1` (the default) keeps batches strictly sequential, matching the
    ///   most economical request pattern.
    /// - Higher values fan out item fetches while the aggregator still
    ///   emits results in input order.
    /// - Zero is treated as `1`.
    #[must_use]
    pub const fn batch_concurrency(mut self, n: usize) -> Self {
        self.cfg.batch_concurrency = n;
        self
    }

    /// Build the `Ludio` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidInput` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Ludio, LudioError> {
        // Validate priority keys against registered connectors; drop unknowns and dedup.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();

        let mut seen: std::collections::HashSet<&'static str> = std::collections::HashSet::new();
        self.cfg
            .priority
            .retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));

        if self.connectors.is_empty() {
            return Err(LudioError::invalid_input(
                "no connectors registered; add at least one via with_connector(...)",
            ));
        }

        Ok(Ludio {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Ludio {
    /// Start building a new `Ludio` instance.
    ///
    /// Typical usage chains provider registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let twitch = Arc::new(TwitchBuilder::new(creds).build()?);
    /// let steam = Arc::new(SteamBuilder::new(SteamCredentials::anonymous()).build()?);
    ///
    /// let ludio = ludio::Ludio::builder()
    ///     .with_connector(twitch.clone())
    ///     .with_connector(steam.clone())
    ///     .prefer(&[twitch, steam])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> LudioBuilder {
        LudioBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, LudioError>
    where
        Fut: std::future::Future<Output = Result<T, LudioError>>,
    {
        match tokio::time::timeout(timeout, fut).await {
            Ok(res) => res,
            Err(_) => Err(LudioError::upstream(
                connector_name,
                format!("{capability} timed out after {}ms", timeout.as_millis()),
            )),
        }
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn LudioConnector>> {
        let mut out: Vec<(usize, Arc<dyn LudioConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if !self.cfg.priority.is_empty() {
            let pos: HashMap<&'static str, usize> = self
                .cfg
                .priority
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Canonical keys of the registered connectors, in priority order.
    #[must_use]
    pub fn provider_keys(&self) -> Vec<ProviderKey> {
        self.ordered().iter().map(|c| c.key()).collect()
    }

    /// Run the credential lifecycle of every eligible connector before a
    /// batch starts, so a dead credential aborts the batch instead of
    /// failing every item.
    ///
    /// Fatal (`Auth`/`Config`) failures propagate; other failures are
    /// logged and the connector is left to fail per-call.
    pub(crate) async fn ensure_ready_where<P>(
        &self,
        eligible: P,
        capability: Capability,
    ) -> Result<(), LudioError>
    where
        P: Fn(&dyn LudioConnector) -> bool,
    {
        let mut any = false;
        for c in self.ordered() {
            if !eligible(c.as_ref()) {
                continue;
            }
            any = true;
            if let Err(e) = c.ensure_ready().await {
                if e.is_fatal() {
                    return Err(e);
                }
                tracing::warn!(
                    connector = c.name(),
                    error = %e,
                    "ensure_ready failed; provider will be retried per call"
                );
            }
        }
        if !any {
            return Err(LudioError::unsupported(capability.as_str()));
        }
        Ok(())
    }

    /// Generic single-item fetch helper.
    ///
    /// - Tries providers in priority order, applying the per-provider timeout
    /// - `NotFound` from every attempted provider collapses into one
    ///   `NotFound` carrying `not_found_label`
    /// - Otherwise aggregates failures into `AllProvidersFailed`
    /// - If no provider supports the capability, returns `Unsupported`
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_label: String,
        call: F,
    ) -> Result<T, LudioError>
    where
        T: Send,
        F: Fn(Arc<dyn LudioConnector>) -> Option<Fut>,
        Fut: std::future::Future<Output = Result<T, LudioError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<LudioError> = Vec::new();

        for c in self.ordered() {
            let name = c.name();
            if let Some(fut) = call(c) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    name,
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e) => errors.push(e),
                }
            }
        }

        if !attempted_any {
            return Err(LudioError::unsupported(capability.as_str()));
        }

        if errors
            .iter()
            .all(|e| matches!(e, LudioError::NotFound { .. }))
        {
            return Err(LudioError::not_found(not_found_label));
        }

        if errors.len() == 1 {
            return Err(errors.remove(0));
        }
        Err(LudioError::AllProvidersFailed(errors))
    }
}
