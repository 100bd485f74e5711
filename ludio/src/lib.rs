//! Ludio orchestrates requests across multiple game-platform data providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `ludio_core` contracts.
//! - Applies a configurable provider priority to influence fallback order.
//! - Drives batch operations with bounded concurrency while preserving
//!   input order, recording per-item outcomes instead of failing whole
//!   batches.
//! - Normalizes error handling and exposes uniform record types from
//!   `ludio_core`.
//!
//! Key behaviors and trade-offs
//! - Batch operations are one-to-one: the result has exactly one entry per
//!   input, in input order. An entity the upstream does not know is a typed
//!   `Missing` outcome; a provider failure is a typed `Failed` outcome and
//!   the batch continues. Only fatal credential or configuration errors
//!   abort a batch.
//! - Bulk channel resolution chunks logins to the provider's per-request
//!   cap; a failed chunk yields one failure marker per affected login.
//! - Each provider call is bounded by the configured per-provider timeout;
//!   a timeout surfaces as an upstream error and triggers fallback where
//!   another provider offers the capability.
//! - `batch_concurrency = 1` (the default) keeps batches strictly
//!   sequential; higher values fan out item fetches without reordering
//!   results.
//!
//! Examples
//! Building an orchestrator and fetching a game batch:
//! ```rust,ignore
//! use std::sync::Arc;
//! use ludio::Ludio;
//!
//! let twitch = Arc::new(TwitchBuilder::new(twitch_creds).build()?);
//! let steam = Arc::new(SteamBuilder::new(steam_creds).build()?);
//!
//! let ludio = Ludio::builder()
//!     .with_connector(twitch.clone())
//!     .with_connector(steam)
//!     .prefer(&[twitch])
//!     .batch_concurrency(4)
//!     .build()?;
//!
//! let games = ludio.search_games(&["Dota 2", "Elden Ring"]).await?;
//! for item in &games {
//!     println!("{}: {:?}", item.input, item.outcome);
//! }
//! ```
//!
//! Resolving channels in bulk (chunked to the upstream cap):
//! ```rust,ignore
//! let (profiles, failures) = ludio.channels(&["gaules", "alanzoka"]).await?;
//! ```
#![warn(missing_docs)]

mod aggregate;
pub(crate) mod core;
mod router;

pub use crate::core::{Ludio, LudioBuilder};

// Re-export core types for convenience
pub use ludio_core::{
    // Records
    AppDetails,
    // Batch model
    BatchItem,
    BatchResult,
    Capability,
    Channel,
    CharacterProfile,
    CharacterStatistics,
    EquippedItem,
    ErrorKind,
    FailureMarker,
    GameHit,
    GameSnapshot,
    GuildMember,
    GuildMemberProfile,
    LiveStream,
    // Foundational types
    LudioConfig,
    LudioConnector,
    LudioError,
    Outcome,
    ProviderKey,
    RecentGame,
    // Options
    RecentOptions,
    Review,
    ReviewOptions,
    RosterOptions,
    RosterReport,
    SteamCredentials,
    StreamOptions,
    StreamSummary,
    StreamerRank,
    TopGame,
    TwitchCredentials,
    WowCredentials,
};
