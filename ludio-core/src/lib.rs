//! ludio-core
//!
//! Core types, traits, and utilities shared across the ludio ecosystem.
//!
//! - `records`: normalized record types returned by every operation.
//! - `connector`: the `LudioConnector` trait and capability provider traits.
//! - `batch`: the ordered batch-result model and the identifier chunker.
//! - `paging`: the closure-driven paginator with bounded termination.
//! - `auth`: short-lived access tokens and the expiry-tracked token cache.
//! - `http`: shared request/response glue mapping upstream failures onto
//!   the workspace error taxonomy.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the token
//! cache serializes refreshes through `tokio::sync::Mutex`, and all
//! capability traits are `async_trait` methods expected to run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Short-lived access tokens and the token cache.
pub mod auth;
/// Ordered batch results, failure markers, and identifier chunking.
pub mod batch;
/// Connector capability traits and the primary `LudioConnector` interface.
pub mod connector;
/// Shared HTTP glue for provider connectors.
pub mod http;
/// Image URL template resolution.
pub mod image;
/// Cursor/offset pagination driver.
pub mod paging;
/// Normalized record types.
pub mod records;

pub use auth::{AccessToken, TokenCache};
pub use batch::{BatchItem, BatchResult, FailureMarker, Outcome, chunk};
pub use connector::LudioConnector;
pub use image::resolve_dimensions;
pub use paging::{Page, drain_pages};
pub use records::*;

pub use ludio_types::{
    Capability, ErrorKind, LudioConfig, LudioError, ProviderKey, RecentOptions, ReviewOptions,
    RosterOptions, SteamCredentials, StreamOptions, TwitchCredentials, WowCredentials,
};
