//! ludio-types
//!
//! Foundational types shared across the ludio workspace: the unified error
//! type, capability labels, provider keys, engine configuration, credential
//! structs, and per-operation option bags with their documented defaults.
#![warn(missing_docs)]

/// Capability labels for routing, errors, and telemetry.
pub mod capability;
/// Engine configuration and provider credentials.
pub mod config;
/// Unified error type and error-kind classification.
pub mod error;
/// Typed provider keys for priority configuration.
pub mod key;
/// Per-operation option bags with documented defaults.
pub mod options;

pub use capability::Capability;
pub use config::{LudioConfig, SteamCredentials, TwitchCredentials, WowCredentials};
pub use error::{ErrorKind, LudioError};
pub use key::ProviderKey;
pub use options::{RecentOptions, ReviewOptions, RosterOptions, StreamOptions};
