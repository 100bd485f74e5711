//! Ordered batch results, per-item failure markers, and identifier chunking.

use ludio_types::{ErrorKind, LudioError};
use serde::{Deserialize, Serialize};

/// Typed per-item failure, co-resident with successful records in one
/// ordered result collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMarker {
    /// Coarse error classification.
    pub kind: ErrorKind,
    /// Human-readable failure description.
    pub message: String,
}

impl FailureMarker {
    /// Build a marker from an engine error.
    #[must_use]
    pub fn from_error(err: &LudioError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Terminal outcome for one batch input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The lookup succeeded.
    Hit(T),
    /// The upstream legitimately has no matching entity. Distinct from a
    /// failure so one-to-one operations never silently omit a row.
    Missing,
    /// The lookup failed; the batch continued past it.
    Failed(FailureMarker),
}

impl<T> Outcome<T> {
    /// Returns the successful record, if any.
    pub const fn hit(&self) -> Option<&T> {
        match self {
            Self::Hit(v) => Some(v),
            _ => None,
        }
    }

    /// True when the outcome is a successful record.
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// One input identifier paired with its terminal outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem<T> {
    /// The original input identifier, verbatim.
    pub input: String,
    /// What became of it.
    pub outcome: Outcome<T>,
}

/// Ordered batch result. For one-to-one operations its length equals the
/// input length and its order equals the input order.
pub type BatchResult<T> = Vec<BatchItem<T>>;

/// Split an ordered identifier list into ordered sub-lists of at most
/// `max_size` elements, preserving order across and within chunks.
///
/// # Panics
/// Panics when `max_size` is zero; that is a programming error, not a
/// runtime condition.
#[must_use]
pub fn chunk<T: Clone>(items: &[T], max_size: usize) -> Vec<Vec<T>> {
    assert!(max_size > 0, "chunk size must be positive");
    items.chunks(max_size).map(<[T]>::to_vec).collect()
}
