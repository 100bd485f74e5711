//! Closure-driven pagination with bounded termination.
//!
//! Providers expose pagination three different ways: an opaque string
//! cursor echoed back as a query parameter, a fixed page size with no
//! cursor, and caller-supplied numeric offset windows. All three are
//! served by the same interface: the item fetcher supplies a "next page"
//! closure that maps the engine's cursor representation onto whatever the
//! wire wants.

use core::future::Future;

use ludio_types::LudioError;

/// One upstream page: its items plus an optional continuation cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items carried by this page.
    pub items: Vec<T>,
    /// Continuation cursor; `None` means the upstream is exhausted.
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// A final page with no continuation.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: None,
        }
    }
}

/// Repeatedly invoke `fetch_page`, following continuation cursors until
/// the upstream is exhausted or `limit` items have been accumulated.
///
/// The first invocation receives `None`; the fetcher maps that onto the
/// provider's start sentinel (`*`, offset 0, or simply no parameter).
/// A cursor identical to the previous one is treated as exhaustion so a
/// misbehaving upstream can never spin the loop forever.
///
/// # Errors
/// Propagates the first page-fetch error; partially accumulated items are
/// discarded.
pub async fn drain_pages<T, F, Fut>(
    mut fetch_page: F,
    limit: Option<usize>,
) -> Result<Vec<T>, LudioError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, LudioError>>,
{
    let mut out: Vec<T> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.clone()).await?;
        let empty_page = page.items.is_empty();

        for item in page.items {
            if limit.is_some_and(|l| out.len() >= l) {
                return Ok(out);
            }
            out.push(item);
        }
        if limit.is_some_and(|l| out.len() >= l) {
            return Ok(out);
        }

        match page.cursor {
            None => return Ok(out),
            Some(next) => {
                // Same cursor twice in a row (or an empty page that still
                // advertises one): treat as exhausted.
                if cursor.as_deref() == Some(next.as_str()) || empty_page {
                    tracing::debug!(cursor = %next, "pagination cursor stalled, stopping");
                    return Ok(out);
                }
                cursor = Some(next);
            }
        }
    }
}
