//! Ordered, partial-failure-tolerant batch driving.
//!
//! Every one-to-one batch operation funnels through [`run_batch`]: the
//! result has exactly one entry per input, in input order, regardless of
//! which items succeeded. Items are fetched with bounded concurrency;
//! `buffered` yields completions in submission order, so no re-sorting is
//! needed afterwards.

use std::future::Future;

use futures::StreamExt;
use ludio_core::{BatchItem, BatchResult, FailureMarker, LudioError, Outcome};

/// Drive one fetch per input and fold the results into an ordered
/// [`BatchResult`].
///
/// - `Ok(v)` becomes `Outcome::Hit(v)`
/// - `NotFound` becomes `Outcome::Missing`
/// - other errors become `Outcome::Failed` and the batch continues
/// - fatal errors (`Auth`/`Config`) abort the whole batch
pub(crate) async fn run_batch<'a, T, F, Fut>(
    inputs: &'a [&'a str],
    concurrency: usize,
    fetch: F,
) -> Result<BatchResult<T>, LudioError>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<T, LudioError>>,
{
    let completed: Vec<(&str, Result<T, LudioError>)> = futures::stream::iter(inputs.iter().copied())
        .map(|input| {
            let fut = fetch(input);
            async move { (input, fut.await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut out = Vec::with_capacity(completed.len());
    for (input, res) in completed {
        let outcome = match res {
            Ok(v) => Outcome::Hit(v),
            Err(LudioError::NotFound { .. }) => Outcome::Missing,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!(input, error = %e, "batch item failed; continuing");
                Outcome::Failed(FailureMarker::from_error(&e))
            }
        };
        out.push(BatchItem {
            input: input.to_owned(),
            outcome,
        });
    }
    Ok(out)
}
