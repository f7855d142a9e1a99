//! Shared utilities for use cases.
//!
//! Contains the ordered-fallback probe used for lint configuration lookup
//! and filesystem root resolution.

use std::future::Future;

/// Probes `candidates` one at a time and returns the first hit.
///
/// Each probe is awaited before the next one starts, so earlier candidates
/// always win and nothing after the first hit is touched.
pub(crate) async fn first_some<I, F, Fut, T>(candidates: I, mut probe: F) -> Option<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for candidate in candidates {
        if let Some(found) = probe(candidate).await {
            return Some(found);
        }
    }
    None
}
