//! Population estimates from a bounded sample.
//!
//! The search endpoint reports the true size `T` of a population (all issues or pull
//! requests by an account) but only hands back the head of the result list. We look at
//! the first `S` items, count the closed ones `C`, and scale:
//!
//! ```text
//! closed = round(T * C / S), clamped to T
//! open   = T - closed
//! ```
//!
//! The sample is the head of the default result ordering, not a random draw, so the
//! estimate is biased toward whatever that ordering favors (typically recent activity).
//! When `S == T` the estimate is exact.

use crate::client::{ApiError, ItemState, RemoteClient, SearchItem, SearchQuery, SearchResults};
use crate::metrics::RecoverableError;

const LOG_TARGET: &str = "  sampling";

/// Raw search data: the reported population size plus the sampled head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSample {
    pub total_count: u64,
    pub items: Vec<SearchItem>,
}

impl From<SearchResults> for RawSample {
    fn from(results: SearchResults) -> Self {
        Self {
            total_count: results.total_count,
            items: results.items,
        }
    }
}

/// State counts observed in a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleCounts {
    pub size: u64,
    pub open: u64,
    pub closed: u64,
    pub merged: u64,
}

impl SampleCounts {
    #[must_use]
    pub fn tally(items: &[SearchItem]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            counts.size += 1;
            match item.state {
                ItemState::Open => counts.open += 1,
                ItemState::Closed => counts.closed += 1,
            }
            if item.is_merged() {
                counts.merged += 1;
            }
            counts
        })
    }
}

/// Estimated split of a population into open and closed.
///
/// For a non-empty sample `open + closed == total`. An empty sample yields zero for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimate {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
}

/// Scale the sampled closed ratio up to a population of `total`.
#[must_use]
pub fn estimate(total: u64, sample: &SampleCounts) -> Estimate {
    if sample.size == 0 || total == 0 {
        return Estimate {
            total,
            open: 0,
            closed: 0,
        };
    }

    // round-half-up of total * closed / size, in integers
    let numerator = 2 * u128::from(total) * u128::from(sample.closed) + u128::from(sample.size);
    let scaled = numerator / (2 * u128::from(sample.size));
    let closed = u64::try_from(scaled).unwrap_or(u64::MAX).min(total);

    Estimate {
        total,
        open: total - closed,
        closed,
    }
}

/// Fetch at most `limit` items for `query`.
///
/// Any failure of the search endpoint is handed back as a [`RecoverableError`] so the
/// caller can fall back to an empty sample.
pub async fn fetch_sample<C: RemoteClient>(client: &C, query: &SearchQuery<'_>, limit: usize) -> Result<RawSample, RecoverableError> {
    log::debug!(target: LOG_TARGET, "Sampling up to {limit} items for '{query}'");

    match client.search_issues(query, limit).await {
        Ok(results) => {
            log::debug!(target: LOG_TARGET, "Search '{query}' reports {} items, sampled {}", results.total_count, results.items.len());
            Ok(results.into())
        }
        Err(source) => Err(unavailable(query, source)),
    }
}

fn unavailable(query: &SearchQuery<'_>, source: ApiError) -> RecoverableError {
    RecoverableError::SearchUnavailable {
        query: query.to_string(),
        source,
    }
}
