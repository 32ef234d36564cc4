use super::{CollectionTracker, Progress};
use crate::client::RemoteClient;
use crate::metrics::{AccountRef, CollectorLimits, Detail, MetricCollector, MetricKind, MetricResult, MetricStats, RecoverableError};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use ohno::AppError;

const LOG_TARGET: &str = "orchestrator";

/// How a collection run is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionOptions {
    pub limits: CollectorLimits,

    /// Run the collectors side by side rather than one after another.
    pub concurrent: bool,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            limits: CollectorLimits::default(),
            concurrent: true,
        }
    }
}

/// Result of one collector that completed.
#[derive(Debug)]
pub struct MetricEntry {
    pub kind: MetricKind,
    pub result: MetricResult,
    pub stats: MetricStats,

    /// Set when the value is a zero state substituted for unavailable data.
    pub recovered: Option<RecoverableError>,
}

impl MetricEntry {
    #[must_use]
    pub fn details(&self) -> Vec<Detail> {
        self.stats.detailed()
    }
}

/// A collector that failed, with the reason.
#[derive(Debug)]
pub struct CollectorFailure {
    pub kind: MetricKind,
    pub error: AppError,
}

/// Everything a collection run produced.
///
/// Entries are in registry order. A report with no entries is still a valid outcome of a run.
#[derive(Debug)]
pub struct AggregateReport {
    account: AccountRef,
    collected_at: DateTime<Utc>,
    entries: Vec<MetricEntry>,
    failures: Vec<CollectorFailure>,
}

impl AggregateReport {
    #[must_use]
    pub const fn account(&self) -> &AccountRef {
        &self.account
    }

    #[must_use]
    pub const fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }

    #[must_use]
    pub fn entries(&self) -> &[MetricEntry] {
        &self.entries
    }

    #[must_use]
    pub fn failures(&self) -> &[CollectorFailure] {
        &self.failures
    }

    #[must_use]
    pub fn get(&self, kind: MetricKind) -> Option<&MetricEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A report for a run in which every collector failed.
    #[cfg(test)]
    pub(crate) fn failed(account: AccountRef, failures: Vec<CollectorFailure>) -> Self {
        Self {
            account,
            collected_at: Utc::now(),
            entries: Vec::new(),
            failures,
        }
    }
}

/// Run every registered collector for `account` and gather what succeeded.
///
/// A collector's failure is logged and recorded in the report; it never affects the
/// other collectors. Panics are not caught: a panicking collector takes the run down.
pub async fn run_collection<C: RemoteClient>(
    client: &C,
    account: &AccountRef,
    options: &CollectionOptions,
    progress: &dyn Progress,
) -> AggregateReport {
    progress.set_phase("Collecting");
    let tracker = CollectionTracker::new(progress);

    log::info!(
        target: LOG_TARGET,
        "Collecting {} metrics for '{account}' ({})",
        MetricKind::ALL.len(),
        if options.concurrent { "concurrently" } else { "sequentially" }
    );

    let tracker = &tracker;
    let collect_one = move |kind: MetricKind| async move {
        tracker.start(kind);
        let mut collector = MetricCollector::new(kind, client, account, options.limits);
        let outcome = collector.collect().await;
        tracker.finish(kind, outcome.is_ok());
        (collector, outcome)
    };

    let outcomes = if options.concurrent {
        join_all(MetricKind::ALL.into_iter().map(collect_one)).await
    } else {
        let mut outcomes = Vec::with_capacity(MetricKind::ALL.len());
        for kind in MetricKind::ALL {
            outcomes.push(collect_one(kind).await);
        }
        outcomes
    };

    let mut entries = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for (collector, outcome) in outcomes {
        let kind = collector.kind();
        match outcome {
            Ok(()) => {
                let result = collector.result();
                let (stats, recovered) = collector.into_parts();
                entries.push(MetricEntry {
                    kind,
                    result,
                    stats,
                    recovered,
                });
            }
            Err(error) => {
                log::warn!(target: LOG_TARGET, "Could not collect {kind} for '{account}': {error:#}");
                failures.push(CollectorFailure { kind, error });
            }
        }
    }

    log::info!(target: LOG_TARGET, "Collected {} of {} metrics for '{account}'", entries.len(), MetricKind::ALL.len());

    AggregateReport {
        account: account.clone(),
        collected_at: Utc::now(),
        entries,
        failures,
    }
}
