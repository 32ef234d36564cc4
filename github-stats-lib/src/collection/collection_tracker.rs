//! Per-collector status tracking for progress reporting.

use super::Progress;
use crate::metrics::MetricKind;
use core::sync::atomic::{AtomicU8, Ordering};
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Where a collector is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum CollectorStatus {
    Waiting = 0,
    Running = 1,
    Done = 2,
    Failed = 3,
}

impl CollectorStatus {
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Running,
            2 => Self::Done,
            3 => Self::Failed,
            _ => Self::Waiting,
        }
    }
}

type Statuses = [AtomicU8; MetricKind::ALL.len()];

/// Tracks which collectors are running and feeds the progress indicator.
#[derive(Clone)]
pub struct CollectionTracker {
    statuses: Arc<Statuses>,
}

impl core::fmt::Debug for CollectionTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CollectionTracker").field("statuses", &self.statuses).finish()
    }
}

impl CollectionTracker {
    #[must_use]
    pub fn new(progress: &dyn Progress) -> Self {
        let statuses: Arc<Statuses> = Arc::default();

        let statuses_clone = Arc::clone(&statuses);
        let use_colors = progress.use_colors();
        progress.set_determinate(Box::new(move || Self::progress_reporter_callback(&statuses_clone, use_colors)));

        Self { statuses }
    }

    pub fn start(&self, kind: MetricKind) {
        self.set(kind, CollectorStatus::Running);
    }

    pub fn finish(&self, kind: MetricKind, succeeded: bool) {
        self.set(kind, if succeeded { CollectorStatus::Done } else { CollectorStatus::Failed });
    }

    fn set(&self, kind: MetricKind, status: CollectorStatus) {
        self.statuses[kind.index()].store(status as u8, Ordering::Relaxed);
    }

    /// Returns (`collector_count`, `finished_count`, `message_string`).
    fn progress_reporter_callback(statuses: &Statuses, use_colors: bool) -> (u64, u64, String) {
        let mut finished = 0u64;
        let mut running = Vec::new();

        for kind in MetricKind::ALL {
            match CollectorStatus::from_u8(statuses[kind.index()].load(Ordering::Relaxed)) {
                CollectorStatus::Running => running.push(kind.to_string()),
                CollectorStatus::Done | CollectorStatus::Failed => finished += 1,
                CollectorStatus::Waiting => {}
            }
        }

        let message = if running.is_empty() {
            "Waiting".to_string()
        } else if use_colors {
            format!("{}", running.join(", ").cyan())
        } else {
            running.join(", ")
        };

        (MetricKind::ALL.len() as u64, finished, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoOpProgress;

    impl Progress for NoOpProgress {
        fn set_phase(&self, _phase: &str) {}
        fn set_determinate(&self, _callback: Box<dyn Fn() -> (u64, u64, String) + Send + Sync + 'static>) {}
        fn set_indeterminate(&self, _callback: Box<dyn Fn() -> String + Send + Sync + 'static>) {}
        fn println(&self, _msg: &str) {}
        fn done(&self) {}
        fn use_colors(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_initial_state() {
        let tracker = CollectionTracker::new(&NoOpProgress);
        let (total, finished, message) = CollectionTracker::progress_reporter_callback(&tracker.statuses, false);

        assert_eq!(total, 5);
        assert_eq!(finished, 0);
        assert_eq!(message, "Waiting");
    }

    #[test]
    fn test_running_collectors_listed_in_registry_order() {
        let tracker = CollectionTracker::new(&NoOpProgress);
        tracker.start(MetricKind::Issues);
        tracker.start(MetricKind::Commits);

        let (_, finished, message) = CollectionTracker::progress_reporter_callback(&tracker.statuses, false);
        assert_eq!(finished, 0);
        assert_eq!(message, "Commits, Issues");
    }

    #[test]
    fn test_failed_and_done_both_count_as_finished() {
        let tracker = CollectionTracker::new(&NoOpProgress);
        tracker.start(MetricKind::Stars);
        tracker.finish(MetricKind::Stars, true);
        tracker.start(MetricKind::Followers);
        tracker.finish(MetricKind::Followers, false);
        tracker.start(MetricKind::PullRequests);

        let (_, finished, message) = CollectionTracker::progress_reporter_callback(&tracker.statuses, false);
        assert_eq!(finished, 2);
        assert_eq!(message, "Pull Requests");
    }
}
