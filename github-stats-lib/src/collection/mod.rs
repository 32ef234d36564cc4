//! Running the collectors for one account
//!
//! [`run_collection`] walks the metric registry, runs each collector's full lifecycle
//! and gathers the outcomes into an [`AggregateReport`]. Collectors run concurrently by
//! default and sequentially on request. In both modes a failing collector is logged,
//! recorded as a [`CollectorFailure`] and left out of the results; it never disturbs
//! the others.
//!
//! [`check_rate_limit`] is the pre-flight quota check. It only informs, it never stops a
//! run: the snapshot can go stale the moment collectors start issuing requests.

mod collection_tracker;
mod orchestrator;
mod progress;
mod rate_limit_guard;

pub use collection_tracker::CollectionTracker;
pub use orchestrator::{AggregateReport, CollectionOptions, CollectorFailure, MetricEntry, run_collection};
pub use progress::Progress;
pub use rate_limit_guard::{DEFAULT_LOW_RATE_LIMIT_THRESHOLD, RateLimitCheck, check_rate_limit};
