//! Account metrics
//!
//! Each metric is produced by a [`MetricCollector`] bound to one [`MetricKind`]. The set
//! of kinds is closed and [`MetricKind::ALL`] is the registry the orchestrator walks.
//!
//! # Collector lifecycle
//!
//! A collector is created for one account and runs once:
//!
//! 1. **fetch** pulls raw data through a [`RemoteClient`](crate::client::RemoteClient).
//!    Unreadable sub-units (a single private repository) are skipped. A failed search is
//!    absorbed into an empty sample and remembered as a [`RecoverableError`]. Anything
//!    else fails the collector.
//! 2. **process** turns the raw data into [`MetricStats`] and drops the raw data. It never
//!    fails: without raw data it yields the metric's zero state.
//! 3. **summary** renders a one-line `"<value>, <details>"` string which
//!    [`MetricResult::from_summary`] splits into its two display columns.
//!
//! # Estimates
//!
//! Issue and pull request counts come from the search endpoint, which reports an exact
//! total but only returns a page of items. Open and closed counts are extrapolated from
//! that page; see [`sampling`] for the formula and its bias.

mod account_ref;
mod collector;
mod commits;
mod followers;
mod format;
mod issues;
mod metric_kind;
mod metric_result;
mod metric_value;
mod pull_requests;
mod recoverable;
mod repo_counts;
mod repo_totals;
pub mod sampling;
mod stars;

#[cfg(test)]
pub(crate) mod test_support;

pub use account_ref::AccountRef;
pub use collector::{CollectorLimits, DEFAULT_MAX_COMMITS_PER_REPO, DEFAULT_SAMPLE_SIZE, MetricCollector, MetricStats};
pub use followers::FollowerStats;
pub use format::{format_count, format_ratio, percent};
pub use issues::IssueStats;
pub use metric_kind::MetricKind;
pub use metric_result::MetricResult;
pub use metric_value::{Detail, MetricValue};
pub use pull_requests::PullRequestStats;
pub use recoverable::RecoverableError;
pub use repo_counts::{RepoCount, RepoCountMap};
pub use repo_totals::RepoTotals;
