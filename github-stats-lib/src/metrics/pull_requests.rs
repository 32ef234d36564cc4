//! Pull requests authored by the account.
//!
//! Open and closed counts are estimated from a sample (see [`super::sampling`]). Merge
//! status is not reliably exposed by the search endpoint, so "merged" is approximated
//! as "closed" and always reported as an approximation.

use super::sampling::{Estimate, RawSample, SampleCounts, estimate};
use super::{Detail, MetricValue, percent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullRequestStats {
    pub estimate: Estimate,
    pub sample: SampleCounts,
}

impl PullRequestStats {
    /// Estimated merged count. Approximated by the estimated closed count.
    #[must_use]
    pub const fn merged(&self) -> u64 {
        self.estimate.closed
    }

    /// Share of pull requests that are no longer open, truncated to an integer percentage.
    ///
    /// Computed from the closed estimate so an empty sample reads as 0% rather than 100%.
    #[must_use]
    pub const fn close_rate(&self) -> u64 {
        percent(self.estimate.closed, self.estimate.total)
    }
}

#[must_use]
pub fn process(raw: &RawSample) -> PullRequestStats {
    let sample = SampleCounts::tally(&raw.items);
    PullRequestStats {
        estimate: estimate(raw.total_count, &sample),
        sample,
    }
}

#[must_use]
pub fn summary(stats: &PullRequestStats) -> String {
    if stats.estimate.total == 0 {
        return "0, No PRs".to_string();
    }

    format!("{}, {}% closed", stats.estimate.total, stats.close_rate())
}

#[must_use]
pub fn detailed(stats: &PullRequestStats) -> Vec<Detail> {
    vec![
        Detail::new("pull_requests.total", MetricValue::UInt(stats.estimate.total)),
        Detail::new("pull_requests.open", MetricValue::UInt(stats.estimate.open)),
        Detail::new("pull_requests.closed", MetricValue::UInt(stats.estimate.closed)),
        Detail::new("pull_requests.merged", MetricValue::UInt(stats.merged())),
        Detail::new("pull_requests.merged_is_approximate", MetricValue::Boolean(true)),
        Detail::new("pull_requests.merge_rate", MetricValue::UInt(percent(stats.merged(), stats.estimate.total))),
        Detail::new("pull_requests.sample_size", MetricValue::UInt(stats.sample.size)),
        Detail::new("pull_requests.merged_in_sample", MetricValue::UInt(stats.sample.merged)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ItemState, PullRequestMarker, SearchItem};

    fn pr(state: ItemState) -> SearchItem {
        SearchItem {
            state,
            pull_request: Some(PullRequestMarker::default()),
        }
    }

    #[test]
    fn test_process_estimates_population() {
        let raw = RawSample {
            total_count: 10,
            items: vec![pr(ItemState::Open), pr(ItemState::Closed), pr(ItemState::Closed)],
        };

        let stats = process(&raw);
        assert_eq!(stats.estimate.closed, 7);
        assert_eq!(stats.estimate.open, 3);
        assert_eq!(stats.merged(), 7);
        assert_eq!(stats.close_rate(), 70);
    }

    #[test]
    fn test_summary() {
        let raw = RawSample {
            total_count: 10,
            items: vec![pr(ItemState::Open), pr(ItemState::Closed), pr(ItemState::Closed)],
        };
        assert_eq!(summary(&process(&raw)), "10, 70% closed");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary(&process(&RawSample::default())), "0, No PRs");
    }

    #[test]
    fn test_close_rate_without_sample() {
        let raw = RawSample {
            total_count: 12,
            items: Vec::new(),
        };
        assert_eq!(summary(&process(&raw)), "12, 0% closed");
    }

    #[test]
    fn test_detailed_flags_approximation() {
        let raw = RawSample {
            total_count: 4,
            items: vec![pr(ItemState::Open), pr(ItemState::Closed), pr(ItemState::Closed), pr(ItemState::Closed)],
        };
        let details = detailed(&process(&raw));

        assert!(details.contains(&Detail::new("pull_requests.merged_is_approximate", MetricValue::Boolean(true))));
        assert!(details.contains(&Detail::new("pull_requests.merged", MetricValue::UInt(3))));
        assert!(details.contains(&Detail::new("pull_requests.sample_size", MetricValue::UInt(4))));
    }
}
