//! Issues opened by the account, with open/closed estimated from a sample.

use super::sampling::{Estimate, RawSample, SampleCounts, estimate};
use super::{Detail, MetricValue, percent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueStats {
    pub estimate: Estimate,
    pub sample: SampleCounts,
}

impl IssueStats {
    #[must_use]
    pub const fn close_rate(&self) -> u64 {
        percent(self.estimate.closed, self.estimate.total)
    }
}

#[must_use]
pub fn process(raw: &RawSample) -> IssueStats {
    let sample = SampleCounts::tally(&raw.items);
    IssueStats {
        estimate: estimate(raw.total_count, &sample),
        sample,
    }
}

#[must_use]
pub fn summary(stats: &IssueStats) -> String {
    if stats.estimate.total == 0 {
        return "0, No issues".to_string();
    }

    format!("{}, {}% closed", stats.estimate.total, stats.close_rate())
}

#[must_use]
pub fn detailed(stats: &IssueStats) -> Vec<Detail> {
    vec![
        Detail::new("issues.total", MetricValue::UInt(stats.estimate.total)),
        Detail::new("issues.open", MetricValue::UInt(stats.estimate.open)),
        Detail::new("issues.closed", MetricValue::UInt(stats.estimate.closed)),
        Detail::new("issues.close_rate", MetricValue::UInt(stats.close_rate())),
        Detail::new("issues.sample_size", MetricValue::UInt(stats.sample.size)),
    ]
}
