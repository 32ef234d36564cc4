use super::RepoCount;
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    UInt(u64),
    Float(f64),
    String(CompactString),
    Boolean(bool),
    Ranking(Vec<RepoCount>),
}

/// One named entry of a detailed breakdown, e.g. `commits.total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub name: &'static str,
    pub value: MetricValue,
}

impl Detail {
    #[must_use]
    pub const fn new(name: &'static str, value: MetricValue) -> Self {
        Self { name, value }
    }
}
