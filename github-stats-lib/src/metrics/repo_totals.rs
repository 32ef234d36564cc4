use super::{RepoCount, RepoCountMap};

/// Number of repositories listed in a detailed ranking.
const TOP_REPOSITORIES: usize = 10;

/// Processed form of a [`RepoCountMap`], shared by the commit and star metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoTotals {
    pub total: u64,
    pub repositories: u64,
    pub average: u64,
    pub top: Option<RepoCount>,
    pub ranked: Vec<RepoCount>,
}

impl RepoTotals {
    #[must_use]
    pub fn from_counts(counts: &RepoCountMap) -> Self {
        Self {
            total: counts.total(),
            repositories: counts.len() as u64,
            average: counts.average(),
            top: counts.top().cloned(),
            ranked: counts.ranked(TOP_REPOSITORIES),
        }
    }
}
