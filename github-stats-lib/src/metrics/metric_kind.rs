use strum::{Display, EnumIter};

/// The closed set of metrics github-stats knows how to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum MetricKind {
    Commits,
    Followers,
    Stars,
    #[strum(to_string = "Pull Requests")]
    PullRequests,
    Issues,
}

impl MetricKind {
    /// Registry of every collector, in the order results are reported.
    pub const ALL: [Self; 5] = [Self::Commits, Self::Followers, Self::Stars, Self::PullRequests, Self::Issues];

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
