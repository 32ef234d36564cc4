use super::repo_totals::RepoTotals;
use super::sampling::{self, RawSample};
use super::{
    AccountRef, Detail, MetricKind, MetricResult, RecoverableError, RepoCountMap, commits, followers, issues, pull_requests, stars,
};
use crate::client::{RemoteClient, SearchQuery};
use followers::{FollowCounts, FollowerStats};
use issues::IssueStats;
use ohno::app_err;
use pull_requests::PullRequestStats;

const LOG_TARGET: &str = " collector";

pub const DEFAULT_SAMPLE_SIZE: usize = 100;
pub const DEFAULT_MAX_COMMITS_PER_REPO: usize = 1000;

/// Bounds on how much data a collector pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorLimits {
    /// Items sampled per search query.
    pub sample_size: usize,

    /// Commits counted per repository.
    pub max_commits_per_repo: usize,
}

impl Default for CollectorLimits {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_commits_per_repo: DEFAULT_MAX_COMMITS_PER_REPO,
        }
    }
}

#[derive(Debug)]
enum RawData {
    Commits(RepoCountMap),
    Followers(FollowCounts),
    Stars(RepoCountMap),
    PullRequests(RawSample),
    Issues(RawSample),
}

impl RawData {
    fn process(self) -> MetricStats {
        match self {
            Self::Commits(counts) => MetricStats::Commits(RepoTotals::from_counts(&counts)),
            Self::Followers(counts) => MetricStats::Followers(followers::process(counts)),
            Self::Stars(counts) => MetricStats::Stars(RepoTotals::from_counts(&counts)),
            Self::PullRequests(raw) => MetricStats::PullRequests(pull_requests::process(&raw)),
            Self::Issues(raw) => MetricStats::Issues(issues::process(&raw)),
        }
    }
}

/// Processed statistics of one metric.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricStats {
    Commits(RepoTotals),
    Followers(FollowerStats),
    Stars(RepoTotals),
    PullRequests(PullRequestStats),
    Issues(IssueStats),
}

impl MetricStats {
    /// What a metric reports when there is no data at all.
    #[must_use]
    pub fn zero(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Commits => Self::Commits(RepoTotals::default()),
            MetricKind::Followers => Self::Followers(FollowerStats::default()),
            MetricKind::Stars => Self::Stars(RepoTotals::default()),
            MetricKind::PullRequests => Self::PullRequests(PullRequestStats::default()),
            MetricKind::Issues => Self::Issues(IssueStats::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::Commits(_) => MetricKind::Commits,
            Self::Followers(_) => MetricKind::Followers,
            Self::Stars(_) => MetricKind::Stars,
            Self::PullRequests(_) => MetricKind::PullRequests,
            Self::Issues(_) => MetricKind::Issues,
        }
    }

    /// One-line summary of the form `"<value>, <details>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Commits(totals) => commits::summary(totals),
            Self::Followers(stats) => followers::summary(stats),
            Self::Stars(totals) => stars::summary(totals),
            Self::PullRequests(stats) => pull_requests::summary(stats),
            Self::Issues(stats) => issues::summary(stats),
        }
    }

    #[must_use]
    pub fn detailed(&self) -> Vec<Detail> {
        match self {
            Self::Commits(totals) => commits::detailed(totals),
            Self::Followers(stats) => followers::detailed(stats),
            Self::Stars(totals) => stars::detailed(totals),
            Self::PullRequests(stats) => pull_requests::detailed(stats),
            Self::Issues(stats) => issues::detailed(stats),
        }
    }
}

#[derive(Debug)]
enum Stage {
    Pending,
    /// A fetch ran and failed, there is no raw data.
    Attempted,
    Fetched(RawData),
    Processed(MetricStats),
}

/// Fetches and summarizes one metric for one account.
///
/// A collector moves through `Pending → Fetched → Processed` and is single-use: a second
/// [`fetch`](Self::fetch) is rejected. Raw data is consumed by [`process`](Self::process)
/// and only the processed statistics are kept.
#[derive(Debug)]
pub struct MetricCollector<'a, C> {
    kind: MetricKind,
    client: &'a C,
    account: &'a AccountRef,
    limits: CollectorLimits,
    stage: Stage,
    recovered: Option<RecoverableError>,
}

impl<'a, C: RemoteClient> MetricCollector<'a, C> {
    #[must_use]
    pub const fn new(kind: MetricKind, client: &'a C, account: &'a AccountRef, limits: CollectorLimits) -> Self {
        Self {
            kind,
            client,
            account,
            limits,
            stage: Stage::Pending,
            recovered: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Pull raw data from the remote.
    pub async fn fetch(&mut self) -> crate::Result<()> {
        if !matches!(self.stage, Stage::Pending) {
            return Err(app_err!("the {} collector has already fetched its data", self.kind));
        }

        self.stage = Stage::Attempted;
        log::debug!(target: LOG_TARGET, "Fetching {} for '{}'", self.kind, self.account);

        let account = self.account;
        let raw = match self.kind {
            MetricKind::Commits => RawData::Commits(commits::fetch(self.client, account, self.limits.max_commits_per_repo).await?),
            MetricKind::Followers => RawData::Followers(followers::fetch(self.client, account).await?),
            MetricKind::Stars => RawData::Stars(stars::fetch(self.client, account).await?),
            MetricKind::PullRequests => RawData::PullRequests(self.sample(SearchQuery::pull_requests_by(account.as_str())).await),
            MetricKind::Issues => RawData::Issues(self.sample(SearchQuery::issues_by(account.as_str())).await),
        };

        self.stage = Stage::Fetched(raw);
        Ok(())
    }

    async fn sample(&mut self, query: SearchQuery<'_>) -> RawSample {
        match sampling::fetch_sample(self.client, &query, self.limits.sample_size).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "{} reported as zero: {e}", self.kind);
                self.recovered = Some(e);
                RawSample::default()
            }
        }
    }

    /// Turn raw data into statistics. Without raw data this yields the zero state.
    pub fn process(&mut self) {
        let stats = match core::mem::replace(&mut self.stage, Stage::Attempted) {
            Stage::Pending | Stage::Attempted => MetricStats::zero(self.kind),
            Stage::Fetched(raw) => raw.process(),
            Stage::Processed(stats) => stats,
        };

        self.stage = Stage::Processed(stats);
    }

    /// Fetch then process. Processing happens even when the fetch fails, whose error is returned.
    pub async fn collect(&mut self) -> crate::Result<()> {
        let fetched = self.fetch().await;
        self.process();
        fetched
    }

    #[must_use]
    pub const fn stats(&self) -> Option<&MetricStats> {
        match &self.stage {
            Stage::Processed(stats) => Some(stats),
            _ => None,
        }
    }

    /// Summary of the processed statistics, or of the zero state before processing.
    #[must_use]
    pub fn summary(&self) -> String {
        self.stats()
            .map_or_else(|| MetricStats::zero(self.kind).summary(), MetricStats::summary)
    }

    #[must_use]
    pub fn result(&self) -> MetricResult {
        MetricResult::from_summary(&self.summary())
    }

    #[must_use]
    pub fn detailed(&self) -> Vec<Detail> {
        self.stats()
            .map_or_else(|| MetricStats::zero(self.kind).detailed(), MetricStats::detailed)
    }

    /// The fetch failure this collector absorbed, if any.
    #[must_use]
    pub const fn recovered(&self) -> Option<&RecoverableError> {
        self.recovered.as_ref()
    }

    /// Give up the processed statistics and any absorbed failure.
    #[must_use]
    pub fn into_parts(self) -> (MetricStats, Option<RecoverableError>) {
        let stats = match self.stage {
            Stage::Processed(stats) => stats,
            Stage::Fetched(raw) => raw.process(),
            Stage::Pending | Stage::Attempted => MetricStats::zero(self.kind),
        };

        (stats, self.recovered)
    }
}
