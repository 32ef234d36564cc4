use super::{Account, ApiResult, Commit, RateLimitStatus, Repository, SearchResults};
use core::fmt::{Display, Formatter};

/// What a search query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Issue,
    PullRequest,
}

/// A search query scoped to items authored by one account.
///
/// Renders as `type:issue author:<login>` or `type:pr author:<login>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub kind: SearchKind,
    pub author: &'a str,
}

impl<'a> SearchQuery<'a> {
    #[must_use]
    pub const fn issues_by(author: &'a str) -> Self {
        Self {
            kind: SearchKind::Issue,
            author,
        }
    }

    #[must_use]
    pub const fn pull_requests_by(author: &'a str) -> Self {
        Self {
            kind: SearchKind::PullRequest,
            author,
        }
    }
}

impl Display for SearchQuery<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let kind = match self.kind {
            SearchKind::Issue => "issue",
            SearchKind::PullRequest => "pr",
        };
        write!(f, "type:{kind} author:{}", self.author)
    }
}

/// The request-issuing capability the collectors run against.
///
/// Implementations must be safe for concurrent use since collectors may run side by side
/// against one shared client.
pub trait RemoteClient: Sync {
    /// Resolve the account the credentials belong to.
    fn validate_auth(&self) -> impl Future<Output = ApiResult<Account>> + Send;

    /// Fetch the public profile of `login`.
    fn get_account(&self, login: &str) -> impl Future<Output = ApiResult<Account>> + Send;

    /// List the repositories owned by or accessible to `login`.
    fn list_repositories(&self, login: &str) -> impl Future<Output = ApiResult<Vec<Repository>>> + Send;

    /// List at most `limit` commits in `repo` authored by `author`.
    fn list_commits(&self, repo: &Repository, author: &str, limit: usize) -> impl Future<Output = ApiResult<Vec<Commit>>> + Send;

    /// Run an issue search, returning the reported total and at most `limit` items from the head of the results.
    fn search_issues(&self, query: &SearchQuery<'_>, limit: usize) -> impl Future<Output = ApiResult<SearchResults>> + Send;

    /// Snapshot of the current core API quota.
    fn rate_limit(&self) -> impl Future<Output = ApiResult<RateLimitStatus>> + Send;
}
