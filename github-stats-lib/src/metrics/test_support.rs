//! In-memory [`RemoteClient`] for exercising collectors without a network.

use crate::client::{
    Account, ApiError, ApiResult, Commit, ItemState, PullRequestMarker, RateLimitStatus, RemoteClient, Repository, SearchItem,
    SearchKind, SearchQuery, SearchResults,
};
use chrono::{DateTime, Utc};
use ohno::app_err;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
enum Canned<T> {
    Ready(T),
    Fail,
}

#[derive(Debug)]
pub struct FakeClient {
    authenticated_as: Option<String>,
    profiles: HashMap<String, Account>,
    repos: Canned<Vec<Repository>>,
    commits: HashMap<String, usize>,
    forbidden_commits: HashSet<String>,
    pull_requests: Canned<SearchResults>,
    issues: Canned<SearchResults>,
    rate_limit: Canned<RateLimitStatus>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            authenticated_as: None,
            profiles: HashMap::new(),
            repos: Canned::Ready(Vec::new()),
            commits: HashMap::new(),
            forbidden_commits: HashSet::new(),
            pull_requests: Canned::Ready(SearchResults::default()),
            issues: Canned::Ready(SearchResults::default()),
            rate_limit: Canned::Ready(RateLimitStatus {
                remaining: 5000,
                limit: 5000,
                reset_at: reset_time(),
            }),
        }
    }

    pub fn authenticated_as(mut self, login: &str) -> Self {
        self.authenticated_as = Some(login.to_string());
        self.with_profile(login, 0, 0)
    }

    pub fn with_profile(mut self, login: &str, followers: u64, following: u64) -> Self {
        let _ = self.profiles.insert(
            login.to_string(),
            Account {
                login: login.into(),
                followers,
                following,
            },
        );
        self
    }

    pub fn with_repo(mut self, owner: &str, name: &str, stars: u64) -> Self {
        if let Canned::Ready(repos) = &mut self.repos {
            repos.push(Repository {
                name: name.into(),
                full_name: format!("{owner}/{name}").into(),
                stargazers_count: stars,
            });
        }
        self
    }

    pub fn with_commits(mut self, full_name: &str, count: usize) -> Self {
        let _ = self.commits.insert(full_name.to_string(), count);
        self
    }

    pub fn with_forbidden_commits(mut self, full_name: &str) -> Self {
        let _ = self.forbidden_commits.insert(full_name.to_string());
        self
    }

    pub fn failing_repositories(mut self) -> Self {
        self.repos = Canned::Fail;
        self
    }

    /// Canned search response: `total` reported hits, `states` as the head of the list.
    /// Closed pull requests are marked merged.
    pub fn with_search(mut self, kind: SearchKind, total: u64, states: &[ItemState]) -> Self {
        let items = states
            .iter()
            .map(|&state| SearchItem {
                state,
                pull_request: (kind == SearchKind::PullRequest).then(|| PullRequestMarker {
                    merged_at: (state == ItemState::Closed).then(reset_time),
                }),
            })
            .collect();

        *self.search_mut(kind) = Canned::Ready(SearchResults { total_count: total, items });
        self
    }

    pub fn failing_search(mut self, kind: SearchKind) -> Self {
        *self.search_mut(kind) = Canned::Fail;
        self
    }

    pub fn with_rate_limit(mut self, remaining: u64, limit: u64) -> Self {
        self.rate_limit = Canned::Ready(RateLimitStatus {
            remaining,
            limit,
            reset_at: reset_time(),
        });
        self
    }

    pub fn failing_rate_limit(mut self) -> Self {
        self.rate_limit = Canned::Fail;
        self
    }

    const fn search_mut(&mut self, kind: SearchKind) -> &mut Canned<SearchResults> {
        match kind {
            SearchKind::Issue => &mut self.issues,
            SearchKind::PullRequest => &mut self.pull_requests,
        }
    }
}

fn reset_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

fn canned<T: Clone>(canned: &Canned<T>, what: &str) -> ApiResult<T> {
    match canned {
        Canned::Ready(value) => Ok(value.clone()),
        Canned::Fail => Err(ApiError::Failed(app_err!("{what} unavailable"))),
    }
}

impl RemoteClient for FakeClient {
    async fn validate_auth(&self) -> ApiResult<Account> {
        let login = self.authenticated_as.as_deref().ok_or(ApiError::Unauthorized)?;
        self.get_account(login).await
    }

    async fn get_account(&self, login: &str) -> ApiResult<Account> {
        self.profiles.get(login).cloned().ok_or(ApiError::NotFound)
    }

    async fn list_repositories(&self, _login: &str) -> ApiResult<Vec<Repository>> {
        canned(&self.repos, "repositories")
    }

    async fn list_commits(&self, repo: &Repository, _author: &str, limit: usize) -> ApiResult<Vec<Commit>> {
        if self.forbidden_commits.contains(repo.full_name.as_str()) {
            return Err(ApiError::Forbidden);
        }

        let count = self.commits.get(repo.full_name.as_str()).copied().unwrap_or(0);
        Ok((0..count.min(limit)).map(|i| Commit { sha: format!("{i:040x}").into() }).collect())
    }

    async fn search_issues(&self, query: &SearchQuery<'_>, limit: usize) -> ApiResult<SearchResults> {
        let source = match query.kind {
            SearchKind::Issue => &self.issues,
            SearchKind::PullRequest => &self.pull_requests,
        };

        let mut results = canned(source, "search")?;
        results.items.truncate(limit);
        Ok(results)
    }

    async fn rate_limit(&self) -> ApiResult<RateLimitStatus> {
        canned(&self.rate_limit, "rate limit")
    }
}
