//! Wire models for the handful of GitHub API responses we consume.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::Deserialize;

/// A GitHub account profile, as returned by `/user` and `/users/{login}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub login: CompactString,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// A repository listed for an account.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: CompactString,
    pub full_name: CompactString,
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Only the identity of a commit matters, we never look inside.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub sha: CompactString,
}

/// Issue or pull request state: open or closed
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

/// Marker type to detect if a search hit is actually a pull request.
/// `merged_at` is populated by GitHub when the PR has been merged.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// A single hit from the issue search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchItem {
    pub state: ItemState,
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
}

impl SearchItem {
    /// Whether the hit is a pull request GitHub reports as merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(&self.pull_request, Some(PullRequestMarker { merged_at: Some(_) }))
    }
}

/// Search endpoint response: the reported population size plus the head of the result list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchResults {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialize() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "followers": 100,
            "following": 50
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.login, "octocat");
        assert_eq!(account.followers, 100);
        assert_eq!(account.following, 50);
    }

    #[test]
    fn test_account_missing_counts_default_to_zero() {
        let account: Account = serde_json::from_str(r#"{"login": "ghost"}"#).unwrap();
        assert_eq!(account.followers, 0);
        assert_eq!(account.following, 0);
    }

    #[test]
    fn test_repository_deserialize() {
        let json = r#"{
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "stargazers_count": 1500,
            "fork": false
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.full_name, "octocat/hello-world");
        assert_eq!(repo.stargazers_count, 1500);
    }

    #[test]
    fn test_search_item_issue() {
        let item: SearchItem = serde_json::from_str(r#"{"state": "open"}"#).unwrap();
        assert_eq!(item.state, ItemState::Open);
        assert!(item.pull_request.is_none());
        assert!(!item.is_merged());
    }

    #[test]
    fn test_search_item_merged_pull_request() {
        let json = r#"{
            "state": "closed",
            "pull_request": {
                "url": "https://api.github.com/repos/octocat/hello-world/pulls/1",
                "merged_at": "2024-01-02T00:00:00Z"
            }
        }"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.state, ItemState::Closed);
        assert!(item.pull_request.is_some());
        assert!(item.is_merged());
    }

    #[test]
    fn test_search_item_unmerged_pull_request() {
        let json = r#"{
            "state": "closed",
            "pull_request": { "merged_at": null }
        }"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert!(item.pull_request.is_some());
        assert!(!item.is_merged());
    }

    #[test]
    fn test_search_results_deserialize() {
        let json = r#"{
            "total_count": 42,
            "incomplete_results": false,
            "items": [{"state": "open"}, {"state": "closed"}]
        }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.total_count, 42);
        assert_eq!(results.items.len(), 2);
    }
}
