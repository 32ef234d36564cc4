//! GitHub API client
//!
//! Minimal GitHub REST client for the account, repository, commit, search and quota
//! endpoints the collectors need.

use super::rate_limit::{RateLimitResponse, extract_rate_limit_from_headers};
use super::{Account, ApiError, ApiResult, Commit, RateLimitInfo, RateLimitStatus, RemoteClient, Repository, SearchQuery, SearchResults};
use crate::Result;
use chrono::Utc;
use ohno::app_err;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

const LOG_TARGET: &str = "    client";
const PAGE_SIZE: usize = 100;
const MAX_REPOSITORY_PAGES: u32 = 50;
const MAX_SEARCH_PAGE_SIZE: usize = 100;
const MAX_CONCURRENT_REQUESTS: usize = 8;

/// Default public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    in_flight: Arc<Semaphore>,
}

impl GitHubClient {
    /// Create a new client with an optional authentication token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent("github-stats")
            .default_headers(headers)
            .build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            in_flight: Arc::new(Semaphore::new(MAX_CONCURRENT_REQUESTS)),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL from a path and query parameters
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> ApiResult<Url> {
        Url::parse_with_params(&format!("{}{path}", self.base_url), params).map_err(|e| ApiError::Failed(e.into()))
    }

    /// Make an API call and classify the result
    ///
    /// At most `MAX_CONCURRENT_REQUESTS` calls are in flight at once across all clones of this client.
    async fn api_call(&self, url: Url) -> ApiResult<reqwest::Response> {
        let _permit = self.in_flight.acquire().await.map_err(|e| ApiError::Failed(e.into()))?;
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => return Err(ApiError::Failed(e.into())),
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let rate_limit = extract_rate_limit_from_headers(resp.headers());
        let quota_exhausted = rate_limit.is_some_and(|rl| rl.remaining == 0);

        let rate_limited = || {
            ApiError::RateLimited(rate_limit.unwrap_or_else(|| RateLimitInfo {
                remaining: 0,
                reset_at: Utc::now() + chrono::Duration::hours(1),
            }))
        };

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(rate_limited()),
            StatusCode::FORBIDDEN if quota_exhausted => Err(rate_limited()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::CONFLICT => Err(ApiError::EmptyRepository),
            _ => Err(ApiError::Failed(app_err!("unexpected HTTP status {status} for '{url}'"))),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let resp = self.api_call(url).await?;
        resp.json().await.map_err(|e| ApiError::Failed(e.into()))
    }

    /// Fetch a list endpoint page by page until `limit` items, the last page, or `max_pages` is reached.
    async fn get_paged<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)], limit: usize, max_pages: u32) -> ApiResult<Vec<T>> {
        let per_page = limit.clamp(1, PAGE_SIZE).to_string();
        let mut items: Vec<T> = Vec::new();
        let mut page_num = 1u32;

        while items.len() < limit {
            let page = page_num.to_string();
            let mut page_params = params.to_vec();
            page_params.push(("per_page", per_page.as_str()));
            page_params.push(("page", page.as_str()));

            let resp = self.api_call(self.endpoint(path, &page_params)?).await?;

            let has_next_page = resp
                .headers()
                .get(LINK)
                .and_then(|h| h.to_str().ok())
                .is_some_and(|link_str| link_str.contains(r#"rel="next""#));

            let batch: Vec<T> = resp.json().await.map_err(|e| ApiError::Failed(e.into()))?;
            if batch.is_empty() {
                break;
            }

            items.extend(batch);

            if !has_next_page {
                break;
            }

            page_num += 1;
            if page_num > max_pages {
                log::debug!(target: LOG_TARGET, "Reached maximum page limit ({max_pages}) for '{path}', stopping pagination after {} items", items.len());
                break;
            }
        }

        items.truncate(limit);
        Ok(items)
    }
}

impl RemoteClient for GitHubClient {
    async fn validate_auth(&self) -> ApiResult<Account> {
        self.get_json(self.endpoint("/user", &[])?).await
    }

    async fn get_account(&self, login: &str) -> ApiResult<Account> {
        self.get_json(self.endpoint(&format!("/users/{login}"), &[])?).await
    }

    async fn list_repositories(&self, login: &str) -> ApiResult<Vec<Repository>> {
        // Sorting by name pins the listing order, which keeps the first-maximum
        // tie-break reproducible across runs.
        let params = [("type", "all"), ("sort", "full_name"), ("direction", "asc")];
        self.get_paged(&format!("/users/{login}/repos"), &params, usize::MAX, MAX_REPOSITORY_PAGES).await
    }

    async fn list_commits(&self, repo: &Repository, author: &str, limit: usize) -> ApiResult<Vec<Commit>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let params = [("author", author)];
        self.get_paged(&format!("/repos/{}/commits", repo.full_name), &params, limit, u32::MAX).await
    }

    async fn search_issues(&self, query: &SearchQuery<'_>, limit: usize) -> ApiResult<SearchResults> {
        let q = query.to_string();
        let per_page = limit.clamp(1, MAX_SEARCH_PAGE_SIZE).to_string();
        let url = self.endpoint("/search/issues", &[("q", q.as_str()), ("per_page", per_page.as_str())])?;

        let mut results: SearchResults = self.get_json(url).await?;
        results.items.truncate(limit);
        Ok(results)
    }

    async fn rate_limit(&self) -> ApiResult<RateLimitStatus> {
        let response: RateLimitResponse = self.get_json(self.endpoint("/rate_limit", &[])?).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_without_token() {
        let client = GitHubClient::new(None, DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_new_with_token() {
        let client = GitHubClient::new(Some("test_token"), DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = GitHubClient::new(None, "https://github.example.com/api/v3/").unwrap();
        assert_eq!(client.base_url(), "https://github.example.com/api/v3");
    }

    #[test]
    fn test_client_rejects_invalid_token() {
        assert!(GitHubClient::new(Some("bad\ntoken"), DEFAULT_API_URL).is_err());
    }

    #[test]
    fn test_endpoint_encodes_query() {
        let client = GitHubClient::new(None, DEFAULT_API_URL).unwrap();
        let url = client
            .endpoint("/search/issues", &[("q", "type:pr author:octocat"), ("per_page", "100")])
            .unwrap();
        assert_eq!(url.path(), "/search/issues");
        let q = url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("type:pr author:octocat"));
    }
}
