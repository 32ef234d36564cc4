//! Remote hosting capability
//!
//! The collectors never talk HTTP directly. They run against the [`RemoteClient`] trait,
//! which exposes paged listings, issue search and quota introspection. [`GitHubClient`]
//! is the production implementation; tests drive the collectors with in-memory fakes.
//!
//! Every call returns an [`ApiResult`], whose error side classifies the failure
//! (unauthorized, forbidden, not found, rate limited, or anything else) so callers can
//! decide whether a failure is local to one sub-unit of work or fatal.

mod api_error;
mod github_client;
mod models;
mod rate_limit;
mod remote_client;

pub use api_error::{ApiError, ApiResult};
pub use github_client::{DEFAULT_API_URL, GitHubClient};
pub use models::{Account, Commit, ItemState, PullRequestMarker, Repository, SearchItem, SearchResults};
pub use rate_limit::{RateLimitInfo, RateLimitStatus};
pub use remote_client::{RemoteClient, SearchKind, SearchQuery};
