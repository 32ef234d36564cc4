use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Point-in-time snapshot of the core API quota.
///
/// The snapshot is advisory: nothing prevents requests issued after it was taken
/// from exhausting the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub remaining: u64,
    pub limit: u64,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitStatus {
    /// Whether the remaining quota is strictly below `threshold`.
    #[must_use]
    pub const fn is_below(&self, threshold: u64) -> bool {
        self.remaining < threshold
    }

    /// Remaining quota as a percentage of the limit (0 when the limit is unknown).
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "quota values are small")]
    pub fn percentage(&self) -> f64 {
        if self.limit == 0 {
            0.0
        } else {
            self.remaining as f64 / self.limit as f64 * 100.0
        }
    }
}

/// `/rate_limit` response body
#[derive(Debug, Deserialize)]
pub(super) struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateWindow,
}

#[derive(Debug, Deserialize)]
struct RateWindow {
    limit: u64,
    remaining: u64,
    reset: i64,
}

impl From<RateLimitResponse> for RateLimitStatus {
    fn from(value: RateLimitResponse) -> Self {
        let core = value.resources.core;
        Self {
            remaining: core.remaining,
            limit: core.limit,
            reset_at: DateTime::from_timestamp(core.reset, 0).unwrap_or_default(),
        }
    }
}

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub remaining: u64,
    pub reset_at: DateTime<Utc>,
}

/// Extract rate limit information from API response headers
pub(super) fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<u64>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
