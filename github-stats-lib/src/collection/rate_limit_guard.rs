use crate::client::{RateLimitStatus, RemoteClient};

const LOG_TARGET: &str = "rate limit";

/// Remaining-request count below which a run is flagged as likely to be cut short.
pub const DEFAULT_LOW_RATE_LIMIT_THRESHOLD: u64 = 50;

/// Outcome of a quota check. Purely advisory, nothing is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitCheck {
    pub status: RateLimitStatus,
    pub threshold: u64,
}

impl RateLimitCheck {
    /// Whether the remaining quota is below the threshold.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.status.is_below(self.threshold)
    }
}

/// Take a quota snapshot and compare it against `threshold`.
pub async fn check_rate_limit<C: RemoteClient>(client: &C, threshold: u64) -> crate::Result<RateLimitCheck> {
    let status = client
        .rate_limit()
        .await
        .map_err(|e| e.into_app_err("checking the API rate limit"))?;

    let check = RateLimitCheck { status, threshold };
    if check.is_low() {
        log::debug!(
            target: LOG_TARGET,
            "Only {} of {} requests remaining (threshold {threshold}), resets at {}",
            status.remaining,
            status.limit,
            status.reset_at
        );
    } else {
        log::debug!(target: LOG_TARGET, "{} of {} requests remaining", status.remaining, status.limit);
    }

    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::FakeClient;

    #[tokio::test]
    async fn test_below_threshold_is_low() {
        let client = FakeClient::new().with_rate_limit(49, 5000);
        let check = check_rate_limit(&client, DEFAULT_LOW_RATE_LIMIT_THRESHOLD).await.unwrap();
        assert!(check.is_low());
        assert_eq!(check.status.remaining, 49);
    }

    #[tokio::test]
    async fn test_at_threshold_is_not_low() {
        let client = FakeClient::new().with_rate_limit(50, 5000);
        let check = check_rate_limit(&client, DEFAULT_LOW_RATE_LIMIT_THRESHOLD).await.unwrap();
        assert!(!check.is_low());
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let client = FakeClient::new().with_rate_limit(200, 5000);
        let check = check_rate_limit(&client, 500).await.unwrap();
        assert!(check.is_low());
    }

    #[tokio::test]
    async fn test_endpoint_failure() {
        let client = FakeClient::new().failing_rate_limit();
        let _ = check_rate_limit(&client, DEFAULT_LOW_RATE_LIMIT_THRESHOLD).await.unwrap_err();
    }
}
