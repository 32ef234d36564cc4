//! Follower and following counts.

use super::{AccountRef, Detail, MetricValue, format_count};
use crate::client::RemoteClient;

/// Raw counts as reported on the account profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowCounts {
    pub followers: u64,
    pub following: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FollowerStats {
    pub followers: u64,
    pub following: u64,
    pub ratio: f64,
}

pub async fn fetch<C: RemoteClient>(client: &C, account: &AccountRef) -> crate::Result<FollowCounts> {
    let profile = client
        .get_account(account.as_str())
        .await
        .map_err(|e| e.into_app_err(format!("fetching profile of '{account}'")))?;

    Ok(FollowCounts {
        followers: profile.followers,
        following: profile.following,
    })
}

#[must_use]
pub fn process(counts: FollowCounts) -> FollowerStats {
    FollowerStats {
        followers: counts.followers,
        following: counts.following,
        ratio: ratio(counts.followers, counts.following),
    }
}

/// `followers / following`; unbounded when following nobody, 0 when both are 0.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "a ratio only needs a couple of significant digits")]
pub fn ratio(followers: u64, following: u64) -> f64 {
    match (followers, following) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (f, g) => f as f64 / g as f64,
    }
}

#[must_use]
pub fn summary(stats: &FollowerStats) -> String {
    format!("{}, Following: {}", stats.followers, format_count(stats.following))
}

#[must_use]
pub fn detailed(stats: &FollowerStats) -> Vec<Detail> {
    vec![
        Detail::new("followers.followers", MetricValue::UInt(stats.followers)),
        Detail::new("followers.following", MetricValue::UInt(stats.following)),
        Detail::new("followers.ratio", MetricValue::Float(stats.ratio)),
    ]
}
