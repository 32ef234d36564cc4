//! Stargazers across the account's repositories.

use super::commits::record;
use super::repo_totals::RepoTotals;
use super::{AccountRef, Detail, MetricValue, RepoCountMap, format_count};
use crate::client::RemoteClient;

const LOG_TARGET: &str = "     stars";

/// Star counts of every repository with at least one star.
pub async fn fetch<C: RemoteClient>(client: &C, account: &AccountRef) -> crate::Result<RepoCountMap> {
    let repos = client
        .list_repositories(account.as_str())
        .await
        .map_err(|e| e.into_app_err(format!("listing repositories of '{account}'")))?;

    let mut counts = RepoCountMap::with_capacity(repos.len());
    for repo in repos.iter().filter(|r| r.stargazers_count > 0) {
        record(&mut counts, repo, repo.stargazers_count);
    }

    log::debug!(target: LOG_TARGET, "{} of {} repositories of '{account}' have stars", counts.len(), repos.len());
    Ok(counts)
}

#[must_use]
pub fn summary(totals: &RepoTotals) -> String {
    if totals.total == 0 {
        return "0, No stars".to_string();
    }

    match &totals.top {
        Some(top) => format!("{}, Top: {} ({})", totals.total, top.name, format_count(top.count)),
        None => totals.total.to_string(),
    }
}

#[must_use]
pub fn detailed(totals: &RepoTotals) -> Vec<Detail> {
    vec![
        Detail::new("stars.total", MetricValue::UInt(totals.total)),
        Detail::new("stars.repositories", MetricValue::UInt(totals.repositories)),
        Detail::new("stars.average_per_repository", MetricValue::UInt(totals.average)),
        Detail::new("stars.top_repositories", MetricValue::Ranking(totals.ranked.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::FakeClient;

    #[tokio::test]
    async fn test_fetch_excludes_unstarred() {
        let client = FakeClient::new()
            .with_repo("octocat", "popular", 40)
            .with_repo("octocat", "quiet", 0)
            .with_repo("octocat", "rising", 2);
        let account = AccountRef::new("octocat").unwrap();

        let counts = fetch(&client, &account).await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("quiet"), None);
        assert_eq!(counts.total(), 42);
    }

    #[tokio::test]
    async fn test_fetch_fails_when_repositories_cannot_be_listed() {
        let client = FakeClient::new().failing_repositories();
        let account = AccountRef::new("octocat").unwrap();

        let _ = fetch(&client, &account).await.unwrap_err();
    }

    #[test]
    fn test_summary() {
        let counts: RepoCountMap = [("popular", 40), ("rising", 2)].into_iter().collect();
        assert_eq!(summary(&RepoTotals::from_counts(&counts)), "42, Top: popular (40)");
    }

    #[test]
    fn test_summary_tie_goes_to_first_listed() {
        let counts: RepoCountMap = [("first", 7), ("second", 7)].into_iter().collect();
        assert_eq!(summary(&RepoTotals::from_counts(&counts)), "14, Top: first (7)");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary(&RepoTotals::default()), "0, No stars");
    }

    #[test]
    fn test_detailed() {
        let counts: RepoCountMap = [("popular", 40), ("rising", 2)].into_iter().collect();
        let details = detailed(&RepoTotals::from_counts(&counts));

        assert_eq!(details[0], Detail::new("stars.total", MetricValue::UInt(42)));
        assert_eq!(details[2], Detail::new("stars.average_per_repository", MetricValue::UInt(21)));
    }
}
