//! Commits authored by the account, counted per repository.

use super::repo_totals::RepoTotals;
use super::{AccountRef, Detail, MetricValue, RepoCountMap, format_count};
use crate::client::{RemoteClient, Repository};
use futures_util::future::join_all;

const LOG_TARGET: &str = "   commits";

/// Count the account's commits in every repository it can see.
///
/// Each repository contributes at most `max_per_repo` commits. A repository that cannot
/// be read is skipped; failing to list the repositories at all is an error.
pub async fn fetch<C: RemoteClient>(client: &C, account: &AccountRef, max_per_repo: usize) -> crate::Result<RepoCountMap> {
    let repos = client
        .list_repositories(account.as_str())
        .await
        .map_err(|e| e.into_app_err(format!("listing repositories of '{account}'")))?;

    log::debug!(target: LOG_TARGET, "Counting commits by '{account}' across {} repositories", repos.len());

    let outcomes = join_all(repos.iter().map(|repo| async move {
        let outcome = client.list_commits(repo, account.as_str(), max_per_repo).await;
        (repo, outcome)
    }))
    .await;

    let mut counts = RepoCountMap::with_capacity(outcomes.len());
    for (repo, outcome) in outcomes {
        match outcome {
            Ok(commits) => {
                let count = commits.len().min(max_per_repo) as u64;
                if count > 0 {
                    record(&mut counts, repo, count);
                }
            }
            Err(e) if e.is_access_error() => {
                log::debug!(target: LOG_TARGET, "Skipping '{}': {e}", repo.full_name);
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "Could not count commits in '{}': {e}", repo.full_name);
            }
        }
    }

    Ok(counts)
}

/// Key by short name, falling back to the full name when two owners share a repository name.
pub(super) fn record(counts: &mut RepoCountMap, repo: &Repository, count: u64) {
    if !counts.insert(repo.name.clone(), count) {
        let _ = counts.insert(repo.full_name.clone(), count);
    }
}

#[must_use]
pub fn summary(totals: &RepoTotals) -> String {
    if totals.total == 0 {
        return "0, No commits found".to_string();
    }

    match &totals.top {
        Some(top) => format!("{}, Most: {} ({})", totals.total, top.name, format_count(top.count)),
        None => totals.total.to_string(),
    }
}

#[must_use]
pub fn detailed(totals: &RepoTotals) -> Vec<Detail> {
    vec![
        Detail::new("commits.total", MetricValue::UInt(totals.total)),
        Detail::new("commits.repositories", MetricValue::UInt(totals.repositories)),
        Detail::new("commits.average_per_repository", MetricValue::UInt(totals.average)),
        Detail::new("commits.top_repositories", MetricValue::Ranking(totals.ranked.clone())),
    ]
}
