use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Project, ProjectSummary};
use crate::types::RepositoryNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub stars: u64,
    pub forks: u64,
}

/// Star and fork sums over exactly the given list.
pub fn totals(repos: &[RepositoryNode]) -> Totals {
    repos.iter().fold(Totals::default(), |acc, repo| Totals {
        stars: acc.stars + u64::from(repo.stargazer_count),
        forks: acc.forks + u64::from(repo.fork_count),
    })
}

pub fn summarize(merged: &[RepositoryNode], total_count: u32, now: DateTime<Utc>) -> ProjectSummary {
    let Totals { stars, forks } = totals(merged);

    ProjectSummary {
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_count,
        total_stars: stars,
        total_forks: forks,
        projects: merged.iter().map(Project::from_node).collect(),
    }
}
