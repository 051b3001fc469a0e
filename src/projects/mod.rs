pub mod filter;
pub mod merge;
pub mod summary;

pub use filter::{filter_marked, MARKER_FILES};
pub use merge::merge_projects;
pub use summary::{summarize, totals, Totals};

use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::ProjectSummary;
use crate::types::Profile;

pub const DEFAULT_OUTPUT: &str = "assets/projects.json";

/// Filter, merge and aggregate a fetched profile into the summary artifact.
pub fn build_summary(profile: &Profile, now: DateTime<Utc>) -> ProjectSummary {
    let pinned = profile.pinned_repositories();
    let marked = filter_marked(&profile.repositories.nodes, MARKER_FILES);

    info!(
        pinned = pinned.len(),
        repositories = profile.repositories.nodes.len(),
        marked = marked.len(),
        "Merging pinned items with marked repositories"
    );

    let merged = merge_projects(pinned, marked);
    summarize(&merged, profile.repositories.total_count, now)
}

/// Replace the file at `path` with the pretty-printed summary.
pub async fn write_summary(path: &Path, summary: &ProjectSummary) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(summary)?;
    tokio::fs::write(path, json).await?;

    info!(path = %path.display(), projects = summary.projects.len(), "Wrote project file");
    Ok(())
}
