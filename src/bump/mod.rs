pub mod discover;
pub mod manifest;
pub mod prompt;
pub mod version;

pub use discover::discover_manifests;
pub use manifest::Manifest;
pub use prompt::{pick_version, Choice, DialoguerPrompter, Prompter};
pub use version::{increment, parse_version, Bump};

use semver::Version;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub cwd: PathBuf,
    pub dirs: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct BumpReport {
    pub discovered: usize,
    pub updated: Vec<(PathBuf, Version)>,
    pub skipped: Vec<PathBuf>,
}

/// Rewrite the version of every manifest found under the requested directories.
///
/// Files are handled one at a time. An invalid version stops the run; files written before
/// it keep their new version.
pub fn run<P: Prompter + ?Sized>(options: &BumpOptions, prompter: &mut P) -> Result<BumpReport> {
    let files = discover_manifests(&options.cwd, &options.dirs)?;
    info!(count = files.len(), "Discovered manifest files");

    let mut report = BumpReport { discovered: files.len(), ..Default::default() };
    let mut asked_reuse = false;
    let mut reused: Option<Version> = None;

    for path in files {
        let manifest = Manifest::load(&path)?;

        let Some(raw) = manifest.version() else {
            debug!(path = %path.display(), "No version field, skipping");
            report.skipped.push(path);
            continue;
        };
        let current = parse_version(&path, raw)?;

        let next = match &reused {
            Some(version) => version.clone(),
            None => pick_version(&mut *prompter, &path, &current)?,
        };

        if !asked_reuse {
            if prompter.confirm_reuse()? {
                reused = Some(next.clone());
            }
            asked_reuse = true;
        }

        manifest.write_version(&next)?;
        info!(path = %path.display(), from = %current, to = %next, "Updated version");
        report.updated.push((path, next));
    }

    Ok(report)
}
