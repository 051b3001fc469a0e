use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

pub const MANIFEST_EXTENSIONS: &[&str] = &["json", "jsonc", "json5"];

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target"];

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MANIFEST_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Find manifest files below each of `dirs` (resolved against `cwd`).
///
/// Paths are absolute and unique; order follows the arguments, then file name order.
pub fn discover_manifests(cwd: &Path, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for dir in dirs {
        let root = cwd.join(dir);
        debug!(root = %root.display(), "Searching for manifests");

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_manifest(entry.path()) {
                continue;
            }

            let absolute = entry.path().canonicalize()?;
            if seen.insert(absolute.clone()) {
                files.push(absolute);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovers_manifests_once() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("packages/a")).unwrap();
        fs::create_dir_all(root.join("packages/b/node_modules/dep")).unwrap();
        fs::write(root.join("packages/a/package.json"), "{}").unwrap();
        fs::write(root.join("packages/a/deno.jsonc"), "{}").unwrap();
        fs::write(root.join("packages/a/README.md"), "").unwrap();
        fs::write(root.join("packages/b/package.json5"), "{}").unwrap();
        fs::write(root.join("packages/b/node_modules/dep/package.json"), "{}").unwrap();

        let dirs = vec![PathBuf::from("packages"), PathBuf::from("packages/a")];
        let files = discover_manifests(root, &dirs).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root.canonicalize().unwrap()).unwrap().display().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["packages/a/deno.jsonc", "packages/a/package.json", "packages/b/package.json5"]
        );
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = discover_manifests(tmp.path(), &[PathBuf::from("nope")]);
        assert!(result.is_err());
    }
}
