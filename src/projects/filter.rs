use crate::types::RepositoryNode;

/// Names inside a repository's `.github` folder that opt it into the project list
pub const MARKER_FILES: &[&str] = &[
    ".luxass",
    ".luxassinclude",
    ".luxass_include",
    ".luxass-visdig",
    ".luxass-include",
    ".luxass-komfritfrem",
];

pub fn has_marker(repo: &RepositoryNode, markers: &[&str]) -> bool {
    repo.object
        .as_ref()
        .map(|tree| tree.entries.iter().any(|entry| markers.contains(&entry.name.as_str())))
        .unwrap_or(false)
}

/// Keep repositories whose `.github` listing contains at least one marker name.
pub fn filter_marked(repos: &[RepositoryNode], markers: &[&str]) -> Vec<RepositoryNode> {
    repos
        .iter()
        .filter(|repo| has_marker(repo, markers))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryKind, Languages, RepositoryOwner, Tree, TreeEntry};

    fn repo(name: &str, entries: Option<Vec<&str>>) -> RepositoryNode {
        RepositoryNode {
            name: name.to_string(),
            owner: RepositoryOwner { login: "octo".to_string() },
            description: None,
            pushed_at: None,
            stargazer_count: 0,
            fork_count: 0,
            url: format!("https://github.com/octo/{}", name),
            languages: Languages::default(),
            object: entries.map(|names| Tree {
                entries: names
                    .into_iter()
                    .map(|n| TreeEntry { name: n.to_string(), kind: EntryKind::Blob })
                    .collect(),
            }),
        }
    }

    #[test]
    fn test_marker_present_is_included() {
        let repos = vec![
            repo("a", Some(vec!["workflows", ".luxass"])),
            repo("b", Some(vec![".luxass-include"])),
        ];
        let kept = filter_marked(&repos, MARKER_FILES);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_missing_listing_or_marker_is_excluded() {
        let repos = vec![
            repo("no-folder", None),
            repo("empty-folder", Some(vec![])),
            repo("unrelated", Some(vec!["workflows", "FUNDING.yml", ".luxass.bak"])),
            repo("marked", Some(vec![".luxass_include"])),
        ];
        let kept = filter_marked(&repos, MARKER_FILES);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "marked");
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_marked(&[], MARKER_FILES).is_empty());
    }
}
