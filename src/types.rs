use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// GitHub GraphQL response structures

/// Envelope returned by the GraphQL endpoint
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    pub user: Option<Profile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub pinned_items: PinnedItems,
    pub repositories: Repositories,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinnedItems {
    pub edges: Vec<PinnedEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinnedEdge {
    pub node: PinnedNode,
}

/// Pinned items can be gists, which come back as `{}` from the `... on Repository` fragment.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PinnedNode {
    Repository(Box<RepositoryNode>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repositories {
    pub total_count: u32,
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub owner: RepositoryOwner,
    pub description: Option<String>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub stargazer_count: u32,
    pub fork_count: u32,
    pub url: String,
    #[serde(default)]
    pub languages: Languages,
    pub object: Option<Tree>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Languages {
    pub nodes: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    // `.github` that is a blob or submodule comes back as `{}`
    #[serde(default)]
    pub entries: Vec<TreeEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    Commit,
}

/// Identity of a repository: owner login plus repository name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl RepositoryNode {
    pub fn key(&self) -> RepoKey {
        RepoKey {
            owner: self.owner.login.clone(),
            name: self.name.clone(),
        }
    }

    /// First language by size, if GitHub reported any
    pub fn primary_language(&self) -> Option<&Language> {
        self.languages.nodes.first()
    }
}

impl Profile {
    /// Repository nodes among the pinned items, in the user's order
    pub fn pinned_repositories(&self) -> Vec<RepositoryNode> {
        self.pinned_items
            .edges
            .iter()
            .filter_map(|edge| match &edge.node {
                PinnedNode::Repository(repo) => Some(repo.as_ref().clone()),
                PinnedNode::Other(_) => None,
            })
            .collect()
    }
}
