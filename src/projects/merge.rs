use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::types::{Language, RepoKey, RepositoryNode, Tree, TreeEntry};

/// Fold another value of the same shape into `self`, treating `incoming` as authoritative.
pub trait Merge {
    fn merge(&mut self, incoming: &Self);
}

impl Merge for Language {
    fn merge(&mut self, incoming: &Self) {
        if self.name != incoming.name {
            *self = incoming.clone();
        } else if incoming.color.is_some() {
            self.color = incoming.color.clone();
        }
    }
}

impl Merge for TreeEntry {
    fn merge(&mut self, incoming: &Self) {
        self.name = incoming.name.clone();
        self.kind = incoming.kind;
    }
}

impl Merge for Tree {
    fn merge(&mut self, incoming: &Self) {
        combine_positional(&mut self.entries, &incoming.entries);
    }
}

impl Merge for RepositoryNode {
    fn merge(&mut self, incoming: &Self) {
        self.name = incoming.name.clone();
        self.owner = incoming.owner.clone();
        if incoming.description.is_some() {
            self.description = incoming.description.clone();
        }
        if incoming.pushed_at.is_some() {
            self.pushed_at = incoming.pushed_at;
        }
        self.stargazer_count = incoming.stargazer_count;
        self.fork_count = incoming.fork_count;
        self.url = incoming.url.clone();
        combine_positional(&mut self.languages.nodes, &incoming.languages.nodes);

        match (&mut self.object, &incoming.object) {
            (Some(tree), Some(other)) => tree.merge(other),
            (None, Some(other)) => self.object = Some(other.clone()),
            (_, None) => {}
        }
    }
}

/// Combine two lists slot by slot: occupied slots are merged, missing slots are filled.
pub fn combine_positional<T: Merge + Clone>(target: &mut Vec<T>, source: &[T]) {
    for (index, item) in source.iter().enumerate() {
        match target.get_mut(index) {
            Some(existing) => existing.merge(item),
            None => target.push(item.clone()),
        }
    }
}

/// Merge pinned items with filtered repositories.
///
/// Entries are deduplicated on `owner/name`. The first occurrence keeps its slot and later
/// duplicates are merged into it, so the repository listing wins field conflicts over the
/// pinned copy. The result is ordered by `pushedAt`, most recent first.
pub fn merge_projects(pinned: Vec<RepositoryNode>, filtered: Vec<RepositoryNode>) -> Vec<RepositoryNode> {
    let mut merged: Vec<RepositoryNode> = Vec::with_capacity(pinned.len() + filtered.len());
    let mut positions: HashMap<RepoKey, usize> = HashMap::new();

    for repo in pinned.into_iter().chain(filtered) {
        match positions.entry(repo.key()) {
            Entry::Occupied(slot) => {
                debug!(repo = %slot.key(), "Merging duplicate repository");
                merged[*slot.get()].merge(&repo);
            }
            Entry::Vacant(slot) => {
                slot.insert(merged.len());
                merged.push(repo);
            }
        }
    }

    sort_by_recency(&mut merged);
    merged
}

/// Stable sort, newest push first; never-pushed repositories go last.
pub fn sort_by_recency(repos: &mut [RepositoryNode]) {
    repos.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
}
