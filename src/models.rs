use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{Language, RepositoryNode};

pub const DEFAULT_DESCRIPTION: &str = "No description was set";

static SHORTCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\w+):").expect("valid shortcode pattern"));

/// Summary artifact written to disk after every run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub last_updated: String,
    pub total_count: u32,
    pub total_stars: u64,
    pub total_forks: u64,
    pub projects: Vec<Project>,
}

/// Public shape of a single project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub url: String,
    pub pushed_at: Option<DateTime<Utc>>,
    pub stars: u32,
    pub forks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Project {
    pub fn from_node(node: &RepositoryNode) -> Self {
        let description = match node.description.as_deref() {
            Some(text) if !text.is_empty() => expand_emojis(text),
            _ => DEFAULT_DESCRIPTION.to_string(),
        };

        Project {
            name: node.name.clone(),
            owner: node.owner.login.clone(),
            description,
            url: node.url.clone(),
            pushed_at: node.pushed_at,
            stars: node.stargazer_count,
            forks: node.fork_count,
            language: node.primary_language().cloned(),
        }
    }
}

/// Replace `:shortcode:` sequences with their emoji; unknown codes are kept as written.
pub fn expand_emojis(text: &str) -> String {
    SHORTCODE
        .replace_all(text, |caps: &regex::Captures| {
            match emojis::get_by_shortcode(&caps[1]) {
                Some(emoji) => emoji.as_str().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
