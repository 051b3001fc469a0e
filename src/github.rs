use crate::error::{Result, ScriptError};
use crate::types::{GraphQlResponse, Profile, ProfileData};
use reqwest::{Client, Response};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const PINNED_LIMIT: u32 = 6;
pub const REPOSITORY_LIMIT: u32 = 100;

const PROFILE_QUERY: &str = r#"query Profile($name: String!, $pinned: Int!, $repos: Int!) {
  user(login: $name) {
    pinnedItems(first: $pinned) {
      edges {
        node {
          ... on Repository {
            ...ProjectFields
          }
        }
      }
    }
    repositories(first: $repos, orderBy: { direction: ASC, field: PUSHED_AT }, privacy: PUBLIC) {
      totalCount
      nodes {
        ...ProjectFields
      }
    }
  }
}

fragment ProjectFields on Repository {
  name
  owner {
    login
  }
  description
  pushedAt
  stargazerCount
  forkCount
  url
  languages(first: 1, orderBy: { field: SIZE, direction: DESC }) {
    nodes {
      color
      name
    }
  }
  object(expression: "HEAD:.github") {
    ... on Tree {
      entries {
        name
        type
      }
    }
  }
}
"#;

pub struct GitHubClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String, endpoint: Url) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(ScriptError::AuthError("GitHub token is empty".to_string()));
        }

        let client = Client::builder()
            .user_agent("profile-scripts/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token, endpoint })
    }

    async fn post_query(&self, body: serde_json::Value) -> Result<Response> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Authorization", format!("bearer {}", self.token))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::UNAUTHORIZED => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ScriptError::AuthError(format!("Bad credentials: {}", error_text)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(ScriptError::ApiError(
                    format!("GraphQL request failed with status {}: {}", status, error_text)
                ))
            }
        }
    }

    /// Fetch pinned items and the first page of public repositories for `login`.
    pub async fn fetch_profile(&self, login: &str) -> Result<Profile> {
        info!(login, endpoint = %self.endpoint, "Fetching profile");

        let body = json!({
            "query": PROFILE_QUERY,
            "variables": {
                "name": login,
                "pinned": PINNED_LIMIT,
                "repos": REPOSITORY_LIMIT,
            }
        });

        let response = self.post_query(body).await?;
        let envelope: GraphQlResponse<ProfileData> = response.json().await?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(ScriptError::ApiError(messages.join("; ")));
        }

        let profile = envelope
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| ScriptError::MissingProfile(login.to_string()))?;

        debug!(
            pinned = profile.pinned_items.edges.len(),
            repositories = profile.repositories.nodes.len(),
            total_count = profile.repositories.total_count,
            "Profile received"
        );

        Ok(profile)
    }
}
