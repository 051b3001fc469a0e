#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use url::Url;

/// A request seen by the mock endpoint
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockState {
    status: StatusCode,
    body: Value,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local stand-in for the GitHub GraphQL endpoint
pub struct MockGraphQl {
    pub url: Url,
    state: Arc<MockState>,
}

impl MockGraphQl {
    pub async fn start(status: StatusCode, body: Value) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/graphql", post(handle_query))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let url = Url::parse(&format!("http://{}/graphql", addr))?;
        Ok(MockGraphQl { url, state })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle_query(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest { authorization, body });

    (state.status, Json(state.body.clone()))
}

pub fn repo_json(
    owner: &str,
    name: &str,
    pushed_at: &str,
    stars: u32,
    forks: u32,
    github_entries: Option<&[&str]>,
) -> Value {
    let object = match github_entries {
        Some(names) => json!({
            "entries": names.iter().map(|n| json!({ "name": n, "type": "blob" })).collect::<Vec<_>>()
        }),
        None => Value::Null,
    };

    json!({
        "name": name,
        "owner": { "login": owner },
        "description": null,
        "pushedAt": pushed_at,
        "stargazerCount": stars,
        "forkCount": forks,
        "url": format!("https://github.com/{}/{}", owner, name),
        "languages": { "nodes": [{ "name": "Rust", "color": "#dea584" }] },
        "object": object
    })
}

/// A realistic profile response: one pinned gist, two pinned repositories, four listed repositories.
pub fn profile_response() -> Value {
    json!({
        "data": {
            "user": {
                "pinnedItems": {
                    "edges": [
                        { "node": {} },
                        { "node": repo_json("octo", "pinned-only", "2023-02-01T10:00:00Z", 4, 1, None) },
                        { "node": repo_json("octo", "shared", "2024-01-01T00:00:00Z", 10, 2, Some(&[".luxass"][..])) }
                    ]
                },
                "repositories": {
                    "totalCount": 57,
                    "nodes": [
                        repo_json("octo", "unmarked", "2022-01-01T00:00:00Z", 100, 50, Some(&["workflows"][..])),
                        repo_json("octo", "no-github-folder", "2022-03-01T00:00:00Z", 1, 0, None),
                        repo_json("octo", "shared", "2024-01-01T00:00:00Z", 10, 2, Some(&[".luxass"][..])),
                        repo_json("octo", "marked", "2024-05-05T00:00:00Z", 3, 0, Some(&["FUNDING.yml", ".luxass-include"][..]))
                    ]
                }
            }
        }
    })
}
