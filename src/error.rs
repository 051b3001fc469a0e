use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Profile response contained no usable data for user {0}")]
    MissingProfile(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("{} could not be parsed: {}", .path.display(), .source)]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} file contained version \"{}\", which is not a valid version string", .path.display(), .version)]
    InvalidVersion { path: PathBuf, version: String },

    #[error("Prompt cancelled: {0}")]
    PromptCancelled(String),
}

impl From<dialoguer::Error> for ScriptError {
    fn from(e: dialoguer::Error) -> Self {
        ScriptError::PromptCancelled(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
