use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

use crate::github::GRAPHQL_URL;
use crate::projects::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(name = "profile-scripts")]
#[command(about = "Profile automation - aggregates featured GitHub projects and bumps manifest versions")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch pinned and marked repositories and write the projects file
    FetchProjects {
        /// GitHub token used as bearer credentials
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// GitHub login whose profile is aggregated
        #[arg(long, env = "GITHUB_LOGIN", default_value = "luxass")]
        login: String,

        /// GraphQL endpoint
        #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = GRAPHQL_URL)]
        endpoint: Url,

        /// Output file, replaced on every run
        #[arg(long, env = "PROJECTS_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Interactively bump the version of every manifest found in the given directories
    Bump {
        /// Directories to search for .json, .jsonc and .json5 manifests
        #[arg(required = true)]
        dirs: Vec<PathBuf>,

        /// Directory the search paths are resolved against
        #[arg(long)]
        cwd: Option<PathBuf>,
    },
}
