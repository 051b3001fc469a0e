pub mod bump;
pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod projects;
pub mod types;
