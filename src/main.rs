use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use colored::*;
use profile_scripts::bump::{self, BumpOptions, DialoguerPrompter};
use profile_scripts::cli::{Cli, Commands};
use profile_scripts::github::GitHubClient;
use profile_scripts::projects::{build_summary, write_summary};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::FetchProjects { token, login, endpoint, output } => {
            println!("{}", format!("Fetching projects for {}", login).bold().green());

            let client = GitHubClient::new(token, endpoint)?;
            let profile = client
                .fetch_profile(&login).await
                .with_context(|| format!("Failed to fetch profile for {}", login))?;

            let summary = build_summary(&profile, Utc::now());

            println!("writing project file");
            write_summary(&output, &summary).await
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!(
                "✅ {} projects, {} stars, {} forks ({} public repositories)",
                summary.projects.len(),
                summary.total_stars,
                summary.total_forks,
                summary.total_count
            );
        }
        Commands::Bump { dirs, cwd } => {
            let cwd = match cwd {
                Some(cwd) => cwd,
                None => std::env::current_dir().context("Failed to resolve current directory")?,
            };
            let options = BumpOptions { cwd, dirs };

            // dialoguer blocks on the terminal
            let report = tokio::task::spawn_blocking(move || {
                let mut prompter = DialoguerPrompter;
                bump::run(&options, &mut prompter)
            }).await??;

            for (path, version) in &report.updated {
                println!("{} {} -> {}", "✓".green(), path.display(), version.to_string().bold());
            }
            println!(
                "{}",
                format!(
                    "Updated {} of {} manifests ({} without a version)",
                    report.updated.len(),
                    report.discovered,
                    report.skipped.len()
                ).dimmed()
            );
        }
    }

    Ok(())
}
