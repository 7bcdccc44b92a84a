//! Terminal front end for the job board.
//!
//! Drives the feed exactly like the web page does: load the first page,
//! then keep "scrolling" by reporting the sentinel as visible.

mod cmd;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use job_feed::FeedConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobs")]
#[command(about = "Search and browse job listings")]
#[command(version)]
struct Cli {
    /// Results per page (overrides JOBS_PER_PAGE)
    #[arg(long, global = true)]
    per_page: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and scroll through listings
    List {
        /// Search term
        #[arg(short, long)]
        query: Option<String>,

        /// Number of pages to load
        #[arg(long, default_value_t = 1, conflicts_with = "all")]
        pages: u32,

        /// Keep loading until there are no more pages
        #[arg(short, long)]
        all: bool,
    },

    /// Print the shareable address for a search
    Link {
        /// Search term
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Load the first page of a shared address
    Open {
        /// Full URL or query string, e.g. "?q=drummer&perPage=24"
        address: String,
    },

    /// Show a single job by company and position slug
    Show { company: String, position: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_feed=info,xano_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // `link` never talks to the backend, so it does not need a base URL.
    if let Commands::Link { query } = &cli.command {
        cmd::link::run(query.as_deref(), cli.per_page);
        return Ok(());
    }

    let mut config = FeedConfig::from_env().context("Failed to load configuration")?;
    if let Some(per_page) = cli.per_page {
        config = config.with_per_page(per_page);
    }
    tracing::debug!(base_url = %config.base_url, per_page = config.per_page, "Configuration loaded");

    match cli.command {
        Commands::List { query, pages, all } => {
            let limit = (!all).then_some(pages.max(1));
            cmd::list::run(&config, query.as_deref(), limit).await
        }
        Commands::Open { address } => cmd::list::open(&config, &address).await,
        Commands::Show { company, position } => cmd::show::run(&config, &company, &position).await,
        Commands::Link { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pages_conflicts_with_all() {
        assert!(Cli::try_parse_from(["jobs", "list", "--all", "--pages", "3"]).is_err());

        let cli = Cli::try_parse_from(["jobs", "list", "-q", "drummer", "--per-page", "24"]).unwrap();
        assert_eq!(cli.per_page, Some(24));
        assert!(matches!(
            cli.command,
            Commands::List { query: Some(ref q), pages: 1, all: false } if q == "drummer"
        ));
    }
}
