use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;

use mff_roster_scraper::{
    assembler::RosterAssembler,
    config::ScraperConfig,
    fetcher::WebHtmlFetcher,
    metrics::MetricsCollector,
    web::{self, AppState},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the player API
    Serve {
        /// Port to listen on, overriding SERVER_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Scrape the full roster once and print it as JSON
    Scrape {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Scrape a single player page and print its details as JSON
    Details {
        /// Player page URL, absolute or relative to the listing page
        #[arg(short, long)]
        url: String,
    },
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ScraperConfig::from_env();

    let metrics = MetricsCollector::new();
    let fetcher = WebHtmlFetcher::new(&config.scraping, metrics.clone())?;
    let assembler = RosterAssembler::new(fetcher, &config.scraping);

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::new(assembler, metrics);
            web::serve(state, &config.server.address()).await?;
        }
        Commands::Scrape { pretty } => {
            let players = assembler
                .build_roster()
                .await
                .context("Roster scrape failed")?;
            println!("{}", to_json(&players, pretty)?);
            let stats = metrics.get_metrics();
            info!(
                "Done: {} requests, {} failed",
                stats.total_requests, stats.failed_requests
            );
        }
        Commands::Details { url } => {
            let details = assembler
                .player_details(&url)
                .await
                .with_context(|| format!("Failed to scrape {}", url))?;
            println!("{}", to_json(&details, true)?);
        }
    }

    Ok(())
}
