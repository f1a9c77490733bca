//! Download the ICLR 2026 accepted-paper listing as JSON and CSV.

use std::path::Path;
use std::time::Duration;

use clap::Parser;

use iclr_papers::config::{Config, output};
use iclr_papers::logging::init_tracing;
use iclr_papers::{Fetcher, OpenReviewClient};

#[derive(Parser, Debug)]
#[command(name = "iclr-fetch")]
#[command(about = "Fetch ICLR 2026 accepted papers from OpenReview")]
#[command(version)]
struct Cli {
    /// OpenReview API base URL (overrides `OPENREVIEW_API_URL`)
    #[arg(long)]
    api_url: Option<String>,

    /// Milliseconds to sleep before each page request (overrides `OPENREVIEW_PAGE_DELAY_MS`)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Retries per page on transient failures (0 aborts on the first failure)
    #[arg(long, default_value = "0")]
    max_retries: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.page_delay = Duration::from_millis(delay_ms);
    }
    config.max_retries = cli.max_retries;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        venue = %config.venue,
        url = %config.notes_url(),
        "Fetching accepted papers"
    );

    let client = OpenReviewClient::new(&config)?;
    let outcome = match Fetcher::new(client, config.page_size).fetch_all().await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Fetch failed, existing output left untouched");
            return Err(e.into());
        }
    };

    if outcome.skipped > 0 {
        tracing::warn!(skipped = outcome.skipped, "Some notes could not be decoded");
    }

    outcome.save(Path::new(output::JSON_PATH), Path::new(output::CSV_PATH))?;

    println!(
        "Fetched {} papers in {} pages -> {}, {}",
        outcome.records.len(),
        outcome.pages,
        output::JSON_PATH,
        output::CSV_PATH
    );
    Ok(())
}
