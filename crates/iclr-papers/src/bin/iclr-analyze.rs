//! Chart and summarize the fetched ICLR 2026 paper listing.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use iclr_papers::analysis::Analyzer;
use iclr_papers::config::output;
use iclr_papers::formatters::{format_report_json, format_report_markdown};
use iclr_papers::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "iclr-analyze")]
#[command(about = "Analyze the fetched ICLR 2026 paper listing and render charts")]
#[command(version)]
struct Cli {
    /// Print the summary as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let analyzer = match Analyzer::from_csv(Path::new(output::CSV_PATH)) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            tracing::error!(error = %e, "Cannot load paper listing");
            eprintln!("{}", e.to_user_message());
            return ExitCode::FAILURE;
        }
    };

    let report = analyzer.analyze();

    match Analyzer::render(&report, Path::new(output::IMAGES_DIR)) {
        Ok(charts) => tracing::info!(charts = charts.len(), dir = output::IMAGES_DIR, "Charts rendered"),
        Err(e) => {
            eprintln!("{}", e.to_user_message());
            return ExitCode::FAILURE;
        }
    }

    if cli.json {
        match format_report_json(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", format_report_markdown(&report));
    }

    ExitCode::SUCCESS
}
