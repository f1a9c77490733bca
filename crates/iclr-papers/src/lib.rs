//! ICLR 2026 Paper Toolkit
//!
//! Fetches the accepted-paper listing for ICLR 2026 from the OpenReview API,
//! persists it as JSON and CSV, and renders descriptive statistics as PNG charts.
//!
//! # Features
//!
//! - **Paginated fetch**: sequential offset/limit paging until the listing is exhausted
//! - **Tolerant decoding**: malformed notes and CSV rows are skipped with a warning
//! - **Four analysis groups**: text, keywords, areas, correlation (plus an overview)
//! - **Headless charts**: bitmap PNG output via `plotters`
//!
//! # Example
//!
//! ```no_run
//! use iclr_papers::{client::OpenReviewClient, config::Config, fetcher::Fetcher};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenReviewClient::new(&config)?;
//!     let outcome = Fetcher::new(client, config.page_size).fetch_all().await?;
//!     println!("{} papers", outcome.records.len());
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod charts;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod logging;
pub mod models;
pub mod store;

pub use client::OpenReviewClient;
pub use config::Config;
pub use error::{AnalysisError, ClientError, FetchError, StoreError};
pub use fetcher::{FetchOutcome, Fetcher};
pub use models::PaperRecord;
