//! Paginated retrieval of the accepted-paper listing.
//!
//! Pages are requested one at a time. The walk stops on an empty page, a
//! short page, or once the offset reaches the server-reported total.

use std::path::Path;

use crate::client::OpenReviewClient;
use crate::error::FetchError;
use crate::models::{Note, PaperRecord};
use crate::store;

/// Result of a complete fetch run.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Records in fetch order.
    pub records: Vec<PaperRecord>,

    /// Pages requested, including the terminating empty page if any.
    pub pages: usize,

    /// Notes dropped because they could not be decoded.
    pub skipped: usize,

    /// Total reported by the server on the first page.
    pub reported_total: Option<u64>,
}

impl FetchOutcome {
    /// Write the records as JSON and CSV, overwriting both files.
    ///
    /// # Errors
    ///
    /// Returns error if either file cannot be written.
    pub fn save(&self, json_path: &Path, csv_path: &Path) -> Result<(), FetchError> {
        store::write_json(json_path, &self.records)?;
        store::write_csv(csv_path, &self.records)?;
        tracing::info!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            papers = self.records.len(),
            "Saved paper listing"
        );
        Ok(())
    }
}

/// Walks the notes listing page by page.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: OpenReviewClient,
    page_size: u32,
}

impl Fetcher {
    /// Create a fetcher. A zero page size is bumped to one.
    #[must_use]
    pub fn new(client: OpenReviewClient, page_size: u32) -> Self {
        Self { client, page_size: page_size.max(1) }
    }

    /// Fetch every accepted paper for the client's venue.
    ///
    /// # Errors
    ///
    /// Aborts on the first failed page request; returns [`FetchError::NoRecords`]
    /// when the listing yields no usable records.
    pub async fn fetch_all(&self) -> Result<FetchOutcome, FetchError> {
        let mut outcome = FetchOutcome::default();
        let mut offset: u64 = 0;

        loop {
            let page = self
                .client
                .fetch_page(offset, self.page_size)
                .await
                .map_err(|source| FetchError::Page { offset, source })?;
            outcome.pages += 1;

            if outcome.pages == 1 {
                outcome.reported_total = page.count;
                if let Some(total) = page.count {
                    let pages = total.div_ceil(u64::from(self.page_size));
                    tracing::info!(total, pages, page_size = self.page_size, "Listing size");
                }
            }

            let raw_len = page.len();
            if raw_len == 0 {
                break;
            }

            for value in page.notes {
                match Note::from_value(value) {
                    Ok(note) => {
                        let index = outcome.records.len();
                        outcome.records.push(PaperRecord::from_note(note, index));
                    }
                    Err(e) => {
                        outcome.skipped += 1;
                        tracing::warn!(offset, error = %e, "Skipping malformed note");
                    }
                }
            }

            tracing::info!(
                page = outcome.pages,
                fetched = outcome.records.len(),
                total = ?outcome.reported_total,
                "Fetched page"
            );

            offset += raw_len as u64;
            if raw_len < self.page_size as usize {
                break;
            }
            if outcome.reported_total.is_some_and(|total| offset >= total) {
                break;
            }
        }

        if outcome.records.is_empty() {
            return Err(FetchError::NoRecords { venue: self.client.venue().to_string() });
        }

        tracing::info!(
            pages = outcome.pages,
            papers = outcome.records.len(),
            skipped = outcome.skipped,
            total = ?outcome.reported_total,
            "Fetch complete"
        );

        Ok(outcome)
    }
}
