//! Descriptive analysis of a fetched paper listing.
//!
//! Each group (text, keywords, areas, correlation, overview) reads the
//! records independently; there is no shared state between groups.

pub mod areas;
pub mod correlation;
pub mod keywords;
pub mod overview;
pub mod stats;
pub mod text;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use areas::{AreaStats, group_by_area, normalize_area};
pub use correlation::{CorrelationAnalysis, HotWordReplies, Relation};
pub use keywords::{KeywordAnalysis, cooccurrence, keyword_frequency};
pub use overview::{Overview, SubmissionBin, submission_bins};
pub use text::{TextAnalysis, count_words};

use crate::charts;
use crate::config::output;
use crate::error::{AnalysisError, AnalysisResult, StoreError};
use crate::models::PaperRecord;
use crate::store;

/// Results of every analysis group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    /// Records analyzed.
    pub total_papers: usize,
    /// CSV rows dropped while loading.
    pub skipped_rows: usize,
    /// Title and abstract statistics.
    pub text: TextAnalysis,
    /// Keyword frequency and co-occurrence.
    pub keywords: KeywordAnalysis,
    /// Per-area counts, largest first.
    pub areas: Vec<AreaStats>,
    /// Reply-count relationships.
    pub correlation: CorrelationAnalysis,
    /// Listing-wide distributions.
    pub overview: Overview,
}

/// Runs the analysis groups over a read-only set of records.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    records: Vec<PaperRecord>,
    skipped: usize,
}

impl Analyzer {
    /// Analyze records already in memory.
    #[must_use]
    pub fn new(records: Vec<PaperRecord>) -> Self {
        Self { records, skipped: 0 }
    }

    /// Load the fetcher's CSV.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::MissingInput`] when the file does not exist,
    /// [`AnalysisError::EmptyInput`] when no row decodes.
    pub fn from_csv(path: &Path) -> AnalysisResult<Self> {
        if !path.is_file() {
            return Err(AnalysisError::MissingInput { path: path.to_path_buf() });
        }

        let load = store::read_csv(path)?;
        if load.records.is_empty() {
            return Err(AnalysisError::EmptyInput { path: path.to_path_buf() });
        }
        if load.skipped > 0 {
            tracing::warn!(skipped = load.skipped, "Some rows could not be read and were ignored");
        }
        tracing::info!(papers = load.records.len(), path = %path.display(), "Loaded papers");

        Ok(Self { records: load.records, skipped: load.skipped })
    }

    /// Loaded records, in file order.
    #[must_use]
    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    /// Compute every analysis group.
    #[must_use]
    pub fn analyze(&self) -> AnalysisReport {
        AnalysisReport {
            total_papers: self.records.len(),
            skipped_rows: self.skipped,
            text: TextAnalysis::compute(&self.records),
            keywords: KeywordAnalysis::compute(&self.records),
            areas: group_by_area(&self.records),
            correlation: CorrelationAnalysis::compute(&self.records),
            overview: Overview::compute(&self.records),
        }
    }

    /// Render every chart group into `images_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or a chart fails to render.
    pub fn render(report: &AnalysisReport, images_dir: &Path) -> AnalysisResult<Vec<PathBuf>> {
        std::fs::create_dir_all(images_dir).map_err(|e| StoreError::io(images_dir, e))?;

        let text = images_dir.join(output::TEXT_CHART);
        charts::render_text(&report.text, &text)?;
        tracing::info!(path = %text.display(), "Saved text analysis chart");

        let keywords = images_dir.join(output::KEYWORD_CHART);
        charts::render_keywords(&report.keywords, &keywords)?;
        tracing::info!(path = %keywords.display(), "Saved keyword analysis chart");

        let areas = images_dir.join(output::AREA_CHART);
        charts::render_areas(&report.areas, &areas)?;
        tracing::info!(path = %areas.display(), "Saved area analysis chart");

        let correlation = images_dir.join(output::CORRELATION_CHART);
        charts::render_correlation(&report.correlation, &correlation)?;
        tracing::info!(path = %correlation.display(), "Saved correlation analysis chart");

        let overview = images_dir.join(output::OVERVIEW_CHART);
        charts::render_overview(&report.overview, &report.keywords, &overview)?;
        tracing::info!(path = %overview.display(), "Saved overview chart");

        Ok(vec![text, keywords, areas, correlation, overview])
    }
}
