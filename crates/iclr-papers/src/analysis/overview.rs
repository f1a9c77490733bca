//! Listing-wide overview: raw area labels, reply and submission-number distributions.

use serde::Serialize;

use super::stats::{Distribution, Histogram, mean, ranked_counts};
use crate::models::PaperRecord;

/// Equal-width submission-number ranges in the submission-order breakdown.
pub const SUBMISSION_BINS: usize = 10;

/// Papers and reply activity within one submission-number range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionBin {
    /// Lower edge of the range.
    pub start: f64,
    /// Upper edge of the range.
    pub end: f64,
    /// Papers whose number falls in the range.
    pub papers: usize,
    /// Mean reply count of those papers, `None` for an empty range.
    pub mean_reply_count: Option<f64>,
}

/// Overview results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overview {
    /// Raw `primary_area` labels (non-empty), most frequent first.
    pub area_counts: Vec<(String, usize)>,

    /// Reply count per record.
    #[serde(skip)]
    pub reply_counts: Vec<f64>,
    /// Reply count summary.
    pub replies: Distribution,

    /// Submission numbers of records that carry one.
    #[serde(skip)]
    pub numbers: Vec<f64>,
    /// Submission number summary.
    pub submission_numbers: Distribution,

    /// Submission order split into [`SUBMISSION_BINS`] ranges, earliest first.
    /// Empty when no record carries a number.
    pub submission_bins: Vec<SubmissionBin>,
}

impl Overview {
    #[must_use]
    pub fn compute(records: &[PaperRecord]) -> Self {
        let area_counts = ranked_counts(
            records
                .iter()
                .map(|r| r.primary_area.trim())
                .filter(|a| !a.is_empty())
                .map(String::from),
        );

        let reply_counts: Vec<f64> = records.iter().map(|r| f64::from(r.reply_count)).collect();
        let numbers: Vec<f64> = records.iter().filter_map(|r| r.number).map(|n| n as f64).collect();

        Self {
            area_counts,
            replies: Distribution::of(&reply_counts),
            submission_numbers: Distribution::of(&numbers),
            submission_bins: submission_bins(records, SUBMISSION_BINS),
            reply_counts,
            numbers,
        }
    }
}

/// Split records with a submission number into `bins` equal-width ranges.
#[must_use]
pub fn submission_bins(records: &[PaperRecord], bins: usize) -> Vec<SubmissionBin> {
    let numbered: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| r.number.map(|n| (n as f64, f64::from(r.reply_count))))
        .collect();
    if numbered.is_empty() {
        return Vec::new();
    }

    let numbers: Vec<f64> = numbered.iter().map(|(n, _)| *n).collect();
    let histogram = Histogram::new(&numbers, bins);

    let mut replies: Vec<Vec<f64>> = vec![Vec::new(); histogram.counts.len()];
    for (number, reply_count) in numbered {
        replies[histogram.bin_of(number)].push(reply_count);
    }

    histogram
        .buckets()
        .zip(replies)
        .map(|((start, end, papers), replies)| SubmissionBin {
            start,
            end,
            papers,
            mean_reply_count: mean(&replies),
        })
        .collect()
}
