//! Keyword frequency and co-occurrence.

use std::collections::BTreeSet;

use serde::Serialize;

use super::stats::ranked_counts;
use crate::models::PaperRecord;

/// Keywords shown in the frequency chart.
pub const TOP_KEYWORDS: usize = 20;

/// Pairs shown in the co-occurrence chart.
pub const TOP_PAIRS: usize = 15;

/// Lowercased, trimmed keywords of a record, dropping tokens of two characters or fewer.
#[must_use]
pub fn normalized_keywords(record: &PaperRecord) -> Vec<String> {
    record
        .keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| k.chars().count() > 2)
        .collect()
}

/// Frequency of every keyword across all records, most frequent first.
#[must_use]
pub fn keyword_frequency(records: &[PaperRecord]) -> Vec<(String, usize)> {
    ranked_counts(records.iter().flat_map(normalized_keywords))
}

/// Co-occurrence counts over unordered pairs of distinct keywords within one record.
///
/// Pairs are stored with the lexicographically smaller keyword first.
#[must_use]
pub fn cooccurrence(records: &[PaperRecord]) -> Vec<((String, String), usize)> {
    let pairs = records.iter().flat_map(|record| {
        let unique: Vec<String> =
            normalized_keywords(record).into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        let mut pairs = Vec::new();
        for (i, a) in unique.iter().enumerate() {
            for b in &unique[i + 1..] {
                pairs.push((a.clone(), b.clone()));
            }
        }
        pairs
    });

    ranked_counts(pairs)
}

/// Keyword analysis results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordAnalysis {
    /// Keyword occurrences across all records.
    pub total_keywords: usize,

    /// Distinct keywords.
    pub distinct_keywords: usize,

    /// Most frequent keywords.
    pub top_keywords: Vec<(String, usize)>,

    /// Most frequent pairs.
    pub top_pairs: Vec<((String, String), usize)>,
}

impl KeywordAnalysis {
    #[must_use]
    pub fn compute(records: &[PaperRecord]) -> Self {
        let frequency = keyword_frequency(records);
        let mut pairs = cooccurrence(records);
        pairs.truncate(TOP_PAIRS);

        Self {
            total_keywords: frequency.iter().map(|(_, c)| c).sum(),
            distinct_keywords: frequency.len(),
            top_keywords: frequency.into_iter().take(TOP_KEYWORDS).collect(),
            top_pairs: pairs,
        }
    }
}
