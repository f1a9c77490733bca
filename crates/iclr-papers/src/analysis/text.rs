//! Title and abstract text analysis.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::stats::{Distribution, pearson};
use crate::models::PaperRecord;

/// Topics counted in titles for the prevalence chart.
pub const HOT_TOPICS: &[&str] = &[
    "LLM",
    "Transformer",
    "Diffusion",
    "Reinforcement",
    "Graph",
    "Vision",
    "Multimodal",
    "Generative",
    "Attention",
    "Contrastive",
    "Self-supervised",
    "Pre-train",
    "Fine-tun",
    "Prompt",
    "Agent",
    "Reasoning",
    "Alignment",
    "RLHF",
    "RAG",
    "Embedding",
];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex pattern"));

/// Number of words after replacing punctuation with spaces.
#[must_use]
pub fn count_words(text: &str) -> usize {
    PUNCTUATION.replace_all(text, " ").split_whitespace().count()
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_term(haystack_lower: &str, term: &str) -> bool {
    haystack_lower.contains(&term.to_lowercase())
}

/// Number of titles containing each term, in vocabulary order.
///
/// A title counts at most once per term.
#[must_use]
pub fn term_counts<'a>(titles: &[String], vocabulary: &[&'a str]) -> Vec<(&'a str, usize)> {
    let lowered: Vec<String> = titles.iter().map(|t| t.to_lowercase()).collect();
    vocabulary
        .iter()
        .map(|&term| (term, lowered.iter().filter(|t| contains_term(t, term)).count()))
        .collect()
}

/// Text analysis results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextAnalysis {
    /// Title word count per record.
    #[serde(skip)]
    pub title_words: Vec<usize>,

    /// Abstract word count per record.
    #[serde(skip)]
    pub abstract_words: Vec<usize>,

    /// Title word count summary.
    pub title_length: Distribution,
    /// Abstract word count summary.
    pub abstract_length: Distribution,

    /// Hot topics with at least one matching title, most frequent first.
    pub hot_topics: Vec<(String, usize)>,

    /// Pearson correlation between title and abstract length.
    pub length_correlation: Option<f64>,
}

impl TextAnalysis {
    /// Analyze titles and abstracts.
    #[must_use]
    pub fn compute(records: &[PaperRecord]) -> Self {
        let title_words: Vec<usize> = records.iter().map(|r| count_words(&r.title)).collect();
        let abstract_words: Vec<usize> =
            records.iter().map(|r| count_words(&r.r#abstract)).collect();

        let titles: Vec<String> = records.iter().map(|r| r.title.clone()).collect();
        let mut hot_topics: Vec<(String, usize)> = term_counts(&titles, HOT_TOPICS)
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(term, count)| (term.to_string(), count))
            .collect();
        // stable sort keeps vocabulary order among ties
        hot_topics.sort_by(|a, b| b.1.cmp(&a.1));

        let points: Vec<(f64, f64)> = title_words
            .iter()
            .zip(&abstract_words)
            .map(|(&t, &a)| (t as f64, a as f64))
            .collect();

        Self {
            title_length: Distribution::of(&as_f64(&title_words)),
            abstract_length: Distribution::of(&as_f64(&abstract_words)),
            length_correlation: pearson(&points),
            hot_topics,
            title_words,
            abstract_words,
        }
    }

    /// `(title_words, abstract_words)` pairs for the scatter plot.
    #[must_use]
    pub fn length_points(&self) -> Vec<(f64, f64)> {
        self.title_words.iter().zip(&self.abstract_words).map(|(&t, &a)| (t as f64, a as f64)).collect()
    }
}

pub(crate) fn as_f64(values: &[usize]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> PaperRecord {
        PaperRecord { title: title.to_string(), ..Default::default() }
    }

    #[test]
    fn test_count_words_strips_punctuation() {
        assert_eq!(count_words("Hello, world!"), 2);
        assert_eq!(count_words("Self-Supervised Learning: A Survey"), 5);
        assert_eq!(count_words("  "), 0);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("...!?"), 0);
    }

    #[test]
    fn test_hot_topic_counted_once_per_title_any_case() {
        let records = vec![
            titled("Diffusion Model for diffusion-based DIFFUSION"),
            titled("DIFFUSION Model"),
            titled("diffusion model"),
            titled("Unrelated"),
        ];
        let analysis = TextAnalysis::compute(&records);
        let diffusion = analysis.hot_topics.iter().find(|(t, _)| t == "Diffusion").unwrap();
        assert_eq!(diffusion.1, 3);
    }

    #[test]
    fn test_zero_count_topics_omitted() {
        let analysis = TextAnalysis::compute(&[titled("Nothing relevant here")]);
        assert!(analysis.hot_topics.is_empty());
    }

    #[test]
    fn test_hot_topics_sorted_descending() {
        let records = vec![titled("LLM agent"), titled("LLM reasoning"), titled("Agent LLM graph")];
        let analysis = TextAnalysis::compute(&records);
        assert_eq!(analysis.hot_topics[0], ("LLM".to_string(), 3));
        assert_eq!(analysis.hot_topics[1], ("Agent".to_string(), 2));
    }

    #[test]
    fn test_lengths_are_per_record() {
        let records = vec![
            PaperRecord { title: "A B".into(), r#abstract: "one two three".into(), ..Default::default() },
            PaperRecord { title: "A B C".into(), r#abstract: "one".into(), ..Default::default() },
        ];
        let analysis = TextAnalysis::compute(&records);
        assert_eq!(analysis.title_words, vec![2, 3]);
        assert_eq!(analysis.abstract_words, vec![3, 1]);
        assert!((analysis.title_length.mean - 2.5).abs() < 1e-9);
        assert!((analysis.length_correlation.unwrap() + 1.0).abs() < 1e-9);
    }
}
