//! Relationships between paper attributes and reply activity.

use serde::Serialize;

use super::stats::{LinearFit, mean, pearson};
use super::text::{contains_term, count_words};
use crate::models::PaperRecord;

/// Words whose presence in a title is compared against reply activity.
pub const HOT_WORDS: &[&str] = &[
    "LLM",
    "Learning",
    "Diffusion",
    "Reinforcement",
    "Multimodal",
    "Vision",
    "video",
    "Agent",
    "Generation",
    "reasoning",
];

/// A scatter relationship with its fit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Relation {
    /// `(x, reply_count)` per record.
    #[serde(skip)]
    pub points: Vec<(f64, f64)>,
    /// Pearson coefficient, `None` when undefined.
    pub pearson: Option<f64>,
    /// Least-squares line, `None` when x is constant.
    pub fit: Option<LinearFit>,
}

impl Relation {
    /// Correlate and fit the points.
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { pearson: pearson(&points), fit: LinearFit::fit(&points), points }
    }
}

/// Mean replies for titles containing a hot word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotWordReplies {
    /// Vocabulary word.
    pub word: String,
    /// Titles containing it.
    pub papers: usize,
    /// Mean reply count of those titles.
    pub mean_reply_count: f64,
}

/// Correlation analysis results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrelationAnalysis {
    /// Title word count against replies.
    pub title_vs_replies: Relation,
    /// Abstract word count against replies.
    pub abstract_vs_replies: Relation,
    /// Submission index against replies.
    pub order_vs_replies: Relation,
    /// Hot words with at least one matching title, highest mean first.
    pub hot_words: Vec<HotWordReplies>,
}

impl CorrelationAnalysis {
    #[must_use]
    pub fn compute(records: &[PaperRecord]) -> Self {
        let replies = |r: &PaperRecord| f64::from(r.reply_count);

        let title_vs_replies = Relation::new(
            records.iter().map(|r| (count_words(&r.title) as f64, replies(r))).collect(),
        );
        let abstract_vs_replies = Relation::new(
            records.iter().map(|r| (count_words(&r.r#abstract) as f64, replies(r))).collect(),
        );
        let order_vs_replies = Relation::new(
            records.iter().map(|r| (r.submission_index as f64, replies(r))).collect(),
        );

        Self {
            title_vs_replies,
            abstract_vs_replies,
            order_vs_replies,
            hot_words: hot_word_replies(records, HOT_WORDS),
        }
    }
}

/// Mean reply count of titles containing each word (case-insensitive).
#[must_use]
pub fn hot_word_replies(records: &[PaperRecord], words: &[&str]) -> Vec<HotWordReplies> {
    let titles: Vec<String> = records.iter().map(|r| r.title.to_lowercase()).collect();

    let mut result: Vec<HotWordReplies> = words
        .iter()
        .filter_map(|&word| {
            let matched: Vec<f64> = records
                .iter()
                .zip(&titles)
                .filter(|(_, title)| contains_term(title, word))
                .map(|(r, _)| f64::from(r.reply_count))
                .collect();

            mean(&matched).map(|m| HotWordReplies {
                word: word.to_string(),
                papers: matched.len(),
                mean_reply_count: m,
            })
        })
        .collect();

    result.sort_by(|a, b| b.mean_reply_count.total_cmp(&a.mean_reply_count));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, replies: u32, index: usize) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            reply_count: replies,
            submission_index: index,
            ..Default::default()
        }
    }

    #[test]
    fn test_hot_word_means() {
        let records = vec![
            paper("LLM agents", 10, 0),
            paper("llm safety", 20, 1),
            paper("Video generation", 4, 2),
        ];
        let hot = hot_word_replies(&records, HOT_WORDS);

        let llm = hot.iter().find(|h| h.word == "LLM").unwrap();
        assert_eq!(llm.papers, 2);
        assert!((llm.mean_reply_count - 15.0).abs() < 1e-9);

        assert!(hot.iter().all(|h| h.word != "Diffusion"));
        assert!(hot.windows(2).all(|w| w[0].mean_reply_count >= w[1].mean_reply_count));
    }

    #[test]
    fn test_order_relation() {
        let records = vec![paper("a", 1, 0), paper("b", 2, 1), paper("c", 3, 2)];
        let analysis = CorrelationAnalysis::compute(&records);
        assert!((analysis.order_vs_replies.pearson.unwrap() - 1.0).abs() < 1e-9);
        let fit = analysis.order_vs_replies.fit.unwrap();
        assert!((fit.slope - 1.0).abs() < 1e-9);
        // all titles have one word, so the title relation is undefined
        assert!(analysis.title_vs_replies.pearson.is_none());
    }
}
