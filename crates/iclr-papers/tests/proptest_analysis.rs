//! Property-based tests for record persistence and the analysis groups.

use proptest::prelude::*;

use iclr_papers::analysis::{
    KeywordAnalysis, count_words, group_by_area, keyword_frequency, normalize_area,
};
use iclr_papers::models::{PaperRecord, PaperRow};

/// Generate arbitrary records with keyword-safe tokens.
fn arb_record() -> impl Strategy<Value = PaperRecord> {
    (
        "[A-Za-z0-9 ,.:!?-]{0,80}",                             // title
        proptest::collection::vec("[a-z][a-z ;,\"\\[\\]]{0,15}[a-z]", 0..6), // keywords
        "[a-z ,()]{0,40}",                                     // primary_area
        0u32..200,                                             // reply_count
        proptest::option::of(1i64..20_000),                    // number
    )
        .prop_map(|(title, keywords, primary_area, reply_count, number)| PaperRecord {
            title,
            keywords,
            primary_area,
            reply_count,
            number,
            ..Default::default()
        })
}

proptest! {
    /// Punctuation never adds words.
    #[test]
    fn count_words_ignores_punctuation(words in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
        let plain = words.join(" ");
        let noisy = words.join(", ");
        prop_assert_eq!(count_words(&plain), words.len());
        prop_assert_eq!(count_words(&noisy), words.len());
    }

    /// Area groups partition the listing.
    #[test]
    fn area_counts_sum_to_total(records in proptest::collection::vec(arb_record(), 0..40)) {
        let areas = group_by_area(&records);
        let total: usize = areas.iter().map(|a| a.count).sum();
        prop_assert_eq!(total, records.len());

        for window in areas.windows(2) {
            prop_assert!(window[0].count >= window[1].count);
        }
    }

    /// Normalized areas never carry a comma or parenthetical, and are never empty.
    #[test]
    fn normalized_area_is_clean(area in "[a-z ,]{0,30}( \\([a-z ,]{0,10}\\))?") {
        let normalized = normalize_area(&area);
        prop_assert!(!normalized.is_empty());
        prop_assert!(!normalized.contains(','));
        prop_assert!(!normalized.contains('('));
    }

    /// Keyword totals match frequency and stay ordered.
    #[test]
    fn keyword_totals_are_consistent(records in proptest::collection::vec(arb_record(), 0..30)) {
        let analysis = KeywordAnalysis::compute(&records);
        let frequency = keyword_frequency(&records);

        prop_assert_eq!(analysis.total_keywords, frequency.iter().map(|(_, c)| c).sum::<usize>());
        prop_assert_eq!(analysis.distinct_keywords, frequency.len());
        prop_assert!(analysis.top_keywords.len() <= 20);
        prop_assert!(analysis.top_pairs.len() <= 15);
        for ((a, b), _) in &analysis.top_pairs {
            prop_assert!(a < b);
        }
    }

    /// A flattened keyword cell reads back as the same keywords, separators included.
    #[test]
    fn keyword_cell_roundtrip(record in arb_record()) {
        let row = PaperRow::from(&record);
        let restored = PaperRecord::from(row);
        prop_assert_eq!(restored.keywords, record.keywords);
        prop_assert_eq!(restored.title, record.title);
    }
}
