//! JSON output formatting.

use serde_json::{Value, json};

use crate::analysis::AnalysisReport;

/// Round to three decimals for display.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compact summary of a report.
///
/// Per-paper vectors are left out; only aggregates are included.
#[must_use]
pub fn report_summary(report: &AnalysisReport) -> Value {
    let relation = |r: &crate::analysis::Relation| {
        json!({
            "pearson": r.pearson.map(round3),
            "slope": r.fit.map(|f| round3(f.slope)),
        })
    };

    json!({
        "papers": report.total_papers,
        "skippedRows": report.skipped_rows,
        "text": {
            "meanTitleWords": round3(report.text.title_length.mean),
            "meanAbstractWords": round3(report.text.abstract_length.mean),
            "lengthCorrelation": report.text.length_correlation.map(round3),
            "hotTopics": report.text.hot_topics,
        },
        "keywords": {
            "total": report.keywords.total_keywords,
            "distinct": report.keywords.distinct_keywords,
            "top": report.keywords.top_keywords,
            "pairs": report.keywords.top_pairs.iter()
                .map(|((a, b), c)| json!({"pair": [a, b], "count": c}))
                .collect::<Vec<_>>(),
        },
        "areas": report.areas.iter()
            .map(|a| json!({
                "area": a.area,
                "papers": a.count,
                "meanReplyCount": round3(a.mean_reply_count),
            }))
            .collect::<Vec<_>>(),
        "correlation": {
            "titleLength": relation(&report.correlation.title_vs_replies),
            "abstractLength": relation(&report.correlation.abstract_vs_replies),
            "submissionOrder": relation(&report.correlation.order_vs_replies),
            "hotWords": report.correlation.hot_words.iter()
                .map(|h| json!({
                    "word": h.word,
                    "papers": h.papers,
                    "meanReplyCount": round3(h.mean_reply_count),
                }))
                .collect::<Vec<_>>(),
        },
        "replies": {
            "mean": round3(report.overview.replies.mean),
            "median": report.overview.replies.median,
            "min": report.overview.replies.min,
            "max": report.overview.replies.max,
        },
        "submissionBins": report.overview.submission_bins.iter()
            .map(|b| json!({
                "start": round3(b.start),
                "end": round3(b.end),
                "papers": b.papers,
                "meanReplyCount": b.mean_reply_count.map(round3),
            }))
            .collect::<Vec<_>>(),
    })
}

/// Pretty-printed summary.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_report_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report_summary(report))
}
