//! Markdown output formatting.

use crate::analysis::{AnalysisReport, Relation};

fn correlation_text(relation: &Relation) -> String {
    relation.pearson.map_or_else(|| "n/a".to_string(), |r| format!("{r:.3}"))
}

/// Format an analysis report as Markdown.
#[must_use]
pub fn format_report_markdown(report: &AnalysisReport) -> String {
    if report.total_papers == 0 {
        return "No papers to analyze.".to_string();
    }

    let mut output = format!("# ICLR 2026 Paper Analysis ({} papers)\n\n", report.total_papers);
    if report.skipped_rows > 0 {
        output.push_str(&format!("*{} malformed rows were skipped.*\n\n", report.skipped_rows));
    }

    // Text
    let text = &report.text;
    output.push_str("## Text\n\n");
    output.push_str(&format!(
        "- **Title length**: mean {:.1} words, median {:.0}\n",
        text.title_length.mean, text.title_length.median
    ));
    output.push_str(&format!(
        "- **Abstract length**: mean {:.0} words, median {:.0}\n",
        text.abstract_length.mean, text.abstract_length.median
    ));
    if let Some(r) = text.length_correlation {
        output.push_str(&format!("- **Title vs abstract length**: r = {r:.3}\n"));
    }
    if !text.hot_topics.is_empty() {
        output.push_str("\n| Hot topic | Papers |\n|---|---|\n");
        for (topic, count) in &text.hot_topics {
            output.push_str(&format!("| {topic} | {count} |\n"));
        }
    }
    output.push('\n');

    // Keywords
    let keywords = &report.keywords;
    output.push_str("## Keywords\n\n");
    output.push_str(&format!(
        "{} keyword occurrences, {} distinct.\n\n",
        keywords.total_keywords, keywords.distinct_keywords
    ));
    for (i, (keyword, count)) in keywords.top_keywords.iter().enumerate() {
        output.push_str(&format!("{}. {keyword} ({count})\n", i + 1));
    }
    if !keywords.top_pairs.is_empty() {
        output.push_str("\n**Top co-occurring pairs**\n\n");
        for ((a, b), count) in &keywords.top_pairs {
            output.push_str(&format!("- {a} & {b}: {count}\n"));
        }
    }
    output.push('\n');

    // Areas
    output.push_str("## Areas\n\n| Area | Papers | Mean replies |\n|---|---|---|\n");
    for area in &report.areas {
        output.push_str(&format!(
            "| {} | {} | {:.2} |\n",
            area.area, area.count, area.mean_reply_count
        ));
    }
    output.push('\n');

    // Correlation
    let correlation = &report.correlation;
    output.push_str("## Reply Count Correlation\n\n");
    output.push_str(&format!(
        "- **Title length**: r = {}\n",
        correlation_text(&correlation.title_vs_replies)
    ));
    output.push_str(&format!(
        "- **Abstract length**: r = {}\n",
        correlation_text(&correlation.abstract_vs_replies)
    ));
    output.push_str(&format!(
        "- **Submission order**: r = {}\n",
        correlation_text(&correlation.order_vs_replies)
    ));
    if !correlation.hot_words.is_empty() {
        output.push_str("\n| Title word | Papers | Mean replies |\n|---|---|---|\n");
        for hot in &correlation.hot_words {
            output.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                hot.word, hot.papers, hot.mean_reply_count
            ));
        }
    }
    output.push('\n');

    // Overview
    let replies = &report.overview.replies;
    output.push_str("## Reply Counts\n\n");
    output.push_str(&format!(
        "min {:.0}, max {:.0}, mean {:.2}, median {:.1}\n",
        replies.min, replies.max, replies.mean, replies.median
    ));

    let bins = &report.overview.submission_bins;
    if !bins.is_empty() {
        output.push_str("\n## Submission Order\n\n| Numbers | Papers | Mean replies |\n|---|---|---|\n");
        for bin in bins {
            let mean = bin.mean_reply_count.map_or_else(|| "-".to_string(), |m| format!("{m:.2}"));
            output.push_str(&format!("| {:.0}-{:.0} | {} | {mean} |\n", bin.start, bin.end, bin.papers));
        }
    }

    output
}
