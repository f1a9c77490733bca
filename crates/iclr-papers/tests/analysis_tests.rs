//! Analyzer tests over CSV files written the way the fetcher writes them.
//!
//! Chart rendering needs system fonts, so these tests stop at the report.

use std::path::Path;

use iclr_papers::analysis::{Analyzer, keyword_frequency, normalize_area};
use iclr_papers::error::AnalysisError;
use iclr_papers::models::PaperRecord;
use iclr_papers::store;

fn paper(index: usize, title: &str, keywords: &[&str], area: &str, replies: u32) -> PaperRecord {
    PaperRecord {
        id: format!("id{index}"),
        number: Some(index as i64 + 1),
        title: title.to_string(),
        r#abstract: format!("An abstract about {title} with several more words."),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        primary_area: area.to_string(),
        reply_count: replies,
        submission_index: index,
        ..Default::default()
    }
}

fn sample_listing() -> Vec<PaperRecord> {
    vec![
        paper(
            0,
            "Diffusion Models for Diffusion Tasks",
            &["Diffusion Models", "Generative Models"],
            "generative models",
            2,
        ),
        paper(
            1,
            "LLM Agents that Reason",
            &["LLM", "agents", "reasoning"],
            "foundation or frontier models, including LLMs",
            5,
        ),
        paper(
            2,
            "Graph Learning at Scale",
            &["graph neural networks", "Diffusion Models"],
            "learning on graphs and other geometries & topologies",
            9,
        ),
        paper(3, "A Vision Transformer", &["vision", "ViT"], "", 0),
    ]
}

fn write_listing(dir: &Path, records: &[PaperRecord]) -> std::path::PathBuf {
    let path = dir.join("papers.csv");
    store::write_csv(&path, records).unwrap();
    path
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_missing_csv_reports_fetch_hint() {
    let dir = tempfile::tempdir().unwrap();
    let err = Analyzer::from_csv(&dir.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, AnalysisError::MissingInput { .. }));
    assert!(err.to_user_message().contains("iclr-fetch"));
}

#[test]
fn test_header_only_csv_is_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_listing(dir.path(), &[]);

    let err = Analyzer::from_csv(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { .. }));
}

#[test]
fn test_loaded_rows_match_written_records() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample_listing();
    let path = write_listing(dir.path(), &records);

    let analyzer = Analyzer::from_csv(&path).unwrap();
    assert_eq!(analyzer.records(), records.as_slice());
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn test_report_over_sample_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_listing(dir.path(), &sample_listing());
    let report = Analyzer::from_csv(&path).unwrap().analyze();

    assert_eq!(report.total_papers, 4);
    assert_eq!(report.skipped_rows, 0);

    // Text: "Diffusion" appears twice in one title but counts once.
    let diffusion = report.text.hot_topics.iter().find(|(t, _)| t == "Diffusion").unwrap();
    assert_eq!(diffusion.1, 1);
    assert!(report.text.hot_topics.iter().all(|(_, c)| *c > 0));

    // Keywords: "vit" is dropped as too short, "diffusion models" leads.
    assert_eq!(report.keywords.top_keywords[0], ("diffusion models".to_string(), 2));
    assert!(report.keywords.top_keywords.iter().all(|(k, _)| k != "vit"));

    // Areas partition the listing, empty area becomes the placeholder.
    let total: usize = report.areas.iter().map(|a| a.count).sum();
    assert_eq!(total, report.total_papers);
    assert!(report.areas.iter().any(|a| a.area == normalize_area("")));
    assert!(report.areas.iter().any(|a| a.area == "foundation or frontier models"));

    // Correlation: every paper is plotted.
    assert_eq!(report.correlation.order_vs_replies.points.len(), 4);
    assert!(report.correlation.title_vs_replies.pearson.is_some());

    // Overview uses raw, non-empty labels.
    assert_eq!(report.overview.area_counts.len(), 3);
    assert!((report.overview.replies.mean - 4.0).abs() < 1e-9);
}

#[test]
fn test_constant_replies_have_no_correlation() {
    let records: Vec<PaperRecord> =
        (0..5).map(|i| paper(i, &"word ".repeat(i + 1), &[], "optimization", 3)).collect();

    let report = Analyzer::new(records).analyze();
    assert!(report.correlation.title_vs_replies.pearson.is_none());
    let fit = report.correlation.order_vs_replies.fit.unwrap();
    assert!(fit.slope.abs() < 1e-12);
}

#[test]
fn test_malformed_rows_are_counted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_listing(dir.path(), &sample_listing());

    let mut contents = std::fs::read_to_string(&path).unwrap();
    contents.push_str("id9,not-a-number,T,A,k,area,,,many,9\n");
    std::fs::write(&path, contents).unwrap();

    let report = Analyzer::from_csv(&path).unwrap().analyze();
    assert_eq!(report.total_papers, 4);
    assert_eq!(report.skipped_rows, 1);
}

#[test]
fn test_keywords_with_semicolons_match_json() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![paper(0, "Graphs", &["graph; networks", "message passing"], "graphs", 1)];

    let json_path = dir.path().join("papers.json");
    store::write_json(&json_path, &records).unwrap();
    let csv_path = write_listing(dir.path(), &records);

    let from_json = store::read_json(&json_path).unwrap();
    let from_csv = Analyzer::from_csv(&csv_path).unwrap();
    assert_eq!(from_csv.records()[0].keywords, from_json[0].keywords);
    assert_eq!(from_csv.records()[0].keywords, vec!["graph; networks", "message passing"]);

    let frequency = keyword_frequency(from_csv.records());
    assert!(frequency.contains(&("graph; networks".to_string(), 1)));
    assert_eq!(frequency.len(), 2);
}
