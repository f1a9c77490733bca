//! Chart rendering for the analysis groups.
//!
//! Every group is one PNG laid out as a grid of panels, drawn with the
//! [`plotters`] bitmap backend so rendering works in headless environments.

mod panels;

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::analysis::stats::Histogram;
use crate::analysis::text::as_f64;
use crate::analysis::{AreaStats, CorrelationAnalysis, KeywordAnalysis, Overview, TextAnalysis};
use panels::{Marker, horizontal_bars, histogram, scatter};

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const GRID_SIZE: (u32, u32) = (1600, 1200);
const WIDE_SIZE: (u32, u32) = (1800, 900);

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const CORAL: RGBColor = RGBColor(255, 127, 80);
const MEDIUM_PURPLE: RGBColor = RGBColor(147, 112, 219);
const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);
const TEAL: RGBColor = RGBColor(0, 128, 128);
const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);
const INDIAN_RED: RGBColor = RGBColor(205, 92, 92);
const ORANGE: RGBColor = RGBColor(243, 156, 18);
const MEAN_RED: RGBColor = RGBColor(231, 76, 60);
const MEDIAN_GREEN: RGBColor = RGBColor(46, 204, 113);

/// Title/abstract length histograms, hot topics, title vs abstract length.
pub fn render_text(text: &TextAnalysis, path: &Path) -> Result<()> {
    if text.title_words.is_empty() {
        return Err(PlotError::InvalidData("No papers to plot".to_string()));
    }

    let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled("ICLR 2026: Text Analysis", ("sans-serif", 32).into_font())
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((2, 2));

    histogram(
        &cells[0],
        "Title Length Distribution",
        "Title Length (words)",
        &Histogram::new(&as_f64(&text.title_words), 20),
        STEEL_BLUE,
        &[Marker::new(format!("Mean: {:.1}", text.title_length.mean), text.title_length.mean, MEAN_RED)],
    )?;
    histogram(
        &cells[1],
        "Abstract Length Distribution",
        "Abstract Length (words)",
        &Histogram::new(&as_f64(&text.abstract_words), 30),
        CORAL,
        &[Marker::new(
            format!("Mean: {:.0}", text.abstract_length.mean),
            text.abstract_length.mean,
            MEAN_RED,
        )],
    )?;

    let topics: Vec<(String, f64)> =
        text.hot_topics.iter().map(|(t, c)| (t.clone(), *c as f64)).collect();
    horizontal_bars(&cells[2], "Hot Topics in Titles", "Number of Papers", &topics, MEDIUM_PURPLE)?;

    let title = match text.length_correlation {
        Some(r) => format!("Title vs Abstract Length (Corr: {r:.3})"),
        None => "Title vs Abstract Length".to_string(),
    };
    scatter(
        &cells[3],
        &title,
        ("Title Length (words)", "Abstract Length (words)"),
        &text.length_points(),
        None,
        SEA_GREEN,
    )?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Top keywords and top keyword pairs.
pub fn render_keywords(keywords: &KeywordAnalysis, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, WIDE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled("ICLR 2026: Keyword Analysis", ("sans-serif", 32).into_font())
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((1, 2));

    let top: Vec<(String, f64)> =
        keywords.top_keywords.iter().map(|(k, c)| (k.clone(), *c as f64)).collect();
    horizontal_bars(&cells[0], "Top 20 Keywords", "Frequency", &top, TEAL)?;

    let pairs: Vec<(String, f64)> = keywords
        .top_pairs
        .iter()
        .map(|((a, b), c)| (format!("{a} & {b}"), *c as f64))
        .collect();
    horizontal_bars(&cells[1], "Top 15 Keyword Co-occurrences", "Co-occurrence Count", &pairs, DARK_ORANGE)?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Paper count and mean reply count per area, both in paper-count order.
pub fn render_areas(areas: &[AreaStats], path: &Path) -> Result<()> {
    if areas.is_empty() {
        return Err(PlotError::InvalidData("No areas to plot".to_string()));
    }

    let root = BitMapBackend::new(path, WIDE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled("ICLR 2026: Area Analysis", ("sans-serif", 32).into_font())
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((1, 2));

    let counts: Vec<(String, f64)> = areas.iter().map(|a| (a.area.clone(), a.count as f64)).collect();
    horizontal_bars(&cells[0], "Papers by Area", "Number of Papers", &counts, STEEL_BLUE)?;

    let replies: Vec<(String, f64)> =
        areas.iter().map(|a| (a.area.clone(), a.mean_reply_count)).collect();
    horizontal_bars(&cells[1], "Average Reply Count by Area", "Average Reply Count", &replies, INDIAN_RED)?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Length and order against reply count, and hot-word mean reply count.
pub fn render_correlation(correlation: &CorrelationAnalysis, path: &Path) -> Result<()> {
    if correlation.title_vs_replies.points.is_empty() {
        return Err(PlotError::InvalidData("No papers to plot".to_string()));
    }

    let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled("ICLR 2026: Correlation Analysis", ("sans-serif", 32).into_font())
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((2, 2));

    let relations = [
        (&correlation.title_vs_replies, "Title Length vs Reply Count", "Title Length (words)", STEEL_BLUE),
        (&correlation.abstract_vs_replies, "Abstract Length vs Reply Count", "Abstract Length (words)", CORAL),
        (
            &correlation.order_vs_replies,
            "Submission Order vs Reply Count",
            "Submission Index (smaller = earlier)",
            MEDIUM_PURPLE,
        ),
    ];

    for (cell, (relation, title, x_label, color)) in cells.iter().zip(relations) {
        let title = match relation.pearson {
            Some(r) => format!("{title} (Corr: {r:.3})"),
            None => title.to_string(),
        };
        scatter(cell, &title, (x_label, "Reply Count"), &relation.points, relation.fit, color)?;
    }

    let hot: Vec<(String, f64)> =
        correlation.hot_words.iter().map(|h| (h.word.clone(), h.mean_reply_count)).collect();
    horizontal_bars(&cells[3], "Hot Words in Title vs Reply Count", "Average Reply Count", &hot, SEA_GREEN)?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Area distribution, top keywords, reply-count and submission-number histograms.
pub fn render_overview(overview: &Overview, keywords: &KeywordAnalysis, path: &Path) -> Result<()> {
    if overview.reply_counts.is_empty() {
        return Err(PlotError::InvalidData("No papers to plot".to_string()));
    }

    let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let body = root
        .titled("ICLR 2026 Paper Analysis", ("sans-serif", 32).into_font())
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((2, 2));

    let areas: Vec<(String, f64)> =
        overview.area_counts.iter().map(|(a, c)| (a.clone(), *c as f64)).collect();
    horizontal_bars(&cells[0], "Primary Area Distribution", "Number of Papers", &areas, STEEL_BLUE)?;

    let top: Vec<(String, f64)> =
        keywords.top_keywords.iter().map(|(k, c)| (k.clone(), *c as f64)).collect();
    horizontal_bars(&cells[1], "Top Keywords", "Frequency", &top, TEAL)?;

    let replies = &overview.replies;
    histogram(
        &cells[2],
        "Reply Count Distribution",
        "Reply Count",
        &Histogram::new(&overview.reply_counts, 30),
        ORANGE,
        &[
            Marker::new(format!("Mean: {:.1}", replies.mean), replies.mean, MEAN_RED),
            Marker::new(format!("Median: {:.1}", replies.median), replies.median, MEDIAN_GREEN),
        ],
    )?;

    let numbers = &overview.submission_numbers;
    let markers = if overview.numbers.is_empty() {
        Vec::new()
    } else {
        vec![
            Marker::new(format!("Mean: {:.0}", numbers.mean), numbers.mean, MEAN_RED),
            Marker::new(format!("Median: {:.0}", numbers.median), numbers.median, MEDIAN_GREEN),
        ]
    };
    histogram(
        &cells[3],
        "Submission Order of Accepted Papers",
        "Submission Number (smaller = earlier)",
        &Histogram::new(&overview.numbers, 50),
        MEDIUM_PURPLE,
        &markers,
    )?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
