//! Paper record persisted by the fetcher and consumed by the analyzer.

use serde::{Deserialize, Serialize};

use super::note::{Note, field_or_default};
use crate::config::api;

/// Separator understood when reading older `a; b` keyword cells.
pub const KEYWORD_SEPARATOR: char = ';';

/// One accepted paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// OpenReview note id.
    #[serde(default)]
    pub id: String,

    /// OpenReview submission number.
    #[serde(default)]
    pub number: Option<i64>,

    /// Paper title (empty when the source omits it).
    #[serde(default)]
    pub title: String,

    /// Paper abstract (empty when the source omits it).
    #[serde(default)]
    pub r#abstract: String,

    /// Author keywords in source order.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Research area / track.
    #[serde(default)]
    pub primary_area: String,

    /// PDF attachment link.
    #[serde(default)]
    pub pdf_url: String,

    /// Forum page link.
    #[serde(default)]
    pub openreview_url: String,

    /// Forum replies, used as an engagement proxy.
    #[serde(default)]
    pub reply_count: u32,

    /// Position in fetch order.
    #[serde(default)]
    pub submission_index: usize,
}

impl PaperRecord {
    /// Normalize an API note into a record at the given fetch position.
    #[must_use]
    pub fn from_note(note: Note, submission_index: usize) -> Self {
        let content = note.content;
        let (pdf_url, openreview_url) = if note.id.is_empty() {
            (String::new(), String::new())
        } else {
            (
                format!("{}{}&name=pdf", api::ATTACHMENT_URL, note.id),
                format!("{}{}", api::FORUM_URL, note.id),
            )
        };

        Self {
            number: note.number,
            title: field_or_default(content.title),
            r#abstract: field_or_default(content.r#abstract),
            keywords: field_or_default(content.keywords),
            primary_area: field_or_default(content.primary_area),
            pdf_url,
            openreview_url,
            reply_count: note.details.and_then(|d| d.reply_count).unwrap_or(0),
            submission_index,
            id: note.id,
        }
    }

    /// Keywords as a JSON array string, so a keyword may contain any character.
    #[must_use]
    pub fn keyword_cell(&self) -> String {
        serde_json::Value::from(self.keywords.clone()).to_string()
    }
}

/// Parse a keyword cell written by [`PaperRecord::keyword_cell`].
///
/// A cell that is not a JSON string array is read as `;`-separated text.
#[must_use]
pub fn parse_keyword_cell(cell: &str) -> Vec<String> {
    let cell = cell.trim();
    if cell.starts_with('[') {
        if let Ok(keywords) = serde_json::from_str::<Vec<String>>(cell) {
            return keywords;
        }
    }

    cell.split(KEYWORD_SEPARATOR)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Flattened CSV row. Column order matches [`PaperRecord`] field order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub primary_area: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub openreview_url: String,
    pub reply_count: u32,
    pub submission_index: usize,
}

/// CSV header, in column order.
pub const CSV_HEADER: &[&str] = &[
    "id",
    "number",
    "title",
    "abstract",
    "keywords",
    "primary_area",
    "pdf_url",
    "openreview_url",
    "reply_count",
    "submission_index",
];

impl From<&PaperRecord> for PaperRow {
    fn from(record: &PaperRecord) -> Self {
        Self {
            id: record.id.clone(),
            number: record.number,
            title: record.title.clone(),
            r#abstract: record.r#abstract.clone(),
            keywords: record.keyword_cell(),
            primary_area: record.primary_area.clone(),
            pdf_url: record.pdf_url.clone(),
            openreview_url: record.openreview_url.clone(),
            reply_count: record.reply_count,
            submission_index: record.submission_index,
        }
    }
}

impl From<PaperRow> for PaperRecord {
    fn from(row: PaperRow) -> Self {
        let keywords = parse_keyword_cell(&row.keywords);

        Self {
            id: row.id,
            number: row.number,
            title: row.title,
            r#abstract: row.r#abstract,
            keywords,
            primary_area: row.primary_area,
            pdf_url: row.pdf_url,
            openreview_url: row.openreview_url,
            reply_count: row.reply_count,
            submission_index: row.submission_index,
        }
    }
}
