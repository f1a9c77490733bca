//! Data models: the OpenReview wire schema and the persisted paper record.
//!
//! Wire models use `#[serde(default)]` throughout; the API omits fields freely.

mod note;
mod paper;

pub use note::{ContentField, Note, NoteContent, NoteDetails, NotesPage};
pub use paper::{CSV_HEADER, KEYWORD_SEPARATOR, PaperRecord, PaperRow, parse_keyword_cell};
