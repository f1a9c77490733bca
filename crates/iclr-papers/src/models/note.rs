//! OpenReview note schema, as returned by the `/notes` endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One page of the notes listing.
///
/// Notes are kept as raw JSON so that a single malformed entry can be
/// skipped without discarding the rest of the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesPage {
    /// Raw notes in listing order.
    #[serde(default)]
    pub notes: Vec<serde_json::Value>,

    /// Total number of notes matching the query (reported on every page).
    #[serde(default)]
    pub count: Option<u64>,
}

impl NotesPage {
    /// Number of raw notes on this page, malformed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when the page carries no notes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// A submission note.
///
/// Every field decodes leniently: a value of the wrong type becomes the
/// field default, so only a note that is not a JSON object fails to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Note {
    /// Note id.
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,

    /// Submission number.
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<i64>,

    /// Submission form content.
    #[serde(default, deserialize_with = "lenient")]
    pub content: NoteContent,

    /// Requested details (`replyCount` etc.).
    #[serde(default, deserialize_with = "lenient")]
    pub details: Option<NoteDetails>,
}

impl Note {
    /// Decode one raw listing entry. Only an entry that is not an object is rejected.
    ///
    /// # Errors
    ///
    /// Returns error if `value` is not a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom("note is not a JSON object"));
        }
        serde_json::from_value(value)
    }
}

/// Submission form fields used by the toolkit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteContent {
    /// Paper title.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<ContentField<String>>,

    /// Paper abstract.
    #[serde(default, deserialize_with = "lenient")]
    pub r#abstract: Option<ContentField<String>>,

    /// Author keywords.
    #[serde(default, deserialize_with = "lenient")]
    pub keywords: Option<ContentField<Vec<String>>>,

    /// Research area.
    #[serde(default, deserialize_with = "lenient")]
    pub primary_area: Option<ContentField<String>>,
}

/// A content value. API v2 wraps values as `{"value": ...}`; v1 used them bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentField<T> {
    /// `{"value": ...}`
    Wrapped {
        /// Wrapped value, absent or null when the author left it blank.
        #[serde(default)]
        value: Option<T>,
    },
    /// Bare value.
    Bare(T),
}

impl<T> ContentField<T> {
    /// Unwrap into the underlying value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Wrapped { value } => value,
            Self::Bare(value) => Some(value),
        }
    }
}

/// Extra note details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetails {
    /// Number of replies in the forum.
    #[serde(default, deserialize_with = "lenient")]
    pub reply_count: Option<u32>,
}

/// Decode a field, falling back to its default when the value has an unexpected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }

    match serde_json::from_value(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring note field with unexpected type");
            Ok(T::default())
        }
    }
}

/// Take a content field, defaulting when absent.
pub(crate) fn field_or_default<T: Default>(field: Option<ContentField<T>>) -> T {
    field.and_then(ContentField::into_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_mistyped_keywords_keep_the_note() {
        let note = Note::from_value(json!({
            "id": "k1",
            "content": {
                "title": {"value": "Real Paper"},
                "keywords": {"value": "llm, agents"}
            }
        }))
        .unwrap();

        assert_eq!(field_or_default(note.content.title), "Real Paper");
        assert!(field_or_default(note.content.keywords).is_empty());
    }

    #[test]
    fn test_unknown_content_fields_are_ignored() {
        let note = Note::from_value(json!({
            "content": {"title": {"value": "Real Paper"}, "venue": {"value": 5}}
        }))
        .unwrap();
        assert_eq!(field_or_default(note.content.title), "Real Paper");
    }

    #[test]
    fn test_mistyped_top_level_fields_default() {
        let note = Note::from_value(json!({
            "id": 42,
            "number": "seven",
            "content": "oops",
            "details": {"replyCount": "many"}
        }))
        .unwrap();

        assert_eq!(note.id, "");
        assert_eq!(note.number, None);
        assert!(note.content.title.is_none());
        assert_eq!(note.details.and_then(|d| d.reply_count), None);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Note::from_value(json!("not a note")).is_err());
        assert!(Note::from_value(json!(["id", 1])).is_err());
        assert!(Note::from_value(json!(null)).is_err());
    }
}
