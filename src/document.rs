//! Document wire model and the presentation rules for cards and the detail view

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned document identifier
pub type DocumentId = i64;

/// Source type sent for documents typed into the create form
pub const MANUAL_SOURCE: &str = "manual";

/// Maximum number of tags shown on a summary card
pub const CARD_TAG_LIMIT: usize = 3;

/// Number of content characters kept in a card preview
pub const PREVIEW_CHARS: usize = 150;

/// Placeholder shown instead of an empty tag list
pub const NO_TAGS: &str = "No tags";

/// A document as returned by the store. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub source_type: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub source_type: String,
}

impl NewDocument {
    /// Create a payload for a document entered by hand
    pub fn manual(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            source_type: MANUAL_SOURCE.to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Document {
    /// AI summary, treating an empty string the same as a missing one
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// Summary card shown in the list and search grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCard {
    pub id: DocumentId,
    pub title: String,
    /// At most [`CARD_TAG_LIMIT`] tags, in document order
    pub tags: Vec<String>,
    pub preview: Preview,
    pub created: String,
    pub source_type: String,
}

/// Card body text: either the summary verbatim or a content excerpt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Summary(String),
    Excerpt(String),
}

impl Preview {
    pub fn text(&self) -> &str {
        match self {
            Preview::Summary(s) | Preview::Excerpt(s) => s,
        }
    }
}

impl From<&Document> for DocumentCard {
    fn from(doc: &Document) -> Self {
        let preview = match doc.summary_text() {
            Some(summary) => Preview::Summary(summary.to_string()),
            None => Preview::Excerpt(excerpt(&doc.content, PREVIEW_CHARS)),
        };

        Self {
            id: doc.id,
            title: doc.title.clone(),
            tags: doc.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            preview,
            created: format_date(&doc.created_at),
            source_type: doc.source_type.clone(),
        }
    }
}

/// Build cards for a batch of documents, preserving server order
pub fn cards(documents: &[Document]) -> Vec<DocumentCard> {
    documents.iter().map(DocumentCard::from).collect()
}

/// First `max_chars` characters of `content` followed by an ellipsis.
///
/// The ellipsis is appended even when nothing was cut off.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let head: String = content.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Format a server timestamp as e.g. `Jan 5, 2024`.
///
/// Accepts RFC 3339 and the naive ISO form the backend emits. Anything else is
/// returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn doc(id: DocumentId, title: &str) -> Document {
        Document {
            id,
            title: title.to_string(),
            content: format!("Content of {}", title),
            summary: Some(format!("Summary of {}", title)),
            tags: vec!["notes".to_string()],
            source_type: MANUAL_SOURCE.to_string(),
            source_url: None,
            created_at: "2024-01-05T10:20:30.123456".to_string(),
            updated_at: None,
        }
    }
}
