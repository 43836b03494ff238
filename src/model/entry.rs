//! Content entry types returned by a content source.

use super::ContentDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published entry (article or video) as returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Stable entry id
    pub id: String,

    /// Entry title
    pub title: String,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,

    /// Author display name
    #[serde(default)]
    pub author: Option<String>,

    /// The entry's body content
    #[serde(default)]
    pub content: ContentDocument,
}

impl ContentEntry {
    /// Create an entry with an empty body.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            published_at,
            author: None,
            content: ContentDocument::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_api_shape() {
        let json = r#"{
            "id": "article-17",
            "title": "Hill district floods",
            "publishedAt": "2024-06-12T08:30:00Z",
            "author": "Desk Report",
            "content": [
                {"kind": "text", "key": "p1", "richText": "Heavy rainfall overnight."}
            ]
        }"#;
        let entry: ContentEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "article-17");
        assert_eq!(entry.content.len(), 1);
        assert_eq!(entry.author.as_deref(), Some("Desk Report"));
    }

    #[test]
    fn test_entry_missing_optional_fields() {
        let json = r#"{
            "id": "v1",
            "title": "Clip",
            "publishedAt": "2024-01-01T00:00:00Z"
        }"#;
        let entry: ContentEntry = serde_json::from_str(json).unwrap();
        assert!(entry.author.is_none());
        assert!(entry.content.is_empty());
    }
}
