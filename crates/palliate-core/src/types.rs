use serde::{Deserialize, Serialize};

// =============================================================================
// Links
// =============================================================================

/// An outbound reference the UI renders as a hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible label, e.g. "คลิก".
    pub label: String,
    /// Absolute URL.
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// Documents
// =============================================================================

/// An entry in the knowledge corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique within one corpus.
    pub id: u32,
    pub title: String,
    /// Topic tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Where the full document can be read. Falls back to the corpus
    /// document store when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Document {
    pub fn new(id: u32, title: impl Into<String>, tags: &[&str], summary: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            summary: summary.into(),
            url: None,
        }
    }

    /// Attach a document-specific URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// Who produced a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of a conversation transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// Hyperlink attached to an assistant answer, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Epoch seconds when the turn was appended.
    pub at: i64,
}

impl Turn {
    pub fn user(text: impl Into<String>, at: i64) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            link: None,
            at,
        }
    }

    pub fn assistant(text: impl Into<String>, link: Option<Link>, at: i64) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            link,
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_document_new_copies_tags_in_order() {
        let doc = Document::new(4, "เอกสาร DNR และ Advance Care Plan", &["DNR", "ACP"], "ขั้นตอน");
        assert_eq!(doc.tags, vec!["DNR".to_string(), "ACP".to_string()]);
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_document_json_omits_missing_url() {
        let doc = Document::new(1, "t", &[], "s");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("url"));

        let doc = doc.with_url("https://example.org/doc");
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("https://example.org/doc"));
    }

    #[test]
    fn test_document_deserialize_defaults() {
        let doc: Document = serde_json::from_str(r#"{"id": 9, "title": "only a title"}"#).unwrap();
        assert_eq!(doc.id, 9);
        assert!(doc.tags.is_empty());
        assert!(doc.summary.is_empty());
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("ปวดมาก", 10);
        assert_eq!(user.role, Role::User);
        assert!(user.link.is_none());

        let link = Link::new("คลิก", "https://chatgpt.com/");
        let bot = Turn::assistant("ขออภัย", Some(link.clone()), 11);
        assert_eq!(bot.role, Role::Assistant);
        assert_eq!(bot.link, Some(link));
        assert_eq!(bot.at, 11);
    }
}
