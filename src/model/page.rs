//! Page-level types.

use super::RawTable;
use serde::{Deserialize, Serialize};

/// A single page as delivered by a document parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    #[serde(default)]
    pub number: u32,

    /// Raw extracted text, absent when the page has no text layer
    #[serde(default)]
    pub text: Option<String>,

    /// Raw table grids in extraction order
    #[serde(default)]
    pub tables: Vec<RawTable>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Set the page text and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a table and return self.
    pub fn with_table(mut self, table: RawTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Check whether the page carries neither text nor tables.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty()) && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_builder() {
        let page = Page::new(3)
            .with_text("hello")
            .with_table(RawTable::from_strings([["a", "b"]]));
        assert_eq!(page.number, 3);
        assert_eq!(page.text.as_deref(), Some("hello"));
        assert_eq!(page.tables.len(), 1);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_page_empty() {
        assert!(Page::new(1).is_empty());
        assert!(Page::new(1).with_text("  \n").is_empty());
    }

    #[test]
    fn test_page_deserialize_defaults() {
        let page: Page = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(page.number, 0);
        assert!(page.text.is_none());
        assert!(page.tables.is_empty());
    }
}
