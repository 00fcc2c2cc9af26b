//! Corpus record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One emitted unit of the output corpus.
///
/// Serializes as `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Composed record text
    pub text: String,
}

impl Record {
    /// Create a record from already composed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the value of a preamble field (e.g. `"Page"`), if present.
    ///
    /// Only lines before `Content:` are searched.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.text
            .lines()
            .take_while(|line| *line != "Content:")
            .find_map(|line| {
                line.strip_prefix(name)
                    .and_then(|rest| rest.strip_prefix(": "))
            })
    }

    /// Get the content body (everything after the `Content:` line).
    pub fn content(&self) -> Option<&str> {
        self.text
            .split_once("\nContent:\n")
            .map(|(_, body)| body)
    }
}

/// Kind of content a document record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Prose text of a page
    Text,
    /// The n-th table of a page (1-indexed)
    Table(usize),
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Text => write!(f, "Text"),
            ContentType::Table(n) => write!(f, "Table-{}", n),
        }
    }
}

/// Fixed preamble of a document record.
#[derive(Debug, Clone, Copy)]
pub struct RecordHeader<'a> {
    /// Source filename
    pub source: &'a str,
    /// Category label of the run
    pub category: &'a str,
    /// Page number (1-indexed)
    pub page: u32,
    /// Content type
    pub content_type: ContentType,
}

impl RecordHeader<'_> {
    /// Compose a record from this preamble and a content body.
    pub fn compose(&self, body: &str) -> Record {
        Record::new(format!(
            "Source: {}\nCategory: {}\nPage: {}\nType: {}\nContent:\n{}",
            self.source, self.category, self.page, self.content_type, body
        ))
    }
}
