//! JSON page dumps produced by external extractors.
//!
//! A page dump carries what a layout-aware extractor (pdfplumber, docling,
//! ...) found on each page:
//!
//! ```json
//! {
//!   "source": "guide.pdf",
//!   "pages": [
//!     { "text": "Page one text", "tables": [[["Name", "Value"], ["a", null]]] },
//!     { "text": null }
//!   ]
//! }
//! ```
//!
//! Page numbers follow array order, starting at 1.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Page, RawTable};

use super::backend::{DocumentBackend, DocumentParser};

/// Pre-extracted pages of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDump {
    /// Original document name, if the extractor recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl PageDump {
    /// Create a dump from pages, renumbering them from 1.
    pub fn new(pages: Vec<Page>) -> Self {
        let mut dump = Self {
            source: None,
            pages,
        };
        dump.renumber();
        dump
    }

    /// Set the source name and return self.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut dump: PageDump = serde_json::from_reader(BufReader::new(reader))?;
        dump.renumber();
        Ok(dump)
    }

    /// Parse a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }

    fn renumber(&mut self) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.number = i as u32 + 1;
        }
    }

    fn page(&self, number: u32) -> Result<&Page> {
        self.check_page(number)?;
        Ok(&self.pages[number as usize - 1])
    }
}

impl DocumentBackend for PageDump {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_text(&self, page: u32) -> Result<Option<String>> {
        Ok(self.page(page)?.text.clone())
    }

    fn extract_tables(&self, page: u32) -> Result<Vec<RawTable>> {
        Ok(self.page(page)?.tables.clone())
    }
}

/// Parser for JSON page dump files.
#[derive(Debug, Clone, Default)]
pub struct PageDumpParser {
    _private: (),
}

impl PageDumpParser {
    /// Create a new page dump parser.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentParser for PageDumpParser {
    fn name(&self) -> &str {
        "page-dump"
    }

    fn open(&self, path: &Path) -> Result<Box<dyn DocumentBackend>> {
        let dump = PageDump::from_reader(File::open(path)?)?;
        Ok(Box::new(dump))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const DUMP: &str = r#"{
        "source": "guide.pdf",
        "pages": [
            { "number": 9, "text": "Page one text", "tables": [[["Name", "Value"], ["a", null]]] },
            { "text": null },
            {}
        ]
    }"#;

    #[test]
    fn test_parse_dump() {
        let dump = PageDump::from_json(DUMP).unwrap();
        assert_eq!(dump.source.as_deref(), Some("guide.pdf"));
        assert_eq!(dump.page_count(), 3);
        assert_eq!(dump.pages[0].number, 1);
        assert_eq!(dump.pages[2].number, 3);
    }

    #[test]
    fn test_backend_access() {
        let dump = PageDump::from_json(DUMP).unwrap();
        assert_eq!(dump.extract_text(1).unwrap().as_deref(), Some("Page one text"));
        assert_eq!(dump.extract_text(2).unwrap(), None);

        let tables = dump.extract_tables(1).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[1][1], None);
        assert!(dump.extract_tables(3).unwrap().is_empty());

        assert!(matches!(
            dump.extract_text(4),
            Err(Error::PageOutOfRange(4, 3))
        ));
    }

    #[test]
    fn test_malformed_dump() {
        assert!(matches!(
            PageDump::from_json("{\"pages\": 3}"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_open_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.json");
        std::fs::write(&path, DUMP).unwrap();

        let backend = PageDumpParser::new().open(&path).unwrap();
        assert_eq!(backend.page_count(), 3);
    }

    #[test]
    fn test_new_renumbers() {
        let dump = PageDump::new(vec![Page::new(7), Page::new(7)]).with_source("manual.pdf");
        assert_eq!(dump.pages[1].number, 2);
        assert_eq!(dump.source.as_deref(), Some("manual.pdf"));
    }
}
