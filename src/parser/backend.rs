//! Document parser abstraction layer.
//!
//! The pipeline only sees these traits: a parser opens a document into an
//! owned backend, and the backend yields per-page text and table grids. The
//! backend is dropped as soon as the document has been walked, which
//! releases whatever the concrete library holds on to.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::RawTable;

/// An opened document.
///
/// Pages are addressed by 1-based number. Returning `Ok(None)` or an empty
/// table list means "no content"; `Err` means extraction failed.
pub trait DocumentBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Raw text of a page, `None` when the page has no text layer.
    fn extract_text(&self, page: u32) -> Result<Option<String>>;

    /// Raw table grids of a page, in extraction order.
    fn extract_tables(&self, page: u32) -> Result<Vec<RawTable>>;

    /// Fail with [`Error::PageOutOfRange`] unless `page` exists.
    fn check_page(&self, page: u32) -> Result<()> {
        let count = self.page_count();
        if page == 0 || page > count {
            return Err(Error::PageOutOfRange(page, count));
        }
        Ok(())
    }
}

/// Opens documents into backends.
pub trait DocumentParser {
    /// Short parser name for logs.
    fn name(&self) -> &str;

    /// Open and decode a document.
    ///
    /// Errors here are document-level: the document cannot be processed at
    /// all.
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentBackend>>;
}
