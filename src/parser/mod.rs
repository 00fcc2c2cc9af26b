//! Document parsing module.
//!
//! Parsers turn a path into an opened [`DocumentBackend`]. [`AutoParser`]
//! picks the concrete parser from the detected source format.

mod backend;
mod dump;
mod options;
mod pdf_parser;

pub use backend::{DocumentBackend, DocumentParser};
pub use dump::{PageDump, PageDumpParser};
pub use options::{ExtractMode, PageSelection, ParseOptions};
pub use pdf_parser::{PdfBackend, PdfParser};

use std::path::Path;

use crate::detect::{detect_format_from_path, SourceFormat};
use crate::error::Result;

/// Parser that dispatches on the detected source format.
#[derive(Debug, Clone, Default)]
pub struct AutoParser {
    pdf: PdfParser,
    dump: PageDumpParser,
}

impl AutoParser {
    /// Create a new dispatching parser.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentParser for AutoParser {
    fn name(&self) -> &str {
        "auto"
    }

    fn open(&self, path: &Path) -> Result<Box<dyn DocumentBackend>> {
        let format = detect_format_from_path(path)?;
        log::debug!("Detected {} for {}", format, path.display());
        match format {
            SourceFormat::Pdf { .. } => self.pdf.open(path),
            SourceFormat::PageDump => self.dump.open(path),
        }
    }
}
