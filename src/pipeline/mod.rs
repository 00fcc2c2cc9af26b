//! Page orchestration: documents in, records out.
//!
//! [`DocumentProcessor`] walks the pages of one document, drops noise pages,
//! cleans text, normalizes tables and composes one [`Record`] per admitted
//! unit. [`BatchProcessor`] runs many documents and isolates failures per
//! document.
//!
//! # Example
//!
//! ```no_run
//! use corpusprep::parser::AutoParser;
//! use corpusprep::pipeline::{DocumentProcessor, ProcessOptions};
//! use std::path::Path;
//!
//! fn main() -> corpusprep::Result<()> {
//!     let processor = DocumentProcessor::new(ProcessOptions::new("AWS_Well_Architected"));
//!     let output = processor.process(&AutoParser::new(), Path::new("framework.pdf"))?;
//!     println!("{} records", output.records.len());
//!     Ok(())
//! }
//! ```

mod batch;

pub use batch::{BatchProcessor, BatchReport, DocumentFailure};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cleanup::{CleanupPipeline, NoiseFilter};
use crate::error::{Error, Result};
use crate::model::{ContentType, Page, RawTable, Record, RecordHeader};
use crate::parser::{DocumentBackend, DocumentParser, ExtractMode, PageSelection, ParseOptions};

/// Cleaned text must be longer than this many characters to be admitted.
pub const DEFAULT_MIN_CONTENT_LEN: usize = 30;

/// Options for a processing run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Category label attached to every record
    pub category: String,

    /// Minimum cleaned text length (exclusive, in characters)
    pub min_content_len: usize,

    /// Which pages and content kinds to extract
    pub parse: ParseOptions,
}

impl ProcessOptions {
    /// Create options for the given category with default admission rules.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
            parse: ParseOptions::default(),
        }
    }

    /// Set the minimum cleaned text length.
    pub fn with_min_content_len(mut self, len: usize) -> Self {
        self.min_content_len = len;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse = self.parse.with_pages(pages);
        self
    }

    /// Set extract mode.
    pub fn with_extract_mode(mut self, mode: ExtractMode) -> Self {
        self.parse = self.parse.with_extract_mode(mode);
        self
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::new("")
    }
}

/// Counters collected while walking a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Pages visited (after page selection)
    pub page_count: u32,

    /// Text records emitted
    pub text_records: u32,

    /// Table records emitted
    pub table_records: u32,

    /// Pages dropped as table-of-contents noise
    pub noise_pages: u32,

    /// Page texts dropped for being too short after cleaning
    pub short_texts: u32,

    /// Tables rejected by the table normalizer
    pub rejected_tables: u32,
}

impl ProcessStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records emitted.
    pub fn record_count(&self) -> u32 {
        self.text_records + self.table_records
    }

    /// Total units skipped.
    pub fn skipped(&self) -> u32 {
        self.noise_pages + self.short_texts + self.rejected_tables
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ProcessStats) {
        self.page_count += other.page_count;
        self.text_records += other.text_records;
        self.table_records += other.table_records;
        self.noise_pages += other.noise_pages;
        self.short_texts += other.short_texts;
        self.rejected_tables += other.rejected_tables;
    }
}

/// Records produced from one document.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Records in page order, text before tables within a page
    pub records: Vec<Record>,

    /// Extraction statistics
    pub stats: ProcessStats,
}

/// Turns the pages of a document into records.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    options: ProcessOptions,
    noise: NoiseFilter,
    cleanup: CleanupPipeline,
}

impl DocumentProcessor {
    /// Create a processor with the default noise filter and cleanup rules.
    pub fn new(options: ProcessOptions) -> Self {
        Self {
            options,
            noise: NoiseFilter::default(),
            cleanup: CleanupPipeline::default(),
        }
    }

    /// Replace the noise filter.
    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    /// Replace the cleanup pipeline.
    pub fn with_cleanup(mut self, cleanup: CleanupPipeline) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Get the run options.
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Open a document and turn its pages into records.
    ///
    /// Open failures are wrapped in [`Error::DocumentOpen`]. Extraction
    /// failures on any page abort the document.
    pub fn process(&self, parser: &dyn DocumentParser, path: &Path) -> Result<ProcessOutput> {
        let document = path.display().to_string();
        let backend = parser
            .open(path)
            .map_err(|e| Error::document_open(document.as_str(), e))?;

        let output = self.process_backend(&source_name(path), backend.as_ref())?;
        log::info!(
            "Processed {} ({} pages, {} records, {} skipped) with {} parser",
            document,
            output.stats.page_count,
            output.stats.record_count(),
            output.stats.skipped(),
            parser.name()
        );
        Ok(output)
    }

    /// Walk every selected page of an opened backend.
    pub fn process_backend(
        &self,
        filename: &str,
        backend: &dyn DocumentBackend,
    ) -> Result<ProcessOutput> {
        let mode = self.options.parse.extract_mode;
        let mut output = ProcessOutput::default();

        for number in 1..=backend.page_count() {
            if !self.options.parse.pages.includes(number) {
                continue;
            }
            let text = if mode.wants_text() {
                backend.extract_text(number)?
            } else {
                None
            };
            let tables = if mode.wants_tables() {
                backend.extract_tables(number)?
            } else {
                Vec::new()
            };
            self.process_page(filename, number, text.as_deref(), &tables, &mut output);
        }

        Ok(output)
    }

    /// Turn already extracted pages into records.
    ///
    /// Pages are numbered by their position, starting at 1. Page selection
    /// and extract mode apply as in [`process`](Self::process).
    pub fn process_pages<I>(&self, filename: &str, pages: I) -> ProcessOutput
    where
        I: IntoIterator<Item = Page>,
    {
        let mode = self.options.parse.extract_mode;
        let mut output = ProcessOutput::default();

        for (i, page) in pages.into_iter().enumerate() {
            let number = i as u32 + 1;
            if !self.options.parse.pages.includes(number) {
                continue;
            }
            let text = page.text.as_deref().filter(|_| mode.wants_text());
            let tables: &[RawTable] = if mode.wants_tables() {
                &page.tables
            } else {
                &[]
            };
            self.process_page(filename, number, text, tables, &mut output);
        }

        output
    }

    fn process_page(
        &self,
        filename: &str,
        number: u32,
        text: Option<&str>,
        tables: &[RawTable],
        output: &mut ProcessOutput,
    ) {
        output.stats.page_count += 1;

        if let Some(raw) = text.filter(|t| !t.is_empty()) {
            if self.noise.is_noise(raw) {
                log::debug!("{} page {}: skipped table-of-contents page", filename, number);
                output.stats.noise_pages += 1;
            } else {
                let cleaned = self.cleanup.process(raw);
                if cleaned.chars().count() > self.options.min_content_len {
                    output
                        .records
                        .push(self.header(filename, number, ContentType::Text).compose(&cleaned));
                    output.stats.text_records += 1;
                } else {
                    log::debug!(
                        "{} page {}: skipped short text ({} chars)",
                        filename,
                        number,
                        cleaned.chars().count()
                    );
                    output.stats.short_texts += 1;
                }
            }
        }

        for (j, table) in tables.iter().enumerate() {
            match self.cleanup.normalize_table(table) {
                Some(markdown) => {
                    let header = self.header(filename, number, ContentType::Table(j + 1));
                    output.records.push(header.compose(&markdown));
                    output.stats.table_records += 1;
                }
                None => {
                    log::debug!(
                        "{} page {}: rejected table {} ({} columns)",
                        filename,
                        number,
                        j + 1,
                        table.column_count()
                    );
                    output.stats.rejected_tables += 1;
                }
            }
        }
    }

    fn header<'a>(
        &'a self,
        filename: &'a str,
        page: u32,
        content_type: ContentType,
    ) -> RecordHeader<'a> {
        RecordHeader {
            source: filename,
            category: &self.options.category,
            page,
            content_type,
        }
    }
}

/// File name component used as the record source.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
