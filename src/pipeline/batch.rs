//! Multi-document runs with per-document failure isolation.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::Record;
use crate::parser::DocumentParser;

use super::{DocumentProcessor, ProcessStats};

/// A document that could not be turned into records.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Document identifier (its path)
    pub document: PathBuf,
    /// Underlying cause
    pub error: Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records of all successful documents, in document order
    pub records: Vec<Record>,

    /// Documents that failed, in document order
    pub failures: Vec<DocumentFailure>,

    /// Statistics summed over successful documents
    pub stats: ProcessStats,

    /// Number of documents that produced output
    pub succeeded: usize,
}

impl BatchReport {
    /// Number of records emitted by successful documents.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check if every document succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs a [`DocumentProcessor`] over many documents, one at a time.
pub struct BatchProcessor<'a> {
    parser: &'a dyn DocumentParser,
    processor: DocumentProcessor,
}

impl<'a> BatchProcessor<'a> {
    /// Create a batch runner using the given parser.
    pub fn new(parser: &'a dyn DocumentParser, processor: DocumentProcessor) -> Self {
        Self { parser, processor }
    }

    /// Get the per-document processor.
    pub fn processor(&self) -> &DocumentProcessor {
        &self.processor
    }

    /// Process every document in order.
    ///
    /// A document that fails to open or extract contributes no records; the
    /// failure is logged and recorded and the run moves on.
    pub fn run<P: AsRef<Path>>(&self, documents: &[P]) -> BatchReport {
        self.run_with(documents, |_, _| {})
    }

    /// Process every document, calling `on_document` after each one with
    /// the document path and whether it succeeded.
    pub fn run_with<P, F>(&self, documents: &[P], mut on_document: F) -> BatchReport
    where
        P: AsRef<Path>,
        F: FnMut(&Path, bool),
    {
        let mut report = BatchReport::default();

        for document in documents {
            let path = document.as_ref();
            match self.processor.process(self.parser, path) {
                Ok(output) => {
                    report.stats.merge(&output.stats);
                    report.records.extend(output.records);
                    report.succeeded += 1;
                    on_document(path, true);
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e.display_chain());
                    report.failures.push(DocumentFailure {
                        document: path.to_path_buf(),
                        error: e,
                    });
                    on_document(path, false);
                }
            }
        }

        report
    }
}
