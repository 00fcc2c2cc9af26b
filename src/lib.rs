//! # corpusprep
//!
//! Turns technical documents into a cleaned, newline-delimited JSON corpus
//! for LLM training.
//!
//! Every page of a document is checked for table-of-contents noise, its
//! text is cleaned by an ordered list of rewrite rules, its tables are
//! rendered as Markdown, and each admitted unit becomes one [`Record`] with
//! a fixed preamble:
//!
//! ```text
//! Source: guide.pdf
//! Category: AWS_Well_Architected
//! Page: 12
//! Type: Table-1
//! Content:
//! | Name | Value |
//! ...
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use corpusprep::{process_files, save_jsonl};
//!
//! fn main() -> corpusprep::Result<()> {
//!     let report = process_files(&["framework.pdf", "pillar.pdf"], "AWS_Well_Architected");
//!     for failure in &report.failures {
//!         eprintln!("{}: {}", failure.document.display(), failure.error);
//!     }
//!     save_jsonl(&report.records, "cleaned_aws_data.jsonl")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Noise filtering**: table-of-contents pages are dropped
//! - **Rule-based cleanup**: copyright lines, dotted leaders, page footers
//! - **Table normalization**: header promotion and Markdown pipe tables
//! - **Failure isolation**: one broken document never stops a batch
//! - **Extra sources**: tldr command pages and keyword tagging

pub mod cleanup;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod snippet;
pub mod tags;

// Re-export commonly used types
pub use cleanup::{clean, clean_opt, is_noise, normalize_table, CleanupPipeline, NoiseFilter, RewriteRule};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{ContentType, Page, RawTable, Record, RecordHeader, TabularValue};
pub use parser::{
    AutoParser, DocumentBackend, DocumentParser, ExtractMode, PageDump, PageDumpParser,
    PageSelection, ParseOptions, PdfParser,
};
pub use pipeline::{
    BatchProcessor, BatchReport, DocumentFailure, DocumentProcessor, ProcessOptions,
    ProcessOutput, ProcessStats,
};
pub use render::{read_jsonl, render_table_markdown, save_jsonl, to_jsonl, write_jsonl};
pub use snippet::{collect_snippets, parse_snippet, Lang};
pub use tags::{TagRule, Tagger};

use std::path::Path;

/// Turn one document into records.
///
/// The format (PDF or JSON page dump) is detected from the file.
///
/// # Example
///
/// ```no_run
/// use corpusprep::process_file;
///
/// let records = process_file("wellarchitected-framework.pdf", "AWS_Well_Architected").unwrap();
/// println!("{} records", records.len());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P, category: &str) -> Result<Vec<Record>> {
    process_file_with_options(path, ProcessOptions::new(category))
}

/// Turn one document into records with custom options.
pub fn process_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ProcessOptions,
) -> Result<Vec<Record>> {
    let processor = DocumentProcessor::new(options);
    let output = processor.process(&AutoParser::new(), path.as_ref())?;
    Ok(output.records)
}

/// Turn many documents into records, skipping the ones that fail.
pub fn process_files<P: AsRef<Path>>(paths: &[P], category: &str) -> BatchReport {
    let parser = AutoParser::new();
    BatchProcessor::new(&parser, DocumentProcessor::new(ProcessOptions::new(category))).run(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_file_page_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.json");
        std::fs::write(
            &path,
            r#"{"pages": [{"text": "This page talks about operational excellence at length."}]}"#,
        )
        .unwrap();

        let records = process_file(&path, "AWS").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("Source"), Some("guide.json"));
        assert_eq!(records[0].field("Category"), Some("AWS"));
    }

    #[test]
    fn test_process_file_missing() {
        let result = process_file("/nonexistent/guide.pdf", "AWS");
        assert!(matches!(result, Err(Error::DocumentOpen { .. })));
    }

    #[test]
    fn test_process_file_with_text_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(&path, r#"{"pages": [{"tables": [[["A", "B"], ["1", "2"]]]}]}"#).unwrap();

        let options = ProcessOptions::new("AWS").with_extract_mode(ExtractMode::TextOnly);
        assert!(process_file_with_options(&path, options).unwrap().is_empty());
        assert_eq!(process_file(&path, "AWS").unwrap().len(), 1);
    }

    #[test]
    fn test_process_files_reports_failures() {
        let report = process_files(&["/nonexistent/a.pdf"], "AWS");
        assert_eq!(report.record_count(), 0);
        assert_eq!(report.failures.len(), 1);
    }
}
