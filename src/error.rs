//! Error types for corpusprep.

use std::io;
use thiserror::Error;

/// Result type alias for corpusprep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning documents into records.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file format is not recognized by any document parser.
    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// A user-supplied rewrite pattern failed to compile.
    #[error("Invalid rewrite pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A document could not be opened or decoded at all.
    #[error("Failed to open {document}")]
    DocumentOpen {
        /// Identifier of the failing document (usually its path)
        document: String,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an error as a document-level open failure.
    pub fn document_open(document: impl Into<String>, source: Error) -> Self {
        Error::DocumentOpen {
            document: document.into(),
            source: Box::new(source),
        }
    }

    /// Render the error followed by each of its causes, `: ` separated.
    pub fn display_chain(&self) -> String {
        display_chain(self)
    }
}

/// Render any error followed by each of its causes, `: ` separated.
pub fn display_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cause = e.source();
    }
    out
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_document_open_names_document_and_cause() {
        use std::error::Error as _;

        let err = Error::document_open("manual.pdf", Error::PdfParse("bad xref".into()));
        assert_eq!(err.to_string(), "Failed to open manual.pdf");
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("PDF parsing error: bad xref".to_string())
        );
        assert_eq!(
            err.display_chain(),
            "Failed to open manual.pdf: PDF parsing error: bad xref"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
