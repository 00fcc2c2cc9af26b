//! Source format detection.
//!
//! Decides which document parser handles a given input, from magic bytes
//! first and the file extension second.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Input formats understood by the built-in parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// PDF document with its header version (e.g., "1.7")
    Pdf {
        /// PDF version from the `%PDF-x.y` header
        version: String,
    },
    /// JSON page dump produced by an external extractor
    PageDump,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Pdf { version } => write!(f, "PDF {}", version),
            SourceFormat::PageDump => write!(f, "page dump"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3;
const HEADER_LEN: usize = 16;

/// Detect the source format of a file.
///
/// Reads at most the first 16 bytes. A file that is not a PDF but carries a
/// `.json` extension is treated as a page dump.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;

    match detect_format_from_bytes(&header) {
        Ok(format) => Ok(format),
        Err(Error::UnknownFormat(_)) if has_extension(path, "json") => Ok(SourceFormat::PageDump),
        Err(Error::UnknownFormat(_)) => Err(Error::UnknownFormat(path.display().to_string())),
        Err(e) => Err(e),
    }
}

/// Detect the source format from leading bytes.
///
/// Only PDF can be recognised from content alone; a JSON object start is
/// reported as a page dump.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(PDF_MAGIC) {
        if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
            return Err(Error::UnknownFormat("truncated PDF header".to_string()));
        }
        let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
        let version = String::from_utf8_lossy(version_bytes).to_string();
        if !is_valid_version(&version) {
            return Err(Error::UnsupportedVersion(version));
        }
        return Ok(SourceFormat::Pdf { version });
    }

    let first = data.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'{') {
        return Ok(SourceFormat::PageDump);
    }

    Err(Error::UnknownFormat("unrecognised header".to_string()))
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(SourceFormat::Pdf { .. }))
}
