//! PDF document parser using lopdf.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};

use crate::detect::{detect_format_from_path, SourceFormat};
use crate::error::{Error, Result};
use crate::model::RawTable;

use super::backend::{DocumentBackend, DocumentParser};

/// PDF parser backed by lopdf's text extraction.
///
/// lopdf has no table detection, so pages opened by this parser never
/// yield tables. Use a page dump from an external extractor when tables
/// matter.
#[derive(Debug, Clone, Default)]
pub struct PdfParser {
    _private: (),
}

impl PdfParser {
    /// Create a new PDF parser.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Open a PDF file.
    pub fn open_file<P: AsRef<Path>>(&self, path: P) -> Result<PdfBackend> {
        let path = path.as_ref();

        match detect_format_from_path(path)? {
            SourceFormat::Pdf { .. } => {}
            other => {
                return Err(Error::UnknownFormat(format!(
                    "{} is a {}, not a PDF",
                    path.display(),
                    other
                )))
            }
        }

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        PdfBackend::new(doc)
    }

    /// Open a PDF from bytes.
    pub fn open_bytes(&self, data: &[u8]) -> Result<PdfBackend> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        PdfBackend::new(doc)
    }
}

impl DocumentParser for PdfParser {
    fn name(&self) -> &str {
        "pdf"
    }

    fn open(&self, path: &Path) -> Result<Box<dyn DocumentBackend>> {
        Ok(Box::new(self.open_file(path)?))
    }
}

/// An opened PDF document.
pub struct PdfBackend {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfBackend {
    fn new(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        let pages = doc.get_pages();
        log::debug!("Opened PDF {} with {} pages", doc.version, pages.len());
        Ok(Self { doc, pages })
    }

    /// Get PDF version.
    pub fn version(&self) -> &str {
        &self.doc.version
    }
}

impl DocumentBackend for PdfBackend {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_text(&self, page: u32) -> Result<Option<String>> {
        self.check_page(page)?;
        let text = self
            .doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn extract_tables(&self, page: u32) -> Result<Vec<RawTable>> {
        self.check_page(page)?;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{DocumentProcessor, ProcessOptions};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Write;

    /// Build a one-page PDF whose page shows `text` in a base-14 font.
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_open_bytes_extracts_page_text() {
        let data = one_page_pdf("Operational excellence guidance for every workload");
        let backend = PdfParser::new().open_bytes(&data).unwrap();

        assert_eq!(backend.version(), "1.5");
        assert_eq!(backend.page_count(), 1);
        let text = backend.extract_text(1).unwrap().unwrap();
        assert!(text.contains("Operational excellence guidance"));
        assert!(backend.extract_tables(1).unwrap().is_empty());
        assert!(matches!(
            backend.extract_text(2),
            Err(Error::PageOutOfRange(2, 1))
        ));
    }

    #[test]
    fn test_process_pdf_file_emits_text_record() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&one_page_pdf(
            "Operational excellence guidance for every workload",
        ))
        .unwrap();

        let processor = DocumentProcessor::new(ProcessOptions::new("AWS"));
        let output = processor.process(&PdfParser::new(), file.path()).unwrap();

        assert_eq!(output.records.len(), 1);
        let record = &output.records[0];
        assert_eq!(record.field("Type"), Some("Text"));
        assert_eq!(record.field("Page"), Some("1"));
        assert!(record.text.contains("Operational excellence guidance"));
    }

    #[test]
    fn test_open_bytes_rejects_garbage() {
        let parser = PdfParser::new();
        assert!(parser.open_bytes(b"not a pdf").is_err());
        assert!(parser.open_bytes(b"").is_err());
    }

    #[test]
    fn test_open_file_rejects_non_pdf() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"pages\": []}}").unwrap();
        let result = PdfParser::new().open(file.path());
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_open_missing_file() {
        let result = PdfParser::new().open(Path::new("/nonexistent/manual.pdf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parser_name() {
        assert_eq!(PdfParser::new().name(), "pdf");
    }
}
