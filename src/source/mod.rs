//! Input sources and their text extraction

mod epub_parser;
mod pdf_parser;

pub use epub_parser::{extract_epub_text, EpubContent};
pub use pdf_parser::{extract_pdf_text, PdfContent};

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::SourceError;

/// File extensions the batch driver picks up
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "epub", "txt", "md"];

/// A document to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    RawText(String),
    PdfBytes(Vec<u8>),
    EpubBytes(Vec<u8>),
}

impl Source {
    /// Read a file, choosing the variant from its extension.
    ///
    /// `pdf` and `epub` are read as bytes; anything else must be UTF-8 text.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source = match extension(path).as_str() {
            "pdf" => Source::PdfBytes(bytes),
            "epub" => Source::EpubBytes(bytes),
            _ => Source::RawText(
                String::from_utf8(bytes).map_err(|_| SourceError::Utf8 {
                    path: path.to_path_buf(),
                })?,
            ),
        };

        info!("Loaded {} source from {:?}", source.kind(), path);
        Ok(source)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::RawText(_) => "text",
            Source::PdfBytes(_) => "pdf",
            Source::EpubBytes(_) => "epub",
        }
    }

    /// Plain text of the source, before normalization
    pub fn extract_text(&self) -> Result<String, SourceError> {
        match self {
            Source::RawText(text) => Ok(text.clone()),
            Source::PdfBytes(bytes) => Ok(extract_pdf_text(bytes)?.text),
            Source::EpubBytes(bytes) => Ok(extract_epub_text(bytes)?.text()),
        }
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::RawText(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::RawText(text.to_string())
    }
}

/// Whether the batch driver should process `path`
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension(path).as_str())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_raw_text_passthrough() {
        let source = Source::from("Some text.");
        assert_eq!(source.kind(), "text");
        assert_eq!(source.extract_text().unwrap(), "Some text.");
    }

    #[test]
    fn test_from_path_dispatch() {
        let txt = temp_file("source_test.TXT", b"Plain words.");
        let pdf = temp_file("source_test.pdf", b"%PDF-garbage");

        assert_eq!(Source::from_path(&txt).unwrap(), Source::RawText("Plain words.".to_string()));
        assert_eq!(Source::from_path(&pdf).unwrap().kind(), "pdf");

        let _ = fs::remove_file(&txt);
        let _ = fs::remove_file(&pdf);
    }

    #[test]
    fn test_invalid_utf8_text() {
        let path = temp_file("source_test_bad.txt", &[0xff, 0xfe, 0x00]);
        let err = Source::from_path(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, SourceError::Utf8 { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Source::from_path(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_malformed_pdf_bytes() {
        let source = Source::PdfBytes(b"garbage".to_vec());
        assert!(matches!(source.extract_text(), Err(SourceError::Pdf(_))));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("book.PDF")));
        assert!(is_supported(Path::new("notes.md")));
        assert!(!is_supported(Path::new("image.png")));
        assert!(!is_supported(Path::new("README")));
    }
}
