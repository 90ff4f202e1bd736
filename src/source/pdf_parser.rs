use pdf_extract::extract_text_from_mem;
use tracing::{info, warn};

use crate::error::SourceError;

/// Text recovered from a PDF
#[derive(Debug, Clone)]
pub struct PdfContent {
    pub text: String,
    pub pages: usize,
    pub has_text: bool,
}

/// Extract text from PDF bytes.
///
/// A document without a text layer (a scan) is not an error: it comes back
/// with `has_text == false` and whatever whitespace the extractor produced.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<PdfContent, SourceError> {
    info!("Extracting text from PDF ({} bytes)", bytes.len());

    let text = extract_text_from_mem(bytes).map_err(|e| SourceError::Pdf(e.to_string()))?;
    let has_text = !text.trim().is_empty();

    if !has_text {
        warn!("PDF appears to be scanned or has no extractable text");
    }

    // Pages are separated by form feeds
    let pages = text.split('\x0C').filter(|page| !page.trim().is_empty()).count();

    info!("Extracted {} characters from {} pages", text.len(), pages);

    Ok(PdfContent {
        text,
        pages,
        has_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = extract_pdf_text(b"this is plain text, not a PDF").unwrap_err();
        assert!(matches!(err, SourceError::Pdf(_)));
    }

    #[test]
    fn test_rejects_empty_bytes() {
        assert!(extract_pdf_text(&[]).is_err());
    }
}
