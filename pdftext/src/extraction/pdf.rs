// PDF extraction backed by the pdf-extract crate

use std::path::Path;

use anyhow::{anyhow, Result};

use super::TextSource;

/// Production [`TextSource`] that delegates to `pdf_extract::extract_text`.
///
/// pdf-extract panics on some malformed documents instead of returning an
/// error; `extract_pdf_text` catches those.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextSource for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        pdf_extract::extract_text(path).map_err(|err| anyhow!("{err}"))
    }
}
