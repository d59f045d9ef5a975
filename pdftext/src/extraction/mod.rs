// Extractor wrapper
//
// Validates the input path, hands the file to a `TextSource` and folds
// every failure into an `ExtractError`. Nothing escapes this boundary:
// the caller always receives an `ExtractionResult`.

pub mod pdf;

pub use pdf::PdfExtractor;

use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::ExtractError;
use crate::outcome::ExtractionResult;

/// Hard ceiling on the input size, in bytes.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// The external extraction routine: turn the file at `path` into text.
pub trait TextSource {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String>;
}

/// Extract text from the PDF at `pdf_path` using `source`.
pub fn extract_pdf_text(pdf_path: impl AsRef<Path>, source: &dyn TextSource) -> ExtractionResult {
    ExtractionResult::new(guarded_extract(pdf_path.as_ref(), source))
}

fn guarded_extract(path: &Path, source: &dyn TextSource) -> Result<String, ExtractError> {
    info!(path = %path.display(), "attempting to extract text");

    if !path.exists() {
        error!(path = %path.display(), "file not found");
        return Err(ExtractError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let size = fs::metadata(path)
        .map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to read file metadata");
            err
        })?
        .len();
    let size_kb = format!("{:.2}", size as f64 / 1024.0);
    info!(size_kb = %size_kb, "file size");

    if size > MAX_FILE_SIZE {
        error!(size, limit = MAX_FILE_SIZE, "file size exceeds limit");
        return Err(ExtractError::TooLarge { size });
    }

    info!("starting text extraction");
    let text = match panic::catch_unwind(AssertUnwindSafe(|| source.extract_text(path))) {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            error!(path = %path.display(), error = ?err, "error extracting text");
            return Err(ExtractError::Extraction(format!("{err:#}")));
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(path = %path.display(), panic = %message, "text extraction panicked");
            return Err(ExtractError::Extraction(format!(
                "extraction panicked: {message}"
            )));
        }
    };
    info!(chars = text.chars().count(), "extraction complete");

    if text.trim().is_empty() {
        warn!("no text was extracted from the PDF");
        return Err(ExtractError::Empty);
    }

    Ok(text)
}

/// Best-effort message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
