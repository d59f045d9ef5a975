use std::path::PathBuf;

/// Soft errors produced by the extractor wrapper.
///
/// The `Display` output of each variant is the exact message shown to the
/// user; the CLI prints it in place of the extracted text and still exits 0.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Error: File '{}' not found.", path.display())]
    NotFound { path: PathBuf },
    #[error("Error: File size exceeds 10MB limit.")]
    TooLarge { size: u64 },
    #[error("Error extracting text: {0}")]
    Extraction(String),
    #[error("No text could be extracted from this PDF. It may be image-based or encrypted.")]
    Empty,
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    TooLarge,
    Extraction,
    Empty,
}

impl ExtractError {
    /// The [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::NotFound { .. } => ErrorKind::NotFound,
            ExtractError::TooLarge { .. } => ErrorKind::TooLarge,
            ExtractError::Extraction(_) => ErrorKind::Extraction,
            ExtractError::Empty => ErrorKind::Empty,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Extraction(err.to_string())
    }
}
