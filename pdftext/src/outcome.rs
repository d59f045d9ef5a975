use std::fmt;

use crate::error::ExtractError;

/// Outcome of a single extraction: the text, or the soft error explaining
/// why there is none. Either way it renders to exactly one string.
#[derive(Debug)]
pub struct ExtractionResult(Result<String, ExtractError>);

impl ExtractionResult {
    /// Only the extractor wrapper builds results, so a success is never
    /// blank text.
    pub(crate) fn new(result: Result<String, ExtractError>) -> Self {
        Self(result)
    }

    /// Whether text was extracted.
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    /// The extracted text, if any.
    pub fn text(&self) -> Option<&str> {
        self.0.as_deref().ok()
    }

    /// The soft error, if extraction failed.
    pub fn error(&self) -> Option<&ExtractError> {
        self.0.as_ref().err()
    }

    /// The string shown to the user: the extracted text verbatim, or the
    /// error message.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Unwrap into the underlying `Result`.
    pub fn into_inner(self) -> Result<String, ExtractError> {
        self.0
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(text) => f.write_str(text),
            Err(err) => write!(f, "{err}"),
        }
    }
}
