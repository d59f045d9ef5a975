// pdftext: plain-text extraction from PDF files
//
// The heavy lifting is done by the `pdf-extract` crate. This crate guards
// the call (existence and size checks), turns every failure into a typed
// soft error, and routes the rendered result to a file or to stdout.

pub mod error;
pub mod extraction;
pub mod logging;
pub mod outcome;
pub mod output;

// Re-export commonly used types
pub use error::{ErrorKind, ExtractError};
pub use extraction::{extract_pdf_text, PdfExtractor, TextSource, MAX_FILE_SIZE};
pub use outcome::ExtractionResult;
pub use output::{write_banner_text, write_output_file};
