//! Error types for textpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for textpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text to PDF conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file has no content besides whitespace.
    #[error("File {0} is empty")]
    EmptyInput(String),

    /// The input is not plain text (binary data, an existing PDF, ...).
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A batch was started without any input documents.
    #[error("No text files provided")]
    NoInput,

    /// A single font candidate could not be embedded.
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// Every font candidate failed to embed.
    #[error("No renderable font available (tried: {})", .attempted.join(", "))]
    NoRenderableFont {
        /// Candidate names in the order they were attempted
        attempted: Vec<String>,
    },

    /// A character cannot be encoded for the selected font.
    #[error("Cannot encode {ch:?} in line {text:?}")]
    GlyphEncoding {
        /// The offending character
        ch: char,
        /// The line that was being drawn
        text: String,
    },

    /// Error building or serializing the PDF document.
    #[error("PDF write error: {0}")]
    Pdf(String),

    /// Error packaging outputs into an archive.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Error serializing a conversion report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Conversion options that cannot produce a layout.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A failure while processing one document of a batch.
    #[error("Error processing {name}: {source}")]
    Document {
        /// Source name of the failing document
        name: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the name of the document being processed.
    ///
    /// Errors that already name a document are returned unchanged.
    pub fn in_document(self, name: impl Into<String>) -> Self {
        match self {
            Error::Document { .. } => self,
            other => Error::Document {
                name: name.into(),
                source: Box::new(other),
            },
        }
    }

    /// Whether the error is recovered locally during layout.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::GlyphEncoding { .. })
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}
