//! # textpdf
//!
//! Plain text to PDF conversion for Rust.
//!
//! Text is transliterated to what the standard PDF fonts can show, wrapped
//! greedily to the page width and paginated onto Letter or A4 pages. Several
//! files can be combined into one PDF or converted one by one into a ZIP
//! archive.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textpdf::{convert_paths, BatchMode, ConvertOptions};
//!
//! fn main() -> textpdf::Result<()> {
//!     let options = ConvertOptions::default();
//!     let output = convert_paths(&["notes.txt"], BatchMode::Combined, &options)?;
//!     output.save(&output.name)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Transliteration**: bullets, arrows, math symbols, Greek letters and
//!   other common symbols become readable ASCII
//! - **Font fallback**: an ordered chain of standard fonts, with a
//!   placeholder for lines no font can encode
//! - **Greedy wrapping**: measured with the real font metrics
//! - **Batches**: combined PDF or per-file PDFs in a ZIP archive
//! - **Async reading**: `async` feature for tokio-based file input

pub mod convert;
pub mod detect;
pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod text;

// Re-export commonly used types
pub use convert::{
    convert_batch, convert_paths, convert_text, Archive, BatchMode, ConversionOutcome,
    ConvertOptions, ConvertedFile,
};
#[cfg(feature = "async")]
pub use convert::convert_paths_async;
pub use error::{Error, Result};
pub use font::{FontHandle, FontOptions, FontSet, StandardFont};
pub use layout::{wrap_line, LayoutEngine, PageGeometry, Paginator};
pub use model::{LayoutLine, LayoutStats, NormalizedText, TextDocument};
pub use pdf::{Color, PdfWriter, TextStyle};
pub use text::{needs_extended_font, transliterate};

use std::path::Path;

/// Convert text to PDF bytes with default options.
///
/// # Example
///
/// ```no_run
/// let bytes = textpdf::text_to_pdf("Hello world").unwrap();
/// std::fs::write("hello.pdf", bytes).unwrap();
/// ```
pub fn text_to_pdf(text: &str) -> Result<Vec<u8>> {
    Ok(convert_text("document.txt", text, &ConvertOptions::default())?.bytes)
}

/// Convert a text file to PDF bytes with default options.
///
/// # Example
///
/// ```no_run
/// let bytes = textpdf::file_to_pdf("notes.txt").unwrap();
/// std::fs::write("notes.pdf", bytes).unwrap();
/// ```
pub fn file_to_pdf<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let document = TextDocument::from_path(path)?;
    let options = ConvertOptions::default();
    let (bytes, _) = layout::layout_document(&document, options.headers, &options)?;
    Ok(bytes)
}

/// Builder for converting text documents.
///
/// # Example
///
/// ```no_run
/// use textpdf::{PageGeometry, TextPdf};
///
/// let output = TextPdf::new()
///     .combined()
///     .with_page_size(PageGeometry::a4())
///     .with_font_size(11.0)
///     .with_title("Meeting notes")
///     .convert_files(&["monday.txt", "tuesday.txt"])?;
/// output.save("notes.pdf")?;
/// # Ok::<(), textpdf::Error>(())
/// ```
pub struct TextPdf {
    options: ConvertOptions,
    mode: BatchMode,
}

impl TextPdf {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
            mode: BatchMode::default(),
        }
    }

    /// Combine every input into one PDF.
    pub fn combined(mut self) -> Self {
        self.mode = BatchMode::Combined;
        self
    }

    /// Convert each input separately and package them in a ZIP archive.
    pub fn per_file(mut self) -> Self {
        self.mode = BatchMode::PerFileZipped;
        self
    }

    /// Set the page size, keeping the current margins.
    pub fn with_page_size(mut self, page: PageGeometry) -> Self {
        let current = self.options.geometry;
        self.options.geometry = PageGeometry {
            width: page.width,
            height: page.height,
            ..current
        };
        self
    }

    /// Use the same margin on every side.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.options = self.options.with_margin(margin);
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.options = self.options.with_font_size(size);
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.options = self.options.with_line_spacing(spacing);
        self
    }

    /// Set the body font.
    pub fn with_body_font(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_body_font(name);
        self
    }

    /// Replace the font fallback chain.
    pub fn with_font_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.fonts = self.options.fonts.with_candidates(candidates);
        self
    }

    /// Start per-file PDFs with the source file name.
    pub fn with_headers(mut self) -> Self {
        self.options = self.options.with_headers(true);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Store content streams uncompressed.
    pub fn uncompressed(mut self) -> Self {
        self.options = self.options.with_compression(false);
        self
    }

    /// Set the Deflate level for streams and archives.
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.options = self.options.with_compression_level(level);
        self
    }

    /// Conversion options built so far.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Batch mode in use.
    pub fn mode(&self) -> BatchMode {
        self.mode
    }

    /// Read and convert files.
    pub fn convert_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<ConvertedFile> {
        convert_paths(paths, self.mode, &self.options)
    }

    /// Convert documents already in memory.
    pub fn convert_documents(&self, documents: &[TextDocument]) -> Result<ConvertedFile> {
        convert_batch(documents, self.mode, &self.options)
    }

    /// Convert a single text to a PDF, regardless of the batch mode.
    pub fn convert_text(&self, name: &str, text: &str) -> Result<ConvertedFile> {
        convert_text(name, text, &self.options)
    }
}

impl Default for TextPdf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = TextPdf::default();
        assert_eq!(builder.mode(), BatchMode::PerFileZipped);
        assert_eq!(builder.options().font_size, 12.0);
        assert!(builder.options().compress_streams);
    }

    #[test]
    fn test_builder_chained() {
        let builder = TextPdf::new()
            .combined()
            .with_margin(36.0)
            .with_page_size(PageGeometry::a4())
            .with_font_size(10.0)
            .with_line_spacing(1.5)
            .with_body_font("Courier")
            .with_font_candidates(["Courier", "Helvetica"])
            .with_headers()
            .with_title("Notes")
            .uncompressed()
            .with_compression_level(9);

        let options = builder.options();
        assert_eq!(builder.mode(), BatchMode::Combined);
        assert_eq!(options.geometry.width, 595.28);
        assert_eq!(options.geometry.margin_top, 36.0);
        assert_eq!(options.font_size, 10.0);
        assert_eq!(options.fonts.candidates, vec!["Courier", "Helvetica"]);
        assert_eq!(options.fonts.body_font.as_deref(), Some("Courier"));
        assert!(options.headers);
        assert!(!options.compress_streams);
        assert_eq!(options.compression_level, 9);
    }

    #[test]
    fn test_text_to_pdf() {
        let bytes = text_to_pdf("Hello world").unwrap();
        assert!(detect::is_pdf_bytes(&bytes));
    }

    #[test]
    fn test_text_to_pdf_empty() {
        assert!(text_to_pdf("   ").is_err());
    }

    #[test]
    fn test_builder_convert_text() {
        let output = TextPdf::new().convert_text("a.txt", "hi").unwrap();
        assert_eq!(output.name, "a.pdf");
        assert_eq!(output.stats.page_count, 1);
    }
}
