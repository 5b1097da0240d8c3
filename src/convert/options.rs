//! Conversion options and configuration.

use crate::error::{Error, Result};
use crate::font::{win_ansi_code, FontOptions};
use crate::layout::PageGeometry;

/// Placeholder drawn in place of lines the fonts cannot render.
pub const DEFAULT_PLACEHOLDER: &str = "[Special characters not supported]";

/// Options for text to PDF conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Page size and margins
    pub geometry: PageGeometry,

    /// Body font size in points
    pub font_size: f32,

    /// Line height as a multiple of the font size
    pub line_spacing: f32,

    /// Extra size of the file name header over the body size
    pub header_font_delta: f32,

    /// Font fallback chain and body font
    pub fonts: FontOptions,

    /// Whether per-file PDFs start with a header naming the source file
    /// (combined output always has headers)
    pub headers: bool,

    /// Whether to compose text to NFC before transliteration
    pub normalize_unicode: bool,

    /// Text drawn in place of unrenderable lines
    pub placeholder: String,

    /// Whether page content streams are Flate-compressed
    pub compress_streams: bool,

    /// Deflate level for content streams and archives (0-9)
    pub compression_level: u8,

    /// Document title for the PDF Info dictionary
    pub title: Option<String>,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Use the same margin on every side.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.geometry = self.geometry.with_margin(margin);
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the header size increase.
    pub fn with_header_font_delta(mut self, delta: f32) -> Self {
        self.header_font_delta = delta;
        self
    }

    /// Set font options.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the body font.
    pub fn with_body_font(mut self, name: impl Into<String>) -> Self {
        self.fonts.body_font = Some(name.into());
        self
    }

    /// Enable or disable headers in per-file output.
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Enable or disable NFC composition.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Set the unsupported-characters placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress_streams = compress;
        self
    }

    /// Set the Deflate level.
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Vertical advance per line in points.
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    /// Number of body lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        self.geometry.lines_per_page(self.line_height())
    }

    /// Check that the options describe a usable layout.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;

        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::InvalidOption(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(Error::InvalidOption(format!(
                "Line spacing must be positive, got {}",
                self.line_spacing
            )));
        }
        if !(self.header_font_delta.is_finite() && self.font_size + self.header_font_delta > 0.0)
        {
            return Err(Error::InvalidOption(format!(
                "Header size {} is not positive",
                self.font_size + self.header_font_delta
            )));
        }
        if self.lines_per_page() == 0 {
            return Err(Error::InvalidOption(format!(
                "A {}pt line does not fit in {}pt of usable height",
                self.line_height(),
                self.geometry.usable_height()
            )));
        }
        if self.compression_level > 9 {
            return Err(Error::InvalidOption(format!(
                "Compression level {} is out of range (0-9)",
                self.compression_level
            )));
        }
        if self.fonts.candidates.is_empty() {
            return Err(Error::InvalidOption(
                "At least one font candidate is required".to_string(),
            ));
        }
        if let Some(ch) = self.placeholder.chars().find(|c| win_ansi_code(*c).is_none()) {
            return Err(Error::InvalidOption(format!(
                "Placeholder contains unsupported character {:?}",
                ch
            )));
        }

        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::letter(),
            font_size: 12.0,
            line_spacing: 1.2,
            header_font_delta: 2.0,
            fonts: FontOptions::default(),
            headers: false,
            normalize_unicode: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            compress_streams: true,
            compression_level: 6,
            title: None,
        }
    }
}

/// How a batch of documents is packaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// One PDF holding every document, each preceded by its name
    Combined,

    /// One PDF per document, packaged in a ZIP archive
    #[default]
    PerFileZipped,
}
