//! Layout output types.

use serde::{Deserialize, Serialize};

use crate::font::StandardFont;

/// A wrapped run of text plus the font it was measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    /// Text of the line, words joined by single spaces
    pub text: String,

    /// Measured width in points
    pub width: f32,

    /// Font used for measurement, `None` for a caller-supplied measure
    pub font: Option<StandardFont>,
}

impl LayoutLine {
    /// Create a new line.
    pub fn new(text: impl Into<String>, width: f32) -> Self {
        Self {
            text: text.into(),
            width,
            font: None,
        }
    }

    /// Record the font the width was measured with.
    pub fn with_font(mut self, font: StandardFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Whether the line is wider than `max_width`.
    ///
    /// Only a single unsplittable word may overflow.
    pub fn overflows(&self, max_width: f32) -> bool {
        self.width > max_width
    }

    /// Number of words on the line.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').filter(|w| !w.is_empty()).count()
    }
}

/// Statistics collected while laying out documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of input documents laid out
    pub document_count: u32,

    /// Total number of pages produced
    pub page_count: u32,

    /// Number of paragraphs laid out
    pub paragraph_count: u32,

    /// Number of text lines drawn (headers included)
    pub line_count: u32,

    /// Number of words drawn
    pub word_count: u32,

    /// Lines replaced by the unsupported-characters placeholder
    pub placeholder_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a drawn line.
    pub fn add_line(&mut self, words: usize) {
        self.line_count += 1;
        self.word_count += words as u32;
    }

    /// Record a placeholder substitution.
    pub fn add_placeholder(&mut self) {
        self.placeholder_count += 1;
    }

    /// Record a paragraph.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Record a document.
    pub fn add_document(&mut self) {
        self.document_count += 1;
    }

    /// Merge statistics from another layout.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.document_count += other.document_count;
        self.page_count += other.page_count;
        self.paragraph_count += other.paragraph_count;
        self.line_count += other.line_count;
        self.word_count += other.word_count;
        self.placeholder_count += other.placeholder_count;
    }
}
