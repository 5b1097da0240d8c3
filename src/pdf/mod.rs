//! Minimal PDF writer for laid-out text.
//!
//! Pages are recorded as lists of content operations and only turned into
//! a `lopdf` document when the writer is saved.

mod writer;

pub use writer::PdfWriter;

use crate::font::FontHandle;

/// Fill color in the DeviceRGB space, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Dark red used for the unsupported-characters placeholder.
    pub const DARK_RED: Color = Color::rgb(0.5, 0.0, 0.0);

    /// Create a color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Placement and appearance of one text run.
///
/// `(x, y)` is the baseline origin in PDF user space, measured from the
/// bottom-left corner of the page.
#[derive(Debug, Clone)]
pub struct TextStyle<'a> {
    pub font: &'a FontHandle,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl<'a> TextStyle<'a> {
    /// Black text at the origin.
    pub fn new(font: &'a FontHandle, size: f32) -> Self {
        Self {
            font,
            size,
            x: 0.0,
            y: 0.0,
            color: Color::BLACK,
        }
    }

    /// Set the baseline origin.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
