//! Page geometry and the vertical cursor.

use crate::error::{Error, Result};
use crate::font::FontHandle;
use crate::pdf::{Color, PdfWriter, TextStyle};

/// Tolerance for comparing accumulated float positions against margins.
const EPSILON: f32 = 1e-3;

/// Page size and margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    /// Default margin on every side.
    pub const DEFAULT_MARGIN: f32 = 50.0;

    /// A page of the given size with default margins.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin_top: Self::DEFAULT_MARGIN,
            margin_bottom: Self::DEFAULT_MARGIN,
            margin_left: Self::DEFAULT_MARGIN,
            margin_right: Self::DEFAULT_MARGIN,
        }
    }

    /// US Letter, 612 x 792.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// ISO A4, 595.28 x 841.89.
    pub fn a4() -> Self {
        Self::new(595.28, 841.89)
    }

    /// Look up a page size by name (`letter` or `a4`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "letter" => Some(Self::letter()),
            "a4" => Some(Self::a4()),
            _ => None,
        }
    }

    /// Use the same margin on every side.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    /// Width available for text.
    pub fn usable_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height available for text.
    pub fn usable_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Baseline of the first line on a page.
    pub fn top(&self) -> f32 {
        self.height - self.margin_top
    }

    /// Number of lines of the given height that fit on one page.
    pub fn lines_per_page(&self, line_height: f32) -> usize {
        if line_height <= 0.0 {
            return 0;
        }
        ((self.usable_height() / line_height) + EPSILON).floor().max(0.0) as usize
    }

    /// Reject geometries that leave no room for text.
    pub fn validate(&self) -> Result<()> {
        let margins = [
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(Error::InvalidOption(
                "Page margins must be non-negative".to_string(),
            ));
        }
        if !(self.usable_width() > 0.0) {
            return Err(Error::InvalidOption(format!(
                "No usable width: page is {}pt wide with {}pt of side margins",
                self.width,
                self.margin_left + self.margin_right
            )));
        }
        if !(self.usable_height() > 0.0) {
            return Err(Error::InvalidOption(format!(
                "No usable height: page is {}pt tall with {}pt of top and bottom margins",
                self.height,
                self.margin_top + self.margin_bottom
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Position of the next baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// Index of the current page in the writer
    pub page: usize,
    /// Baseline of the next line
    pub y: f32,
}

/// Places lines top to bottom, starting new pages as they fill up.
///
/// The cursor never drops below the bottom margin.
#[derive(Debug, Clone)]
pub struct Paginator {
    geometry: PageGeometry,
    line_height: f32,
    cursor: Option<PageCursor>,
}

impl Paginator {
    /// Create a paginator with no current page.
    pub fn new(geometry: PageGeometry, line_height: f32) -> Self {
        Self {
            geometry,
            line_height,
            cursor: None,
        }
    }

    /// Page geometry in use.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Height advanced per line.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Current cursor, `None` before the first page.
    pub fn cursor(&self) -> Option<PageCursor> {
        self.cursor
    }

    /// Add a page and move the cursor to its top.
    pub fn start_page(&mut self, writer: &mut PdfWriter) -> usize {
        let page = writer.add_page(self.geometry.width, self.geometry.height);
        log::debug!("Starting page {}", page + 1);
        self.cursor = Some(PageCursor {
            page,
            y: self.geometry.top(),
        });
        page
    }

    /// Make sure a page exists, starting the first one if needed.
    pub fn ensure_page(&mut self, writer: &mut PdfWriter) -> usize {
        match self.cursor {
            Some(cursor) => cursor.page,
            None => self.start_page(writer),
        }
    }

    /// Make room for `height` points, breaking the page when the current
    /// one cannot hold them. Returns the page to draw on.
    pub fn ensure_space(&mut self, writer: &mut PdfWriter, height: f32) -> usize {
        match self.cursor {
            Some(cursor) if cursor.y - height >= self.geometry.margin_bottom - EPSILON => {
                cursor.page
            }
            _ => self.start_page(writer),
        }
    }

    /// Draw one line at the cursor and advance by the line height.
    ///
    /// On failure nothing is drawn and the cursor does not move, so the
    /// caller can draw a replacement at the same position.
    pub fn draw_line(
        &mut self,
        writer: &mut PdfWriter,
        text: &str,
        font: &FontHandle,
        size: f32,
        color: Color,
    ) -> Result<()> {
        let page = self.ensure_space(writer, self.line_height);
        let y = self.cursor.map_or(self.geometry.top(), |c| c.y);

        let style = TextStyle::new(font, size)
            .at(self.geometry.margin_left, y)
            .with_color(color);
        writer.draw_text(page, text, &style)?;

        self.advance(self.line_height);
        Ok(())
    }

    /// Leave a vertical gap of `height` points.
    ///
    /// The gap is clamped at the bottom margin; the next drawn line breaks
    /// the page if it no longer fits.
    pub fn skip(&mut self, height: f32) {
        self.advance(height);
    }

    fn advance(&mut self, height: f32) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.y = (cursor.y - height).max(self.geometry.margin_bottom);
        }
    }
}
