//! Text layout: wrapping, pagination and font selection.
//!
//! A [`LayoutEngine`] owns one [`PdfWriter`], one [`FontSet`] and one
//! [`Paginator`]. Documents added to the same engine share the page flow,
//! which is how combined batches are built; per-file conversion uses a
//! fresh engine for every document.

mod paginate;
mod wrap;

pub use paginate::{PageCursor, PageGeometry, Paginator};
pub use wrap::{logical_lines, wrap_line, wrap_with_font};

use crate::convert::ConvertOptions;
use crate::error::Result;
use crate::font::{FontHandle, FontSet};
use crate::model::{LayoutStats, TextDocument};
use crate::pdf::{Color, PdfWriter};
use crate::text::{needs_extended_font, normalize, split_paragraphs};

/// Lays out documents into a PDF.
pub struct LayoutEngine<'a> {
    options: &'a ConvertOptions,
    writer: PdfWriter,
    fonts: FontSet,
    paginator: Paginator,
    stats: LayoutStats,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine and load its fonts.
    ///
    /// Fails when no font of the fallback chain can be embedded.
    pub fn new(options: &'a ConvertOptions) -> Result<Self> {
        let compression = options
            .compress_streams
            .then_some(options.compression_level);
        let mut writer = PdfWriter::new()
            .with_title(options.title.as_deref())
            .with_compression(compression);
        let fonts = FontSet::load(&mut writer, &options.fonts)?;
        let paginator = Paginator::new(options.geometry, options.line_height());

        Ok(Self {
            options,
            writer,
            fonts,
            paginator,
            stats: LayoutStats::new(),
        })
    }

    /// Lay out one document, continuing on the current page.
    ///
    /// With `header` set, the document name is drawn first at the header
    /// size, followed by a paragraph gap.
    pub fn add_document(&mut self, document: &TextDocument, header: bool) -> Result<()> {
        log::debug!(
            "Laying out {} ({} bytes)",
            document.name(),
            document.text().len()
        );

        let normalized = normalize(document.text(), self.options.normalize_unicode);
        let line_height = self.options.line_height();
        self.paginator.ensure_page(&mut self.writer);

        if header {
            let size = self.options.font_size + self.options.header_font_delta;
            let font = self.fonts.select(needs_extended_font(document.name())).clone();
            self.draw(document.name(), &font, size)?;
            self.paginator.skip(line_height);
        }

        for paragraph in split_paragraphs(normalized.as_str()) {
            let paragraph = paragraph.trim_end();
            if paragraph.trim().is_empty() {
                continue;
            }
            self.stats.add_paragraph();

            for line in logical_lines(paragraph) {
                if line.is_empty() {
                    self.paginator.skip(line_height);
                    continue;
                }
                self.draw_wrapped(line)?;
            }

            self.paginator.skip(line_height);
        }

        self.stats.add_document();
        Ok(())
    }

    /// Serialize the PDF and return it with the final statistics.
    pub fn finish(mut self) -> Result<(Vec<u8>, LayoutStats)> {
        self.stats.page_count = self.writer.page_count() as u32;
        let bytes = self.writer.save()?;
        Ok((bytes, self.stats))
    }

    fn draw_wrapped(&mut self, line: &str) -> Result<()> {
        let font = self.fonts.select(needs_extended_font(line)).clone();
        let size = self.options.font_size;
        let max_width = self.paginator.geometry().usable_width();

        for wrapped in wrap_with_font(line, max_width, &font, size) {
            self.draw(&wrapped.text, &font, size)?;
        }
        Ok(())
    }

    /// Draw a line, substituting the placeholder when the font cannot
    /// encode it.
    fn draw(&mut self, text: &str, font: &FontHandle, size: f32) -> Result<()> {
        match self
            .paginator
            .draw_line(&mut self.writer, text, font, size, Color::BLACK)
        {
            Ok(()) => {
                self.stats.add_line(text.split_whitespace().count());
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("{}; drawing placeholder instead", e);
                self.paginator.draw_line(
                    &mut self.writer,
                    &self.options.placeholder,
                    self.fonts.fallback(),
                    size,
                    Color::DARK_RED,
                )?;
                self.stats.add_placeholder();
                self.stats.add_line(0);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Lay out a single document into a standalone PDF.
pub fn layout_document(
    document: &TextDocument,
    header: bool,
    options: &ConvertOptions,
) -> Result<(Vec<u8>, LayoutStats)> {
    let mut engine = LayoutEngine::new(options)?;
    engine.add_document(document, header)?;
    engine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontOptions;

    fn doc(text: &str) -> TextDocument {
        TextDocument::new("notes.txt", text).unwrap()
    }

    #[test]
    fn test_single_line_document() {
        let options = ConvertOptions::default();
        let (bytes, stats) = layout_document(&doc("Hello world"), false, &options).unwrap();
        assert!(crate::detect::is_pdf_bytes(&bytes));
        assert_eq!(stats.page_count, 1);
        assert_eq!(stats.line_count, 1);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.placeholder_count, 0);
    }

    #[test]
    fn test_header_counts_as_line() {
        let options = ConvertOptions::default();
        let (_, stats) = layout_document(&doc("Body"), true, &options).unwrap();
        assert_eq!(stats.line_count, 2);
    }

    #[test]
    fn test_page_count_matches_lines_per_page() {
        let options = ConvertOptions::default();
        let per_page = options.lines_per_page();
        let text = (0..per_page + 1)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let (_, stats) = layout_document(&doc(&text), false, &options).unwrap();
        assert_eq!(stats.line_count as usize, per_page + 1);
        assert_eq!(stats.page_count, 2);
    }

    #[test]
    fn test_placeholder_for_unencodable_line() {
        let options = ConvertOptions::default();
        let (_, stats) =
            layout_document(&doc("plain\n\u{4E2D}\u{6587}\nplain again"), false, &options)
                .unwrap();
        assert_eq!(stats.placeholder_count, 1);
        assert_eq!(stats.line_count, 3);
    }

    #[test]
    fn test_shared_engine_continues_page_flow() {
        let options = ConvertOptions::default();
        let mut engine = LayoutEngine::new(&options).unwrap();
        engine.add_document(&doc("one"), true).unwrap();
        engine.add_document(&doc("two"), true).unwrap();
        let (_, stats) = engine.finish().unwrap();
        assert_eq!(stats.document_count, 2);
        assert_eq!(stats.page_count, 1);
    }

    #[test]
    fn test_engine_font_failure() {
        let options = ConvertOptions::default()
            .with_fonts(FontOptions::new().with_candidates(["NoSuchFont"]));
        assert!(LayoutEngine::new(&options).is_err());
    }

    #[test]
    fn test_blank_paragraphs_skipped() {
        let options = ConvertOptions::default();
        let (_, stats) = layout_document(&doc("\n\n\nfirst\n\n\n\nsecond\n"), false, &options)
            .unwrap();
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.line_count, 2);
    }
}
