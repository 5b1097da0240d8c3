//! Standard fonts: metrics, encoding and selection.
//!
//! Only the standard Type1 fonts are used, so nothing is embedded beyond a
//! font dictionary; glyph widths come from the Adobe metrics compiled into
//! the crate. Fonts are loaded through an ordered list of candidates, the
//! first one that embeds successfully becoming the fallback font used for
//! lines with unusual characters and for the unsupported-characters
//! placeholder.

mod encoding;
mod metrics;

pub use encoding::win_ansi_code;

use crate::error::{Error, Result};
use crate::pdf::PdfWriter;

/// Standard Type1 fonts with built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Helvetica, the sans-serif with the broadest practical coverage
    Helvetica,
    /// Helvetica-Bold
    HelveticaBold,
    /// Times-Roman, the default body font
    TimesRoman,
    /// Courier, monospaced
    Courier,
}

impl StandardFont {
    /// All supported fonts.
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::TimesRoman,
        StandardFont::Courier,
    ];

    /// Resolve a font name, accepting the PDF base font name and a few
    /// common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Helvetica" | "helvetica" => Some(StandardFont::Helvetica),
            "Helvetica-Bold" | "HelveticaBold" | "helvetica-bold" => {
                Some(StandardFont::HelveticaBold)
            }
            "Times-Roman" | "TimesRoman" | "Times" | "times" | "times-roman" => {
                Some(StandardFont::TimesRoman)
            }
            "Courier" | "courier" => Some(StandardFont::Courier),
            _ => None,
        }
    }

    /// PDF base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::Courier => "Courier",
        }
    }

    fn widths(self) -> &'static [u16; 256] {
        match self {
            StandardFont::Helvetica => &metrics::HELVETICA,
            StandardFont::HelveticaBold => &metrics::HELVETICA_BOLD,
            StandardFont::TimesRoman => &metrics::TIMES_ROMAN,
            StandardFont::Courier => &metrics::COURIER,
        }
    }

    /// Advance width of a WinAnsi code in 1/1000 em.
    pub fn glyph_width(self, code: u8) -> u16 {
        self.widths()[code as usize]
    }
}

impl std::fmt::Display for StandardFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_font())
    }
}

/// A font embedded in a [`PdfWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHandle {
    resource: String,
    font: StandardFont,
}

impl FontHandle {
    pub(crate) fn new(resource: String, font: StandardFont) -> Self {
        Self { resource, font }
    }

    /// Resource name used in page content streams (e.g. `F1`).
    pub fn resource_name(&self) -> &str {
        &self.resource
    }

    /// The underlying standard font.
    pub fn font(&self) -> StandardFont {
        self.font
    }

    /// Encode text for a `Tj` operator.
    ///
    /// Fails on the first character the font's encoding cannot represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|ch| {
                win_ansi_code(ch).ok_or_else(|| Error::GlyphEncoding {
                    ch,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Width of `text` in points at the given font size.
    ///
    /// Characters the font cannot encode are measured as `?`, the glyph a
    /// viewer would substitute.
    pub fn width_of_text_at_size(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| {
                let code = win_ansi_code(ch).unwrap_or(b'?');
                u32::from(self.font.glyph_width(code))
            })
            .sum();
        units as f32 * size / 1000.0
    }
}

/// Font loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOptions {
    /// Fallback chain, in order of preference
    pub candidates: Vec<String>,

    /// Preferred font for lines made of common characters
    pub body_font: Option<String>,
}

impl FontOptions {
    /// Create font options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fallback chain.
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Set the body font (`None` uses the fallback font everywhere).
    pub fn with_body_font(mut self, name: Option<impl Into<String>>) -> Self {
        self.body_font = name.map(Into::into);
        self
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            candidates: vec![
                "Helvetica".to_string(),
                "Times-Roman".to_string(),
                "Courier".to_string(),
            ],
            body_font: Some("Times-Roman".to_string()),
        }
    }
}

/// The fonts available to one layout.
#[derive(Debug, Clone)]
pub struct FontSet {
    fallback: FontHandle,
    body: Option<FontHandle>,
}

impl FontSet {
    /// Embed fonts into `writer` following the fallback chain.
    ///
    /// The first candidate that embeds becomes the fallback font. Failing
    /// to embed the body font is not fatal; exhausting the chain is.
    pub fn load(writer: &mut PdfWriter, options: &FontOptions) -> Result<Self> {
        let mut attempted = Vec::new();
        let mut fallback = None;

        for name in &options.candidates {
            match writer.embed_font(name) {
                Ok(handle) => {
                    fallback = Some(handle);
                    break;
                }
                Err(e) => {
                    log::warn!("Could not load font {}: {}", name, e);
                    attempted.push(name.clone());
                }
            }
        }

        let fallback = fallback.ok_or(Error::NoRenderableFont { attempted })?;

        let body = match options.body_font.as_deref() {
            Some(name) => match writer.embed_font(name) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!(
                        "Could not load body font {}, using {}: {}",
                        name,
                        fallback.font(),
                        e
                    );
                    None
                }
            },
            None => None,
        };

        log::debug!(
            "Fonts loaded: fallback {}, body {}",
            fallback.font(),
            body.as_ref().map_or(fallback.font(), |b| b.font())
        );

        Ok(Self { fallback, body })
    }

    /// Pick the font for a line.
    pub fn select(&self, needs_extended: bool) -> &FontHandle {
        match (&self.body, needs_extended) {
            (Some(body), false) => body,
            _ => &self.fallback,
        }
    }

    /// The broad-coverage font used for placeholders.
    pub fn fallback(&self) -> &FontHandle {
        &self.fallback
    }

    /// The body font, if one was loaded.
    pub fn body(&self) -> Option<&FontHandle> {
        self.body.as_ref()
    }
}
