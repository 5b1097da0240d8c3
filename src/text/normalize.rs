//! Text normalization ahead of layout.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

use super::transliterate;
use crate::model::NormalizedText;

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

/// Normalize raw text for rendering.
///
/// Composes the text to NFC when `compose` is set, so that decomposed
/// accents become the precomposed Latin-1 letters the standard fonts carry,
/// then transliterates unsupported symbols.
pub fn normalize(text: &str, compose: bool) -> NormalizedText {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let transliterated = if compose {
        let composed: String = text.nfc().collect();
        transliterate(&composed)
    } else {
        transliterate(text)
    };
    NormalizedText::new(transliterated)
}

/// Split text into paragraphs on blank-line boundaries.
///
/// A run of blank lines (lines holding only whitespace) counts as a single
/// boundary.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_break().split(text).collect()
}

/// Collapse all whitespace runs into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
