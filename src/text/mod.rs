//! Text preparation: transliteration, classification and normalization.

mod classify;
mod normalize;
mod transliterate;

pub use classify::{is_common_char, needs_extended_font};
pub use normalize::{collapse_whitespace, normalize, split_paragraphs};
pub use transliterate::{replacement, transliterate, TRANSLITERATIONS};
