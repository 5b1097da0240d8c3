//! Character classification for font selection.

/// Unicode blocks the body font is expected to handle, as inclusive ranges.
///
/// Lines made only of these characters are laid out with the body font;
/// anything else asks for the font with the broadest glyph table.
const COMMON_BLOCKS: &[(u32, u32)] = &[
    (0x0000, 0x007F), // Basic Latin
    (0x00A0, 0x00FF), // Latin-1 Supplement (without C1 controls)
    (0x0100, 0x017F), // Latin Extended-A
    (0x0180, 0x024F), // Latin Extended-B
    (0x0250, 0x02AF), // IPA Extensions
    (0x02B0, 0x02FF), // Spacing Modifier Letters
    (0x0300, 0x036F), // Combining Diacritical Marks
    (0x0370, 0x03FF), // Greek and Coptic
    (0x0400, 0x04FF), // Cyrillic
    (0x0500, 0x052F), // Cyrillic Supplement
    (0x1E00, 0x1EFF), // Latin Extended Additional
    (0x1F00, 0x1FFF), // Greek Extended
    (0x2000, 0x206F), // General Punctuation
    (0x2070, 0x209F), // Superscripts and Subscripts
    (0x20A0, 0x20CF), // Currency Symbols
    (0x2100, 0x214F), // Letterlike Symbols
    (0x2150, 0x218F), // Number Forms
    (0x2190, 0x21FF), // Arrows
    (0x2200, 0x22FF), // Mathematical Operators
    (0x2300, 0x23FF), // Miscellaneous Technical
    (0x2500, 0x257F), // Box Drawing
    (0x2580, 0x259F), // Block Elements
    (0x25A0, 0x25FF), // Geometric Shapes
    (0x2600, 0x26FF), // Miscellaneous Symbols
    (0x2700, 0x27BF), // Dingbats
];

/// Whether a character belongs to one of the common blocks.
pub fn is_common_char(ch: char) -> bool {
    let cp = ch as u32;
    COMMON_BLOCKS
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}

/// Whether a line contains characters outside the common blocks.
pub fn needs_extended_font(line: &str) -> bool {
    line.chars().any(|ch| !is_common_char(ch))
}
