//! WinAnsiEncoding for the standard Type1 fonts.

/// Characters placed in the 0x80-0x9F range by WinAnsiEncoding.
///
/// Index `i` holds the character for code `0x80 + i`; `None` marks the
/// five undefined codes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 Euro
    None,             // 0x81
    Some('\u{201A}'), // 0x82 quotesinglbase
    Some('\u{0192}'), // 0x83 florin
    Some('\u{201E}'), // 0x84 quotedblbase
    Some('\u{2026}'), // 0x85 ellipsis
    Some('\u{2020}'), // 0x86 dagger
    Some('\u{2021}'), // 0x87 daggerdbl
    Some('\u{02C6}'), // 0x88 circumflex
    Some('\u{2030}'), // 0x89 perthousand
    Some('\u{0160}'), // 0x8A Scaron
    Some('\u{2039}'), // 0x8B guilsinglleft
    Some('\u{0152}'), // 0x8C OE
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E Zcaron
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 quoteleft
    Some('\u{2019}'), // 0x92 quoteright
    Some('\u{201C}'), // 0x93 quotedblleft
    Some('\u{201D}'), // 0x94 quotedblright
    Some('\u{2022}'), // 0x95 bullet
    Some('\u{2013}'), // 0x96 endash
    Some('\u{2014}'), // 0x97 emdash
    Some('\u{02DC}'), // 0x98 tilde
    Some('\u{2122}'), // 0x99 trademark
    Some('\u{0161}'), // 0x9A scaron
    Some('\u{203A}'), // 0x9B guilsinglright
    Some('\u{0153}'), // 0x9C oe
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E zcaron
    Some('\u{0178}'), // 0x9F Ydieresis
];

/// Map a character to its WinAnsiEncoding code.
///
/// Control characters have no glyph and are not encodable.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match cp {
        0x20..=0x7E => Some(cp as u8),
        0xA0..=0xFF => Some(cp as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|c| *c == Some(ch))
            .map(|i| 0x80 + i as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_latin1() {
        assert_eq!(win_ansi_code('A'), Some(65));
        assert_eq!(win_ansi_code(' '), Some(32));
        assert_eq!(win_ansi_code('\u{00E9}'), Some(0xE9));
        assert_eq!(win_ansi_code('\u{00A0}'), Some(0xA0));
    }

    #[test]
    fn test_high_range() {
        assert_eq!(win_ansi_code('\u{20AC}'), Some(0x80));
        assert_eq!(win_ansi_code('\u{2022}'), Some(0x95));
        assert_eq!(win_ansi_code('\u{0178}'), Some(0x9F));
    }

    #[test]
    fn test_unencodable() {
        assert_eq!(win_ansi_code('\t'), None);
        assert_eq!(win_ansi_code('\u{007F}'), None);
        assert_eq!(win_ansi_code('\u{0085}'), None);
        assert_eq!(win_ansi_code('\u{4E2D}'), None);
        assert_eq!(win_ansi_code('\u{0141}'), None);
    }
}
