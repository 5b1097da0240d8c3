//! Symbol transliteration for the standard PDF fonts.
//!
//! The standard Type1 fonts only cover WinAnsiEncoding. Symbols outside of
//! it are replaced, one character at a time, with ASCII approximations so
//! that a line can still be drawn. Characters without an entry pass through
//! unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Replacement table: `(character, ASCII replacement)`.
///
/// Every replacement is pure ASCII, which keeps [`transliterate`] idempotent.
pub const TRANSLITERATIONS: &[(char, &str)] = &[
    // Bullets and geometric shapes used as list markers
    ('\u{25CF}', "*"), // ●
    ('\u{2022}', "*"), // •
    ('\u{25CB}', "*"), // ○
    ('\u{25E6}', "*"), // ◦
    ('\u{25A0}', "*"), // ■
    ('\u{25A1}', "*"), // □
    ('\u{25AA}', "*"), // ▪
    ('\u{25AB}', "*"), // ▫
    ('\u{25B2}', "*"), // ▲
    ('\u{25B3}', "*"), // △
    ('\u{25C6}', "*"), // ◆
    ('\u{25C7}', "*"), // ◇
    ('\u{2605}', "*"), // ★
    ('\u{2606}', "*"), // ☆
    ('\u{2023}', "*"), // ‣
    ('\u{2043}', "-"), // ⁃
    ('\u{2219}', "*"), // ∙
    ('\u{22C5}', "*"), // ⋅
    ('\u{2713}', "v"), // ✓
    ('\u{2714}', "v"), // ✔
    ('\u{2717}', "x"), // ✗
    ('\u{2718}', "x"), // ✘
    // Arrows
    ('\u{2192}', "->"),
    ('\u{2190}', "<-"),
    ('\u{2191}', "^"),
    ('\u{2193}', "v"),
    ('\u{2194}', "<->"),
    ('\u{21D2}', "=>"),
    ('\u{21D0}', "<="),
    ('\u{21D4}', "<=>"),
    // Dashes
    ('\u{2014}', "--"), // em dash
    ('\u{2015}', "--"), // horizontal bar
    ('\u{2013}', "-"),  // en dash
    ('\u{2012}', "-"),  // figure dash
    ('\u{2010}', "-"),  // hyphen
    ('\u{2011}', "-"),  // non-breaking hyphen
    ('\u{2212}', "-"),  // minus sign
    // Quotes
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{201F}', "\""),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', "'"),
    ('\u{201B}', "'"),
    ('\u{2032}', "'"),
    ('\u{2033}', "\""),
    ('\u{00AB}', "<<"),
    ('\u{00BB}', ">>"),
    ('\u{2039}', "<"),
    ('\u{203A}', ">"),
    ('\u{2026}', "..."),
    // Comparison and arithmetic
    ('\u{2264}', "<="),
    ('\u{2265}', ">="),
    ('\u{2260}', "!="),
    ('\u{2248}', "~"),
    ('\u{2245}', "~="),
    ('\u{2261}', "==="),
    ('\u{00D7}', "x"),
    ('\u{00F7}', "/"),
    ('\u{00B1}', "+/-"),
    ('\u{2213}', "-/+"),
    ('\u{2218}', "o"),
    // Logic and sets
    ('\u{2200}', "for all"),
    ('\u{2203}', "exists"),
    ('\u{2204}', "!exists"),
    ('\u{2205}', "empty"),
    ('\u{2208}', "in"),
    ('\u{2209}', "!in"),
    ('\u{220B}', "contains"),
    ('\u{220C}', "!contains"),
    ('\u{2229}', "intersection"),
    ('\u{222A}', "union"),
    ('\u{2282}', "subset"),
    ('\u{2283}', "superset"),
    ('\u{2286}', "subset="),
    ('\u{2287}', "superset="),
    ('\u{2295}', "(+)"),
    ('\u{2297}', "(x)"),
    ('\u{2227}', "and"),
    ('\u{2228}', "or"),
    ('\u{2234}', "therefore"),
    ('\u{2235}', "because"),
    // Calculus and analysis
    ('\u{2211}', "sum"),
    ('\u{220F}', "product"),
    ('\u{221A}', "sqrt"),
    ('\u{221B}', "cbrt"),
    ('\u{221C}', "4rt"),
    ('\u{222B}', "integral"),
    ('\u{222E}', "contour"),
    ('\u{221D}', "prop to"),
    ('\u{221E}', "inf"),
    ('\u{2206}', "delta"),
    ('\u{2202}', "partial"),
    ('\u{2207}', "nabla"),
    ('\u{2220}', "angle"),
    ('\u{2221}', "measured angle"),
    ('\u{2222}', "spherical angle"),
    // Mathematical brackets
    ('\u{230A}', "|_"),
    ('\u{230B}', "_|"),
    ('\u{2308}', "|^"),
    ('\u{2309}', "^|"),
    ('\u{231C}', "|^"),
    ('\u{231D}', "^|"),
    ('\u{231E}', "|_"),
    ('\u{231F}', "_|"),
    ('\u{27E8}', "<"),
    ('\u{27E9}', ">"),
    ('\u{27EA}', "<<"),
    ('\u{27EB}', ">>"),
    ('\u{27E6}', "[["),
    ('\u{27E7}', "]]"),
    ('\u{27EE}', "("),
    ('\u{27EF}', ")"),
    ('\u{2983}', "{{"),
    ('\u{2984}', "}}"),
    // Marks, units and currency
    ('\u{00A9}', "(c)"),
    ('\u{00AE}', "(R)"),
    ('\u{2122}', "(TM)"),
    ('\u{00B0}', "deg"),
    ('\u{2103}', "degC"),
    ('\u{2109}', "degF"),
    ('\u{00B5}', "mu"),
    ('\u{00A7}', "S"),
    ('\u{00B6}', "P"),
    ('\u{2116}', "No."),
    ('\u{20AC}', "EUR"),
    ('\u{00A3}', "GBP"),
    ('\u{00A5}', "JPY"),
    ('\u{20B9}', "INR"),
    ('\u{20BD}', "RUB"),
    ('\u{20A9}', "KRW"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{215B}', "1/8"),
    // Subscripts
    ('\u{2080}', "_0"),
    ('\u{2081}', "_1"),
    ('\u{2082}', "_2"),
    ('\u{2083}', "_3"),
    ('\u{2084}', "_4"),
    ('\u{2085}', "_5"),
    ('\u{2086}', "_6"),
    ('\u{2087}', "_7"),
    ('\u{2088}', "_8"),
    ('\u{2089}', "_9"),
    ('\u{208A}', "_+"),
    ('\u{208B}', "_-"),
    ('\u{208C}', "_="),
    ('\u{208D}', "("),
    ('\u{208E}', ")"),
    ('\u{2090}', "_a"),
    ('\u{2091}', "_e"),
    ('\u{2095}', "_h"),
    ('\u{1D62}', "_i"),
    ('\u{2C7C}', "_j"),
    ('\u{2096}', "_k"),
    ('\u{2097}', "_l"),
    ('\u{2098}', "_m"),
    ('\u{2099}', "_n"),
    ('\u{2092}', "_o"),
    ('\u{209A}', "_p"),
    ('\u{1D63}', "_r"),
    ('\u{209B}', "_s"),
    ('\u{209C}', "_t"),
    ('\u{1D64}', "_u"),
    ('\u{1D65}', "_v"),
    ('\u{2093}', "_x"),
    // Superscripts
    ('\u{2070}', "_0"),
    ('\u{00B9}', "_1"),
    ('\u{00B2}', "_2"),
    ('\u{00B3}', "_3"),
    ('\u{2074}', "_4"),
    ('\u{2075}', "_5"),
    ('\u{2076}', "_6"),
    ('\u{2077}', "_7"),
    ('\u{2078}', "_8"),
    ('\u{2079}', "_9"),
    ('\u{207A}', "_+"),
    ('\u{207B}', "_-"),
    ('\u{207C}', "_="),
    ('\u{207D}', "("),
    ('\u{207E}', ")"),
    ('\u{2071}', "_i"),
    ('\u{207F}', "_n"),
    // Greek lowercase
    ('\u{03B1}', "alpha"),
    ('\u{03B2}', "beta"),
    ('\u{03B3}', "gamma"),
    ('\u{03B4}', "delta"),
    ('\u{03B5}', "epsilon"),
    ('\u{03B6}', "zeta"),
    ('\u{03B7}', "eta"),
    ('\u{03B8}', "theta"),
    ('\u{03B9}', "iota"),
    ('\u{03BA}', "kappa"),
    ('\u{03BB}', "lambda"),
    ('\u{03BC}', "mu"),
    ('\u{03BD}', "nu"),
    ('\u{03BE}', "xi"),
    ('\u{03BF}', "omicron"),
    ('\u{03C0}', "pi"),
    ('\u{03C1}', "rho"),
    ('\u{03C2}', "sigma"),
    ('\u{03C3}', "sigma"),
    ('\u{03C4}', "tau"),
    ('\u{03C5}', "upsilon"),
    ('\u{03C6}', "phi"),
    ('\u{03C7}', "chi"),
    ('\u{03C8}', "psi"),
    ('\u{03C9}', "omega"),
    // Greek uppercase
    ('\u{0391}', "Alpha"),
    ('\u{0392}', "Beta"),
    ('\u{0393}', "Gamma"),
    ('\u{0394}', "Delta"),
    ('\u{0395}', "Epsilon"),
    ('\u{0396}', "Zeta"),
    ('\u{0397}', "Eta"),
    ('\u{0398}', "Theta"),
    ('\u{0399}', "Iota"),
    ('\u{039A}', "Kappa"),
    ('\u{039B}', "Lambda"),
    ('\u{039C}', "Mu"),
    ('\u{039D}', "Nu"),
    ('\u{039E}', "Xi"),
    ('\u{039F}', "Omicron"),
    ('\u{03A0}', "Pi"),
    ('\u{03A1}', "Rho"),
    ('\u{03A3}', "Sigma"),
    ('\u{03A4}', "Tau"),
    ('\u{03A5}', "Upsilon"),
    ('\u{03A6}', "Phi"),
    ('\u{03A7}', "Chi"),
    ('\u{03A8}', "Psi"),
    ('\u{03A9}', "Omega"),
    // Typographic ligatures
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    // Spaces
    ('\u{2002}', " "),
    ('\u{2003}', " "),
    ('\u{2009}', " "),
    ('\u{200A}', " "),
    ('\u{202F}', " "),
    ('\u{205F}', " "),
    ('\u{3000}', " "),
    // Zero-width characters are dropped
    ('\u{200B}', ""),
    ('\u{200C}', ""),
    ('\u{200D}', ""),
    ('\u{2060}', ""),
    ('\u{FEFF}', ""),
];

fn table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| TRANSLITERATIONS.iter().copied().collect())
}

/// Look up the replacement for a single character.
pub fn replacement(ch: char) -> Option<&'static str> {
    if ch.is_ascii() {
        return None;
    }
    table().get(&ch).copied()
}

/// Replace every mapped character with its ASCII approximation.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match replacement(ch) {
            Some(rep) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    out
}
