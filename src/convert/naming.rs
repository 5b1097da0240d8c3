//! Output file naming.

use std::collections::HashSet;

/// Archive name for per-file batches.
pub const ARCHIVE_NAME: &str = "converted_texts.zip";

/// Output name for combined batches of more than one document.
pub const COMBINED_NAME: &str = "combined_text.pdf";

/// Replace characters that are unsafe in file names with `-`.
///
/// Covers path separators, the characters reserved on Windows and ASCII
/// control characters.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '-',
            c if c.is_ascii_control() => '-',
            c => c,
        })
        .collect()
}

/// File name without its last extension.
///
/// Names that are only an extension (`.txt`) keep their text.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// PDF name for a converted document: sanitized stem plus `.pdf`.
pub fn pdf_name(source: &str) -> String {
    let stem = sanitize_file_name(file_stem(source));
    let stem = stem.trim();
    if stem.is_empty() {
        "document.pdf".to_string()
    } else {
        format!("{}.pdf", stem)
    }
}

/// Make `name` unique among `taken` by appending `_2`, `_3`, ... to the stem.
pub fn unique_name(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    };

    (2..)
        .map(|n| format!("{}_{}{}", stem, n, ext))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}
