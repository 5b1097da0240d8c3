//! Input format detection and output validation.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Number of leading bytes inspected for binary content.
const SNIFF_LEN: usize = 8192;

/// Check if bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Read the PDF version from a header such as `%PDF-1.7`.
pub fn pdf_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !is_pdf_bytes(data) {
        return None;
    }

    let version = String::from_utf8_lossy(&data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN]);
    let chars: Vec<char> = version.chars().collect();
    if chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
    {
        Some(version.into_owned())
    } else {
        None
    }
}

/// Check whether the leading bytes look like binary data.
///
/// NUL bytes never appear in UTF-8 text files, so one in the first few
/// kilobytes is taken as a sign of binary content.
pub fn looks_binary(data: &[u8]) -> bool {
    let head = &data[..data.len().min(SNIFF_LEN)];
    head.contains(&0)
}

/// Reject inputs that are not plain text.
pub fn check_text_input(name: &str, data: &[u8]) -> Result<()> {
    if is_pdf_bytes(data) {
        return Err(Error::UnsupportedFormat(format!(
            "{} is already a PDF document",
            name
        )));
    }

    if looks_binary(data) {
        return Err(Error::UnsupportedFormat(format!(
            "{} does not look like a text file",
            name
        )));
    }

    Ok(())
}
