//! Input document types.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::detect::check_text_input;
use crate::error::{Error, Result};

/// A plain-text input document.
///
/// Holds the decoded text together with the name it was read from. The
/// text is guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    name: String,
    text: String,
}

impl TextDocument {
    /// Create a document from already decoded text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let text = text.into();
        let text = match text.strip_prefix('\u{FEFF}') {
            Some(rest) => rest.to_string(),
            None => text,
        };

        if text.trim().is_empty() {
            return Err(Error::EmptyInput(name));
        }

        Ok(Self { name, text })
    }

    /// Decode a document from raw bytes as UTF-8.
    ///
    /// Invalid sequences are replaced with U+FFFD, as browsers do when
    /// reading a file as UTF-8 text.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        check_text_input(&name, bytes)?;

        let text = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                log::warn!("{} is not valid UTF-8; invalid bytes were replaced", name);
                text
            }
        };

        Self::new(name, text)
    }

    /// Read a document from a file.
    ///
    /// The document name is the file name without its directory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = display_name(path);
        let bytes = fs::read(path)?;
        Self::from_bytes(name, &bytes)
    }

    /// Read a document from a file without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn from_path_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = display_name(path);
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(name, &bytes)
    }

    /// Source name (usually the file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// File name of a path, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Text after normalization and transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wrap already normalized text.
    pub fn new(text: String) -> Self {
        Self(text)
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
