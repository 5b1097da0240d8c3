//! Batch conversion of text documents to PDF.
//!
//! A batch is either combined into a single PDF, with the page flow running
//! from one document into the next, or converted file by file and packaged
//! into a ZIP archive. Batches fail fast: the first document that cannot be
//! converted aborts the whole batch and nothing partial is returned.
//!
//! # Example
//!
//! ```no_run
//! use textpdf::convert::{convert_paths, BatchMode, ConvertOptions};
//!
//! fn main() -> textpdf::Result<()> {
//!     let options = ConvertOptions::default();
//!     let output = convert_paths(&["a.txt", "b.txt"], BatchMode::Combined, &options)?;
//!     output.save(&output.name)?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod naming;
mod options;

pub use archive::Archive;
pub use naming::{pdf_name, sanitize_file_name, ARCHIVE_NAME, COMBINED_NAME};
pub use options::{BatchMode, ConvertOptions, DEFAULT_PLACEHOLDER};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detect::pdf_version;
use crate::error::{Error, Result};
use crate::layout::{layout_document, LayoutEngine};
use crate::model::{display_name, LayoutStats, TextDocument};

/// MIME type of PDF output.
pub const PDF_MIME: &str = "application/pdf";

/// MIME type of archive output.
pub const ZIP_MIME: &str = "application/zip";

/// Result of a successful conversion: one PDF or one archive.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    /// Suggested file name
    pub name: String,

    /// File content
    pub bytes: Vec<u8>,

    /// MIME type of the content
    pub mime_type: &'static str,

    /// Layout statistics summed over every document
    pub stats: LayoutStats,
}

impl ConvertedFile {
    fn pdf(name: String, bytes: Vec<u8>, stats: LayoutStats) -> Result<Self> {
        match pdf_version(&bytes) {
            Some(version) => log::debug!("{}: PDF {}, {} bytes", name, version, bytes.len()),
            None => return Err(Error::Pdf(format!("{} has no PDF header", name))),
        }
        Ok(Self {
            name,
            bytes,
            mime_type: PDF_MIME,
            stats,
        })
    }

    fn archive(bytes: Vec<u8>, stats: LayoutStats) -> Self {
        Self {
            name: ARCHIVE_NAME.to_string(),
            bytes,
            mime_type: ZIP_MIME,
            stats,
        }
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the output is a ZIP archive.
    pub fn is_archive(&self) -> bool {
        self.mime_type == ZIP_MIME
    }

    /// Write the content to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Write the content into `dir` under its suggested name.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.name);
        self.save(&path)?;
        Ok(path)
    }
}

/// Serializable summary of a conversion, for reports and `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The batch converted
    Success {
        file_name: String,
        size_bytes: usize,
        mime_type: String,
        document_count: u32,
        page_count: u32,
        placeholder_count: u32,
    },

    /// The batch failed
    Failure { error: String },
}

impl ConversionOutcome {
    /// Summarize a conversion result.
    pub fn from_result(result: &Result<ConvertedFile>) -> Self {
        match result {
            Ok(file) => ConversionOutcome::Success {
                file_name: file.name.clone(),
                size_bytes: file.size(),
                mime_type: file.mime_type.to_string(),
                document_count: file.stats.document_count,
                page_count: file.stats.page_count,
                placeholder_count: file.stats.placeholder_count,
            },
            Err(e) => ConversionOutcome::Failure {
                error: e.to_string(),
            },
        }
    }

    /// Whether the conversion succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert a batch of documents.
///
/// Returns [`Error::NoInput`] for an empty batch. A failing document aborts
/// the batch with [`Error::Document`] naming it.
pub fn convert_batch(
    documents: &[TextDocument],
    mode: BatchMode,
    options: &ConvertOptions,
) -> Result<ConvertedFile> {
    if documents.is_empty() {
        return Err(Error::NoInput);
    }
    options.validate()?;

    let output = match mode {
        BatchMode::Combined => convert_combined(documents, options)?,
        BatchMode::PerFileZipped => convert_zipped(documents, options)?,
    };

    log::info!(
        "Converted {} documents into {} ({} pages, {} bytes)",
        output.stats.document_count,
        output.name,
        output.stats.page_count,
        output.size()
    );
    Ok(output)
}

fn convert_combined(documents: &[TextDocument], options: &ConvertOptions) -> Result<ConvertedFile> {
    let mut engine = LayoutEngine::new(options)?;
    for document in documents {
        engine
            .add_document(document, true)
            .map_err(|e| e.in_document(document.name()))?;
    }
    let (bytes, stats) = engine.finish()?;

    let name = match documents {
        [single] => pdf_name(single.name()),
        _ => COMBINED_NAME.to_string(),
    };
    ConvertedFile::pdf(name, bytes, stats)
}

fn convert_zipped(documents: &[TextDocument], options: &ConvertOptions) -> Result<ConvertedFile> {
    let mut archive = Archive::new();
    let mut stats = LayoutStats::new();

    for document in documents {
        let (bytes, doc_stats) = layout_document(document, options.headers, options)
            .map_err(|e| e.in_document(document.name()))?;
        let stored = archive.add_file(&pdf_name(document.name()), &bytes);
        log::debug!(
            "{} -> {} ({} pages)",
            document.name(),
            stored,
            doc_stats.page_count
        );
        stats.merge(&doc_stats);
    }

    let bytes = archive.finalize(options.compression_level)?;
    Ok(ConvertedFile::archive(bytes, stats))
}

/// Convert a single document held in memory to a PDF.
pub fn convert_text(
    name: impl Into<String>,
    text: impl Into<String>,
    options: &ConvertOptions,
) -> Result<ConvertedFile> {
    let name = name.into();
    options.validate()?;
    let document = TextDocument::new(name.clone(), text).map_err(|e| e.in_document(&name))?;

    let (bytes, stats) =
        layout_document(&document, options.headers, options).map_err(|e| e.in_document(&name))?;
    ConvertedFile::pdf(pdf_name(&name), bytes, stats)
}

/// Read text files and convert them as one batch.
///
/// Files are read in order; the first unreadable, empty or non-text file
/// aborts the batch.
pub fn convert_paths<P: AsRef<Path>>(
    paths: &[P],
    mode: BatchMode,
    options: &ConvertOptions,
) -> Result<ConvertedFile> {
    if paths.is_empty() {
        return Err(Error::NoInput);
    }
    options.validate()?;

    let documents = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            TextDocument::from_path(path).map_err(|e| e.in_document(display_name(path)))
        })
        .collect::<Result<Vec<_>>>()?;

    convert_batch(&documents, mode, options)
}

/// Read text files without blocking the runtime, then convert them as one
/// batch.
#[cfg(feature = "async")]
pub async fn convert_paths_async<P: AsRef<Path>>(
    paths: &[P],
    mode: BatchMode,
    options: &ConvertOptions,
) -> Result<ConvertedFile> {
    if paths.is_empty() {
        return Err(Error::NoInput);
    }
    options.validate()?;

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let document = TextDocument::from_path_async(path)
            .await
            .map_err(|e| e.in_document(display_name(path)))?;
        documents.push(document);
    }

    convert_batch(&documents, mode, options)
}
