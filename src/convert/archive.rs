//! ZIP packaging of converted files.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::naming::unique_name;
use crate::error::{Error, Result};

/// In-memory archive, written out in one go by [`Archive::finalize`].
#[derive(Debug, Default)]
pub struct Archive {
    entries: Vec<(String, Vec<u8>)>,
    names: HashSet<String>,
}

impl Archive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return the name it was stored under.
    ///
    /// A name already in the archive gets a numeric suffix.
    pub fn add_file(&mut self, name: &str, data: &[u8]) -> String {
        let name = unique_name(name, &self.names);
        self.names.insert(name.clone());
        self.entries.push((name.clone(), data.to_vec()));
        name
    }

    /// Number of files added.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file was added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the archive with Deflate at the given level (0-9).
    ///
    /// Level 0 stores entries uncompressed.
    pub fn finalize(self, level: u8) -> Result<Vec<u8>> {
        if level > 9 {
            return Err(Error::InvalidOption(format!(
                "Compression level {} is out of range (0-9)",
                level
            )));
        }

        let options = if level == 0 {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(level)))
        };

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(data)?;
        }

        let bytes = zip.finish()?.into_inner();
        log::debug!(
            "Archive written: {} files, {} bytes",
            self.entries.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
