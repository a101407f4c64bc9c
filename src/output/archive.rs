//! Zip archive assembly

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::SplitError;

/// Streaming zip builder over an in-memory buffer.
///
/// Entries are appended incrementally in the order given. `finish` finalizes
/// the container exactly once; appending afterwards fails with
/// [`SplitError::ArchiveClosed`].
pub struct ArchiveBuilder {
    writer: Option<ZipWriter<Cursor<Vec<u8>>>>,
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: Some(ZipWriter::new(Cursor::new(Vec::new()))),
        }
    }

    /// Append one named artifact to the archive
    pub fn append(&mut self, name: &str, bytes: &[u8]) -> Result<(), SplitError> {
        let writer = self.writer.as_mut().ok_or(SplitError::ArchiveClosed)?;
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9));
        writer.start_file(name, options)?;
        writer.write_all(bytes)?;
        Ok(())
    }

    /// Finalize the archive and return its bytes
    pub fn finish(&mut self) -> Result<Vec<u8>, SplitError> {
        let writer = self.writer.take().ok_or(SplitError::ArchiveClosed)?;
        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
