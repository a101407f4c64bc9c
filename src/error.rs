//! Error types for the split pipeline.

use thiserror::Error;

/// Errors that can occur while splitting a table into exports.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SplitError {
    /// No usable input table was supplied.
    #[error("no input table supplied")]
    NoInput,

    /// Output mode string did not name a recognized mode.
    #[error("unknown output mode: {0}")]
    InvalidMode(String),

    /// An artifact was appended after the archive was finalized.
    #[error("archive already finalized")]
    ArchiveClosed,

    /// Workbook serialization failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Zip container error.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
