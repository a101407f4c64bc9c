//! Split engine: partition, validate, serialize, package

mod filter;
mod partition;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::{Config, OutputMode};
use crate::error::SplitError;
use crate::model::Table;
use crate::output::{delimited, name, workbook, ArchiveBuilder};

pub use filter::retain_consistent;
pub use partition::{partition_rows, Partition};

/// Final output blob of one split run
#[derive(Debug)]
pub struct Export {
    /// Suggested download name for the blob
    pub file_name: String,
    /// MIME type of the blob
    pub content_type: &'static str,
    /// The serialized workbook or archive
    pub bytes: Vec<u8>,
}

/// Runs the full pipeline for one table
pub struct SplitEngine {
    config: Config,
}

impl SplitEngine {
    /// Create a new engine with configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Split a table, stamping artifacts with the current wall-clock time
    pub fn split(&self, table: &Table) -> Result<Export, SplitError> {
        self.split_at(table, chrono::Local::now().naive_local())
    }

    /// Split a table with an explicit batch time.
    ///
    /// The timestamp is rendered once here; every artifact of the run
    /// shares it.
    pub fn split_at(&self, table: &Table, batch_time: NaiveDateTime) -> Result<Export, SplitError> {
        let stamp = name::timestamp_string(batch_time);

        let groups = partition_rows(table, self.config.key_column);
        let groups = retain_consistent(groups, self.config.key_column, table.header.is_some());
        debug!(
            groups = groups.len(),
            rows = table.row_count(),
            "partitioned input"
        );

        match self.config.mode {
            OutputMode::MultiSheet => {
                let bytes = workbook::write_multi_sheet(&groups)?;
                Ok(Export {
                    file_name: name::combined_name(&stamp, "xlsx"),
                    content_type: self.config.mode.content_type(),
                    bytes,
                })
            }
            OutputMode::WorkbookArchive => {
                let mut archive = ArchiveBuilder::new();
                for (key, rows) in &groups {
                    let bytes = workbook::write_single_sheet(key, rows)?;
                    archive.append(&name::artifact_name(key, &stamp, "xlsx"), &bytes)?;
                }
                Ok(Export {
                    file_name: name::archive_name(&stamp),
                    content_type: self.config.mode.content_type(),
                    bytes: archive.finish()?,
                })
            }
            OutputMode::DelimitedArchive => {
                let mut archive = ArchiveBuilder::new();
                for (key, rows) in &groups {
                    let text = delimited::render_rows(rows);
                    archive.append(&name::artifact_name(key, &stamp, "csv"), text.as_bytes())?;
                }
                Ok(Export {
                    file_name: name::archive_name(&stamp),
                    content_type: self.config.mode.content_type(),
                    bytes: archive.finish()?,
                })
            }
        }
    }
}
