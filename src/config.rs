//! Configuration handling for brandsplit

use std::path::PathBuf;

use crate::error::SplitError;

/// Output shape for a split run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One workbook with a worksheet per brand
    MultiSheet,
    /// Zip archive with a single-sheet workbook per brand
    #[default]
    WorkbookArchive,
    /// Zip archive with a delimited-text file per brand
    DelimitedArchive,
}

impl OutputMode {
    /// MIME type of the blob this mode produces
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputMode::MultiSheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            OutputMode::WorkbookArchive | OutputMode::DelimitedArchive => "application/zip",
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multi-sheet" => Ok(OutputMode::MultiSheet),
            "workbook-archive" => Ok(OutputMode::WorkbookArchive),
            "delimited-archive" => Ok(OutputMode::DelimitedArchive),
            _ => Err(SplitError::InvalidMode(s.to_string())),
        }
    }
}

/// Configuration for split operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input file
    pub input: PathBuf,
    /// 0-based index of the brand column
    pub key_column: usize,
    /// Resolve the brand column from this header name instead of the index
    pub key_column_name: Option<String>,
    /// Whether the first row of the input is a header
    pub include_header: bool,
    /// Output shape
    pub mode: OutputMode,
    /// For Excel files: which sheet to read (defaults to the first)
    pub sheet_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            key_column: 1,
            key_column_name: None,
            include_header: true,
            mode: OutputMode::default(),
            sheet_name: None,
        }
    }
}

impl Config {
    /// Create a new Config for an input file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    /// Set the brand column index
    pub fn with_key_column(mut self, index: usize) -> Self {
        self.key_column = index;
        self
    }

    /// Resolve the brand column by header name
    pub fn with_key_column_name(mut self, name: String) -> Self {
        self.key_column_name = Some(name);
        self
    }

    /// Mark the input as headerless
    pub fn with_include_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Set the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the Excel sheet to read
    pub fn with_sheet_name(mut self, name: String) -> Self {
        self.sheet_name = Some(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "multi-sheet".parse::<OutputMode>().unwrap(),
            OutputMode::MultiSheet
        );
        assert_eq!(
            "Workbook-Archive".parse::<OutputMode>().unwrap(),
            OutputMode::WorkbookArchive
        );
        assert_eq!(
            "delimited-archive".parse::<OutputMode>().unwrap(),
            OutputMode::DelimitedArchive
        );
    }

    #[test]
    fn test_bogus_mode_is_rejected() {
        let err = "bogus".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, SplitError::InvalidMode(ref s) if s == "bogus"));
    }
}
