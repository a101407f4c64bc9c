//! brandsplit - Split tabular data by brand
//!
//! Parses a tabular data file (CSV, Excel), groups its rows by the brand
//! column, validates group consistency, and re-emits each brand as its own
//! export: one multi-sheet workbook, or a zip archive of per-brand
//! workbooks or delimited files.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod split;

pub use config::{Config, OutputMode};
pub use error::SplitError;
pub use model::Table;
pub use split::{Export, SplitEngine};
