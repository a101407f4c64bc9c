//! CSV file parser

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::SplitError;
use crate::model::{CellValue, Column, Row, Table};

use super::Parser;

/// Parser for CSV files
pub struct CsvParser;

impl Parser for CsvParser {
    fn parse(&self, path: &Path, config: &Config) -> Result<Table> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let reader = BufReader::new(file);
        // Header handling is done manually so the header row survives verbatim.
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let first = match records.next() {
            Some(result) => result.context("Failed to read first CSV row")?,
            None => return Err(SplitError::NoInput.into()),
        };

        let mut table = if config.include_header {
            let columns: Vec<Column> = first
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Column::new(
                        if name.trim().is_empty() {
                            format!("Column{}", i + 1)
                        } else {
                            name.to_string()
                        },
                        i,
                    )
                })
                .collect();
            let header_cells: Vec<CellValue> = first
                .iter()
                .map(|s| CellValue::String(Cow::Owned(s.to_string())))
                .collect();
            Table::with_header(columns, Row::new(header_cells, 1))
        } else {
            let columns: Vec<Column> = (0..first.len())
                .map(|i| Column::new(format!("Column{}", i + 1), i))
                .collect();
            let mut table = Table::new(columns);
            let cells: Vec<CellValue> = first.iter().map(parse_cell_value).collect();
            table.add_row(cells, 1);
            table
        };

        for (line_num, result) in records.enumerate() {
            let record =
                result.with_context(|| format!("Failed to read CSV row {}", line_num + 2))?;

            let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();

            // Pad with nulls if row has fewer columns
            let cells = if cells.len() < table.column_count() {
                let mut padded = cells;
                padded.resize(table.column_count(), CellValue::Null);
                padded
            } else {
                cells
            };

            table.add_row(cells, line_num + 2);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt")
    }
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(Cow::Owned(trimmed.to_string()))
}
