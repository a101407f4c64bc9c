//! Workbook output via rust_xlsxwriter

use indexmap::IndexMap;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::model::{CellValue, Row};
use crate::split::Partition;

use super::name::sheet_name;

/// Build a single-sheet workbook for one partition
pub fn write_single_sheet(key: &str, rows: &[Row]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(key))?;
    write_rows(worksheet, rows)?;
    workbook.save_to_buffer()
}

/// Build one workbook with a worksheet per partition.
///
/// Sheet names collapse truncation collisions before writing: keys identical
/// through the 31-character limit share one sheet and the last partition
/// written wins. An empty partition set still yields a valid workbook with a
/// single blank sheet, since the format requires at least one.
pub fn write_multi_sheet(groups: &Partition) -> Result<Vec<u8>, XlsxError> {
    let mut named: IndexMap<String, &Vec<Row>> = IndexMap::new();
    for (key, rows) in groups {
        named.insert(sheet_name(key), rows);
    }

    let mut workbook = Workbook::new();
    if named.is_empty() {
        workbook.add_worksheet();
    }
    for (name, rows) in &named {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name.as_str())?;
        write_rows(worksheet, rows.as_slice())?;
    }

    workbook.save_to_buffer()
}

/// Write rows into a worksheet, keeping cell typing where xlsx supports it
fn write_rows(worksheet: &mut Worksheet, rows: &[Row]) -> Result<(), XlsxError> {
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                CellValue::Null => {}
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                CellValue::Int(i) => {
                    worksheet.write_number(r, c, *i as f64)?;
                }
                CellValue::Float(f) => {
                    worksheet.write_number(r, c, *f)?;
                }
                CellValue::String(s) => {
                    worksheet.write_string(r, c, s.as_ref())?;
                }
                CellValue::Date(d) => {
                    worksheet.write_string(r, c, d.to_string())?;
                }
                CellValue::DateTime(dt) => {
                    worksheet.write_string(r, c, dt.to_string())?;
                }
            }
        }
    }
    Ok(())
}
