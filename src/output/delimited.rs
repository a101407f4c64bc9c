//! Delimited-text rendering

use crate::model::Row;

/// Render rows as quoted, comma-joined lines separated by `\n`.
///
/// Every cell is wrapped in double quotes with no escaping of embedded
/// quotes or commas; this reproduces the export format downstream consumers
/// already ingest and is not an RFC 4180 encoder. No trailing newline.
pub fn render_rows(rows: &[Row]) -> String {
    rows.iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(row: &Row) -> String {
    row.cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.display()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    #[test]
    fn test_cells_are_quoted_and_joined() {
        let rows = vec![
            Row::new(vec!["Item".into(), "Brand".into()], 1),
            Row::new(vec!["r1".into(), CellValue::Int(42)], 2),
        ];
        assert_eq!(render_rows(&rows), "\"Item\",\"Brand\"\n\"r1\",\"42\"");
    }

    #[test]
    fn test_null_cells_render_empty() {
        let rows = vec![Row::new(vec![CellValue::Null, "x".into()], 1)];
        assert_eq!(render_rows(&rows), "\"\",\"x\"");
    }

    #[test]
    fn test_no_trailing_newline() {
        let rows = vec![Row::new(vec!["a".into()], 1)];
        assert!(!render_rows(&rows).ends_with('\n'));
    }

    #[test]
    fn test_embedded_delimiters_are_not_escaped() {
        // Documented limitation: embedded quotes and commas pass through.
        let rows = vec![Row::new(vec![CellValue::from("a,\"b")], 1)];
        assert_eq!(render_rows(&rows), "\"a,\"b\"");
    }
}
