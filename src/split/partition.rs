//! Row grouping by normalized brand key

use indexmap::IndexMap;

use crate::model::{normalize_key, Row, Table};

/// Rows grouped by normalized key, in first-seen key order
pub type Partition = IndexMap<String, Vec<Row>>;

/// Group a table's data rows by the normalized value of `key_column`.
///
/// Each new group is seeded with the table's header row when one is present.
/// Rows whose key normalizes to the empty string, including rows too short
/// to reach `key_column`, belong to no group and are skipped. Row order
/// within a group follows the original table order.
pub fn partition_rows(table: &Table, key_column: usize) -> Partition {
    let mut groups: Partition = IndexMap::new();

    for row in &table.rows {
        let key = normalize_key(row.get(key_column));
        if key.is_empty() {
            continue;
        }

        groups
            .entry(key)
            .or_insert_with(|| match &table.header {
                Some(header) => vec![header.clone()],
                None => Vec::new(),
            })
            .push(row.clone());
    }

    groups
}
