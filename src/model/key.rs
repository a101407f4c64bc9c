//! Brand key normalization

use std::borrow::Cow;

use super::table::CellValue;

/// Canonicalize a raw key cell into its comparable form.
///
/// Absent and null cells normalize to the empty string, which is never a
/// valid group key. Any other scalar is rendered to text, trimmed of
/// surrounding whitespace, and lowercased. The same function runs at
/// grouping time and at membership validation time, so the two sites cannot
/// disagree.
pub fn normalize_key(cell: Option<&CellValue>) -> String {
    match cell {
        None | Some(CellValue::Null) => String::new(),
        Some(value) => value.display().trim().to_lowercase(),
    }
}

/// Normalize a raw string the same way [`normalize_key`] treats text cells.
pub fn normalize_raw(raw: &str) -> String {
    normalize_key(Some(&CellValue::String(Cow::Owned(raw.to_string()))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_null_normalize_empty() {
        assert_eq!(normalize_key(None), "");
        assert_eq!(normalize_key(Some(&CellValue::Null)), "");
        assert_eq!(normalize_raw(""), "");
        assert_eq!(normalize_raw("   "), "");
    }

    #[test]
    fn test_trim_and_lowercase() {
        assert_eq!(normalize_raw("  Acme "), "acme");
        assert_eq!(normalize_raw("ACME"), "acme");
        assert_eq!(normalize_raw("\tAcme\n"), "acme");
    }

    #[test]
    fn test_equivalence_over_case_and_whitespace() {
        // All spellings of the same logical brand must land on one key.
        let spellings = ["Zenith", "zenith", " ZENITH ", "ZeNiTh\t", "  zenith"];
        let keys: Vec<String> = spellings.iter().map(|s| normalize_raw(s)).collect();
        for key in &keys {
            assert_eq!(key, "zenith");
        }
    }

    #[test]
    fn test_punctuation_is_preserved() {
        // Normalization is trim + lowercase only; "ACME!" stays a distinct key.
        assert_eq!(normalize_raw("ACME!"), "acme!");
        assert_ne!(normalize_raw("ACME!"), normalize_raw("Acme"));
    }

    #[test]
    fn test_numeric_cells_normalize_via_text() {
        assert_eq!(normalize_key(Some(&CellValue::Int(42))), "42");
        assert_eq!(normalize_key(Some(&CellValue::Float(1.5))), "1.5");
        assert_eq!(normalize_key(Some(&CellValue::Bool(true))), "true");
    }
}
