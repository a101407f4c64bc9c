//! Output naming: batch timestamps, artifact names, worksheet names

use chrono::NaiveDateTime;

/// Hard xlsx limit on worksheet name length
pub const SHEET_NAME_MAX: usize = 31;

/// Characters xlsx forbids in worksheet names
const SHEET_ILLEGAL: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Render the batch timestamp, shared by every artifact of one run
pub fn timestamp_string(batch_time: NaiveDateTime) -> String {
    batch_time.format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Name for one per-partition artifact; file names are not length-limited
pub fn artifact_name(key: &str, stamp: &str, extension: &str) -> String {
    format!("{key}_{stamp}.{extension}")
}

/// Name of the archive bundling per-partition artifacts
pub fn archive_name(stamp: &str) -> String {
    format!("files_{stamp}.zip")
}

/// Name of the single combined export
pub fn combined_name(stamp: &str, extension: &str) -> String {
    format!("file_{stamp}.{extension}")
}

/// Worksheet name for a partition key: illegal characters replaced, then
/// truncated to the xlsx limit. Keys identical through the limit collide;
/// the caller decides which sheet wins.
pub fn sheet_name(key: &str) -> String {
    let cleaned: String = key
        .chars()
        .map(|c| if SHEET_ILLEGAL.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return "Sheet".to_string();
    }
    cleaned.chars().take(SHEET_NAME_MAX).collect()
}
