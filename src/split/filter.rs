//! Partition consistency validation

use tracing::warn;

use crate::model::normalize_key;

use super::partition::Partition;

/// Drop groups containing any member row whose key cell does not
/// re-normalize to the group key. A seeded header row is exempt.
///
/// With a deterministic normalizer and a fixed key column this never fires;
/// if it does, the dropped group points at a keying drift or a genuine data
/// anomaly, so the drop is logged rather than silent.
pub fn retain_consistent(partition: Partition, key_column: usize, has_header: bool) -> Partition {
    partition
        .into_iter()
        .filter(|(key, rows)| {
            let members = if has_header { &rows[1..] } else { &rows[..] };
            let offender = members
                .iter()
                .find(|row| normalize_key(row.get(key_column)) != *key);
            match offender {
                Some(row) => {
                    warn!(
                        key = %key,
                        source_line = row.source_line,
                        "dropping group with inconsistent key cell"
                    );
                    false
                }
                None => true,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;
    use crate::split::Partition;

    #[test]
    fn test_consistent_groups_survive() {
        let mut partition = Partition::new();
        partition.insert(
            "acme".to_string(),
            vec![
                Row::new(vec!["r1".into(), "Acme".into()], 2),
                Row::new(vec!["r2".into(), " ACME ".into()], 3),
            ],
        );

        let kept = retain_consistent(partition, 1, false);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept["acme"].len(), 2);
    }

    #[test]
    fn test_inconsistent_group_is_dropped_wholesale() {
        let mut partition = Partition::new();
        partition.insert(
            "acme".to_string(),
            vec![
                Row::new(vec!["r1".into(), "Acme".into()], 2),
                Row::new(vec!["r2".into(), "Zenith".into()], 3),
            ],
        );
        partition.insert(
            "zenith".to_string(),
            vec![Row::new(vec!["r3".into(), "Zenith".into()], 4)],
        );

        let kept = retain_consistent(partition, 1, false);
        assert_eq!(kept.len(), 1);
        assert!(!kept.contains_key("acme"));
        assert!(kept.contains_key("zenith"));
    }

    #[test]
    fn test_seeded_header_is_exempt() {
        let mut partition = Partition::new();
        partition.insert(
            "acme".to_string(),
            vec![
                Row::new(vec!["Item".into(), "Brand".into()], 1),
                Row::new(vec!["r1".into(), "Acme".into()], 2),
            ],
        );

        let kept = retain_consistent(partition, 1, true);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_soundness_after_filtering() {
        // Every surviving member re-normalizes to its group key.
        let mut partition = Partition::new();
        partition.insert(
            "acme".to_string(),
            vec![
                Row::new(vec!["r1".into(), "ACME".into()], 2),
                Row::new(vec!["r2".into(), "acme ".into()], 3),
            ],
        );

        let kept = retain_consistent(partition, 1, false);
        for (key, rows) in &kept {
            for row in rows {
                assert_eq!(&normalize_key(row.get(1)), key);
            }
        }
    }
}
