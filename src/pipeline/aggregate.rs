use std::collections::BTreeMap;

use crate::pipeline::types::{SlotTotal, ValuedRecord};

/// Sums values per `(day_of_week, table_slot)`.
///
/// Only pairs present in `rows` appear in the result, sorted by day code and
/// then by the raw slot string. Each group's sum is a plain left-to-right
/// `f64` fold in row order, with no compensated summation.
pub fn aggregate(rows: &[ValuedRecord]) -> Vec<SlotTotal> {
    let mut groups: BTreeMap<(u8, &str), f64> = BTreeMap::new();

    for row in rows {
        *groups
            .entry((row.record.day_of_week, row.record.table_slot.as_str()))
            .or_insert(0.0) += row.value;
    }

    groups
        .into_iter()
        .map(|((day_of_week, table_slot), value)| SlotTotal {
            day_of_week,
            table_slot: table_slot.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::SlotRecord;

    fn valued(day: u8, slot: &str, value: f64) -> ValuedRecord {
        ValuedRecord {
            record: SlotRecord {
                day_of_week: day,
                table_slot: slot.to_string(),
                slope: 0.0,
                intercept: value,
                observation_count: 0.0,
                table_size: 2,
            },
            value,
        }
    }

    #[test]
    fn test_sums_within_group() {
        let rows = vec![
            valued(1, "18:00", 0.1),
            valued(2, "18:00", 5.0),
            valued(1, "18:00", 0.2),
            valued(1, "18:00", 0.3),
        ];
        let totals = aggregate(&rows);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].day_of_week, 1);
        assert_eq!(totals[0].value, 0.1 + 0.2 + 0.3);
        assert_eq!(totals[1].value, 5.0);
    }

    #[test]
    fn test_group_sum_is_plain_left_to_right_fold() {
        let rows = vec![
            valued(4, "20:00", 1e16),
            valued(4, "20:00", 1.0),
            valued(4, "20:00", -1e16),
        ];
        let totals = aggregate(&rows);

        // 1e16 + 1.0 rounds back to 1e16, so the uncompensated total is 0.0.
        assert_eq!(totals[0].value, 0.0);
        assert_eq!(totals[0].value, 0.0 + 1e16 + 1.0 + -1e16);
    }

    #[test]
    fn test_absent_pairs_are_not_zero_filled() {
        let rows = vec![valued(1, "18:00", 1.0), valued(3, "20:00", 2.0)];
        let totals = aggregate(&rows);

        assert_eq!(totals.len(), 2);
        assert!(
            !totals
                .iter()
                .any(|t| t.day_of_week == 1 && t.table_slot == "20:00")
        );
    }

    #[test]
    fn test_sorted_by_day_then_slot() {
        let rows = vec![
            valued(5, "09:00", 1.0),
            valued(1, "21:00", 1.0),
            valued(1, "08:30", 1.0),
        ];
        let keys: Vec<(u8, String)> = aggregate(&rows)
            .into_iter()
            .map(|t| (t.day_of_week, t.table_slot))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1, "08:30".to_string()),
                (1, "21:00".to_string()),
                (5, "09:00".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
