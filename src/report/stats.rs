//! Statistics and summary generation for comparison results.
//!
//! This module partitions the comparison table into portable and
//! incompatible types.

use super::types::CompatibilitySummary;
use crate::types::{ComparisonTable, Verdict};

/// Partition a comparison table by verdict.
///
/// # Arguments
/// * `table` - Aggregated comparison entries
///
/// # Returns
/// A `CompatibilitySummary` listing every type name exactly once.
pub fn summarize(table: &ComparisonTable) -> CompatibilitySummary {
    let mut summary = CompatibilitySummary { total: table.len(), ..Default::default() };

    for (name, entry) in table {
        match entry.verdict() {
            Verdict::Portable => summary.portable.push(name.clone()),
            Verdict::NeedsSerialization => summary.incompatible.push(name.clone()),
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::aggregate;
    use crate::test_support::{platform, ty};
    use std::collections::HashSet;

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&ComparisonTable::new());
        assert!(summary.portable.is_empty());
        assert!(summary.incompatible.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.portable_percentage(), 0.0);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let table = aggregate(&[
            platform(
                "a",
                vec![ty("Point", 8, "i32,i32", "p"), ty("LongDouble", 16, "f80", "ld"), ty("Handle", 8, "ptr", "h")],
            ),
            platform("b", vec![ty("Point", 8, "i32,i32", "p"), ty("LongDouble", 8, "f64", "ld")]),
        ]);
        let summary = summarize(&table);

        assert_eq!(summary.portable, vec!["Point", "Handle"]);
        assert_eq!(summary.incompatible, vec!["LongDouble"]);
        assert_eq!(summary.portable.len() + summary.incompatible.len(), summary.total);

        let portable: HashSet<_> = summary.portable.iter().collect();
        let incompatible: HashSet<_> = summary.incompatible.iter().collect();
        assert!(portable.is_disjoint(&incompatible));
        let all: HashSet<_> = portable.union(&incompatible).map(|s| s.as_str()).collect();
        let names: HashSet<_> = table.keys().map(|k| k.as_str()).collect();
        assert_eq!(all, names);
    }

    #[test]
    fn test_percentage_identity() {
        let table = aggregate(&[
            platform("a", vec![ty("A", 4, "x", "d"), ty("B", 4, "x", "d"), ty("C", 4, "x", "d")]),
            platform("b", vec![ty("A", 4, "x", "d"), ty("B", 4, "y", "d"), ty("C", 4, "x", "d")]),
        ]);
        let summary = summarize(&table);

        let expected = 100.0 * 2.0 / 3.0;
        assert!((summary.portable_percentage() - expected).abs() < 1e-9);
        assert_eq!(format!("{:.0}", summary.portable_percentage()), "67");
    }
}
