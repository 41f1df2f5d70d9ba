/// Cross-platform aggregation
///
/// Groups every platform's type records by type name and collects the
/// per-platform values needed to decide portability.
use crate::types::{ComparisonEntry, ComparisonTable, PlatformRecord};
use log::debug;

/// Build the comparison table for the given platforms.
///
/// Type names appear in first-seen order: platform order outer, type order
/// inner. A type missing from some platforms simply has no values for those
/// labels. Never fails; a name repeated within one platform keeps the last
/// values seen.
pub fn aggregate(platforms: &[PlatformRecord]) -> ComparisonTable {
    let mut table = ComparisonTable::new();

    for platform in platforms {
        debug!("Aggregating {} types from {}", platform.types.len(), platform.label);

        for ty in &platform.types {
            table
                .entry(ty.name.clone())
                .or_insert_with(|| ComparisonEntry::new(ty.name.clone()))
                .record(&platform.label, ty);
        }
    }

    debug!("Aggregated {} distinct types across {} platforms", table.len(), platforms.len());
    table
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
