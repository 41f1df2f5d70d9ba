//! Report export functions for JSON and Markdown formats.
//!
//! This module handles writing comparison results to files for storage
//! and analysis.

use super::stats::summarize;
use super::table::render_report_with_widths;
use crate::console_format::TableWidths;
use crate::types::{ComparisonTable, PlatformRecord};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Width used for the console table embedded in markdown
const MARKDOWN_TABLE_WIDTH: usize = 120;

/// Build the JSON document for a comparison.
///
/// Contains the platform summaries, the portable/incompatible partition
/// and every comparison entry with its match flags.
pub fn json_report(platforms: &[PlatformRecord], table: &ComparisonTable) -> serde_json::Value {
    use serde_json::json;

    let summary = summarize(table);
    let platform_rows: Vec<_> = platforms
        .iter()
        .map(|p| {
            json!({
                "label": p.label,
                "platform": p.info,
                "type_count": p.types.len(),
            })
        })
        .collect();
    let entries: Vec<_> = table.values().collect();

    json!({
        "platforms": platform_rows,
        "summary": {
            "total": summary.total,
            "portable": summary.portable,
            "incompatible": summary.incompatible,
            "portable_percentage": summary.portable_percentage(),
        },
        "types": entries,
    })
}

/// Export comparison results as pretty-printed JSON.
///
/// # Arguments
/// * `platforms` - Compared platforms, in input order
/// * `table` - Aggregated comparison entries
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(
    platforms: &[PlatformRecord],
    table: &ComparisonTable,
    output_path: &Path,
) -> std::io::Result<()> {
    let report = json_report(platforms, table);
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}

/// Export comparison results as Markdown with the console report in a code block.
///
/// # Arguments
/// * `platforms` - Compared platforms, in input order
/// * `table` - Aggregated comparison entries
/// * `output_path` - Path to write the Markdown file
pub fn export_markdown_report(
    platforms: &[PlatformRecord],
    table: &ComparisonTable,
    output_path: &Path,
) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    let summary = summarize(table);

    writeln!(file, "# TypeLayout Compatibility Report\n")?;
    writeln!(file, "**Generated**: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "**Platforms**: {}\n", platforms.iter().map(|p| p.label.as_str()).collect::<Vec<_>>().join(", "))?;

    writeln!(file, "## Summary\n")?;
    writeln!(file, "- ✓ Serialization-free: {}", summary.portable.len())?;
    writeln!(file, "- ✗ Needs serialization: {}", summary.incompatible.len())?;
    writeln!(file, "- **Total**: {} ({:.0}% portable)\n", summary.total, summary.portable_percentage())?;

    writeln!(file, "## Report\n")?;
    writeln!(file, "```")?;
    write!(file, "{}", render_report_with_widths(platforms, table, TableWidths::new(MARKDOWN_TABLE_WIDTH)))?;
    writeln!(file, "```")?;

    Ok(())
}
