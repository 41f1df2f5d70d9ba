//! Multi-platform compatibility report.
//!
//! Renders, in order: the platform summary, the per-type table, the
//! portable/incompatible partition, the differing layout signatures of
//! each incompatible type, and the closing verdict.

use super::stats::summarize;
use super::types::{CompatibilitySummary, format_entry};
use crate::console_format::{self, TableWidths, TableWriter};
use crate::types::{ComparisonTable, PlatformRecord};
use std::io::{self, Write};

pub const REPORT_TITLE: &str = "  TypeLayout Cross-Platform Compatibility Report";

/// Write the full report to a table writer.
pub fn write_report<W: Write>(
    out: &mut TableWriter<W>,
    platforms: &[PlatformRecord],
    table: &ComparisonTable,
) -> io::Result<()> {
    let summary = summarize(table);

    out.rule('=')?;
    out.line(REPORT_TITLE)?;
    out.rule('=')?;
    out.blank()?;

    write_platform_summary(out, platforms)?;
    out.blank()?;

    out.write_table_header()?;
    for entry in table.values() {
        let row = format_entry(entry);
        out.write_main_row(row.cells(), row.color)?;
    }
    out.write_table_footer()?;
    out.blank()?;

    write_partition(out, table, &summary)?;
    write_closing(out, &summary)
}

/// One line per platform: label, then its informational sizes.
fn write_platform_summary<W: Write>(out: &mut TableWriter<W>, platforms: &[PlatformRecord]) -> io::Result<()> {
    out.line(&format!("Platforms compared: {}", platforms.len()))?;
    for platform in platforms {
        let info = &platform.info;
        out.line(&format!("  • {}", platform.label))?;
        out.line(&format!(
            "    pointer={}B, long={}B, wchar_t={}B, long_double={}B, max_align={}B",
            info.pointer_size, info.sizeof_long, info.sizeof_wchar_t, info.sizeof_long_double, info.max_align
        ))?;
    }
    Ok(())
}

fn write_partition<W: Write>(
    out: &mut TableWriter<W>,
    table: &ComparisonTable,
    summary: &CompatibilitySummary,
) -> io::Result<()> {
    out.colored_line(
        &format!("✓ Serialization-free types ({}/{}):", summary.portable.len(), summary.total),
        term::color::BRIGHT_GREEN,
    )?;
    if summary.portable.is_empty() {
        out.line("   (none)")?;
    }
    for name in &summary.portable {
        out.line(&format!("   • {}", name))?;
    }
    out.blank()?;

    out.colored_line(
        &format!("✗ Types requiring serialization ({}/{}):", summary.incompatible.len(), summary.total),
        term::color::BRIGHT_RED,
    )?;
    if summary.incompatible.is_empty() {
        out.line("   (none)")?;
        out.blank()?;
    }
    for name in &summary.incompatible {
        out.line(&format!("   • {}", name))?;
        out.line("     Layout signatures differ:")?;
        let entry = &table[name];
        for label in entry.platforms() {
            out.line(&format!("       {}: {}", label, entry.layout_sigs[label]))?;
        }
        out.blank()?;
    }
    Ok(())
}

fn write_closing<W: Write>(out: &mut TableWriter<W>, summary: &CompatibilitySummary) -> io::Result<()> {
    out.rule('=')?;
    if summary.all_portable() {
        out.colored_line("  ALL types are serialization-free across all platforms!", term::color::BRIGHT_GREEN)?;
    } else {
        out.line(&format!(
            "  {:.0}% of types are serialization-free across all platforms.",
            summary.portable_percentage()
        ))?;
        out.line(&format!("  {} type(s) need serialization for cross-platform use.", summary.incompatible.len()))?;
    }
    out.rule('=')
}

/// Render the report as plain text using the given column widths.
pub fn render_report_with_widths(platforms: &[PlatformRecord], table: &ComparisonTable, widths: TableWidths) -> String {
    let mut out = TableWriter::new(Vec::new(), false, widths);
    // Writing into a Vec cannot fail
    let _ = write_report(&mut out, platforms, table);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Render the report as plain text sized for the current console.
///
/// Widths come from `console_format::get_widths()`, so the result depends on the
/// `--console-width` override or the attached terminal.
pub fn render_report(platforms: &[PlatformRecord], table: &ComparisonTable) -> String {
    render_report_with_widths(platforms, table, console_format::get_widths())
}

/// Print the report to stdout.
pub fn print_report(platforms: &[PlatformRecord], table: &ComparisonTable, use_colors: bool) -> io::Result<()> {
    if !use_colors {
        print!("{}", render_report(platforms, table));
        return Ok(());
    }
    let stdout = io::stdout();
    let mut out = TableWriter::new(stdout.lock(), use_colors, console_format::get_widths());
    write_report(&mut out, platforms, table)
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
