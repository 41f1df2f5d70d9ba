//! Report generation module - Data transformations and rendering.
//!
//! This module handles:
//! - Converting ComparisonEntry to FormattedRow
//! - Partitioning types into portable and incompatible
//! - Rendering the multi-platform report and the single-platform dump
//! - Export to JSON and Markdown formats
//!
//! Low-level table drawing is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Rendering types (MatchIcon, FormattedRow, CompatibilitySummary)
//! - `stats` - Portable/incompatible partition
//! - `table` - Multi-platform compatibility report
//! - `single` - Single-platform signature dump
//! - `export` - JSON and Markdown export

mod export;
mod single;
mod stats;
mod table;
mod types;

pub use stats::summarize;

pub use export::{export_json_report, export_markdown_report};

pub use table::print_report;

pub use single::print_single;
