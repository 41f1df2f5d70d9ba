//! Report type definitions for the rendering model.
//!
//! This module defines the type-safe rendering model used to convert
//! comparison entries into displayable rows.

use crate::types::{ComparisonEntry, Verdict};
use term::color::Color;

/// Match indicator for the Layout and Definition columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIcon {
    /// Every platform agrees: ✓ MATCH
    Match,
    /// At least two platforms disagree: ✗ DIFFER
    Differ,
}

impl MatchIcon {
    pub fn from_match(matched: bool) -> Self {
        if matched { MatchIcon::Match } else { MatchIcon::Differ }
    }

    /// Get the display text for this indicator.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchIcon::Match => "✓ MATCH",
            MatchIcon::Differ => "✗ DIFFER",
        }
    }
}

impl Verdict {
    /// Get the display text for the Verdict column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Portable => "serialization-free",
            Verdict::NeedsSerialization => "needs serialization",
        }
    }

    /// Row color for this verdict.
    pub fn color(&self) -> Color {
        match self {
            Verdict::Portable => term::color::BRIGHT_GREEN,
            Verdict::NeedsSerialization => term::color::BRIGHT_RED,
        }
    }
}

/// Formatted row data ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRow {
    /// Type column content
    pub name: String,
    /// Size column content ("8" or "16/12")
    pub size: String,
    /// Layout column content
    pub layout: String,
    /// Definition column content
    pub definition: String,
    /// Verdict column content
    pub verdict: String,
    /// Color for the row
    pub color: Color,
}

impl FormattedRow {
    pub fn cells(&self) -> [&str; 5] {
        [self.name.as_str(), self.size.as_str(), self.layout.as_str(), self.definition.as_str(), self.verdict.as_str()]
    }
}

/// Size column: the shared size, or every distinct size in first-seen order joined by "/"
pub fn format_sizes(entry: &ComparisonEntry) -> String {
    entry.distinct_sizes().iter().map(|s| s.to_string()).collect::<Vec<_>>().join("/")
}

/// Format a comparison entry as a table row.
pub fn format_entry(entry: &ComparisonEntry) -> FormattedRow {
    let verdict = entry.verdict();

    FormattedRow {
        name: entry.name.clone(),
        size: format_sizes(entry),
        layout: MatchIcon::from_match(entry.layout_match()).as_str().to_string(),
        definition: MatchIcon::from_match(entry.definition_match()).as_str().to_string(),
        verdict: verdict.as_str().to_string(),
        color: verdict.color(),
    }
}

/// Portable / incompatible partition of a comparison table.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct CompatibilitySummary {
    /// Type names whose layout matches everywhere, in table order
    pub portable: Vec<String>,
    /// Type names that need serialization, in table order
    pub incompatible: Vec<String>,
    /// Number of distinct type names compared
    pub total: usize,
}

impl CompatibilitySummary {
    /// Share of portable types, 0 for an empty table
    pub fn portable_percentage(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.portable.len() as f64 / self.total as f64 * 100.0 }
    }

    pub fn all_portable(&self) -> bool {
        self.total > 0 && self.incompatible.is_empty()
    }
}
