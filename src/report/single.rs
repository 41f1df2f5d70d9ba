//! Single-platform output.
//!
//! With only one platform there is nothing to compare, so the extracted
//! signatures are echoed in their original order.

use crate::types::PlatformRecord;
use std::fmt::Write;

/// Render one platform's signatures as plain text.
pub fn render_single(platform: &PlatformRecord) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Platform: {}", platform.label);
    let _ = writeln!(out);
    for ty in &platform.types {
        let _ = writeln!(out, "  {} (size={}, align={})", ty.name, ty.size, ty.align);
        let _ = writeln!(out, "    Layout:     {}", ty.layout_signature);
        let _ = writeln!(out, "    Definition: {}", ty.definition_signature);
        let _ = writeln!(out);
    }

    out
}

/// Print one platform's signatures to stdout.
pub fn print_single(platform: &PlatformRecord) {
    print!("{}", render_single(platform));
}
