/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Table layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// It accepts pre-formatted data from the report module and renders it.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination:
/// - Console (stdout) with optional colors
/// - String buffers (for `render_report_with_widths` and markdown)
/// - Files
use std::io::{self, Write};
use std::sync::OnceLock;
use term::Terminal;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the `=` and `-` rules framing the report
pub const RULE_WIDTH: usize = 72;

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
    widths: TableWidths,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool, widths: TableWidths) -> Self {
        Self { writer, use_colors, widths }
    }

    /// Write formatted text, optionally with color
    pub fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(mut t) = term::TerminfoTerminal::new(&mut self.writer) {
                if t.fg(color).is_ok() {
                    t.write_all(text.as_bytes())?;
                    let _ = t.reset();
                    return Ok(());
                }
            }
            // No usable terminfo entry: plain ANSI SGR
            write!(self.writer, "\x1b[{}m{}\x1b[0m", ansi_code(color), text)
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Write one plain line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Write one line in color
    pub fn colored_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.write_colored(text, color)?;
        writeln!(self.writer)
    }

    /// Write an empty line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Write a full-width rule made of `ch`
    pub fn rule(&mut self, ch: char) -> io::Result<()> {
        writeln!(self.writer, "{}", ch.to_string().repeat(RULE_WIDTH))
    }

    /// Write the table top border and column headings
    pub fn write_table_header(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", format_table_header(&self.widths))
    }

    /// Write the table bottom border
    pub fn write_table_footer(&mut self) -> io::Result<()> {
        write!(self.writer, "{}", format_table_footer(&self.widths))
    }

    /// Write a main 5-column row with proper formatting and color
    pub fn write_main_row(&mut self, cells: [&str; 5], color: Color) -> io::Result<()> {
        let w = self.widths;
        let displays: Vec<String> = cells
            .iter()
            .zip(w.columns().iter())
            .map(|(cell, width)| truncate_with_padding(cell, width - 2))
            .collect();

        let row = format!("│ {} │ {} │ {} │ {} │ {} │", displays[0], displays[1], displays[2], displays[3], displays[4]);
        self.write_colored(&row, color)?;
        writeln!(self.writer)
    }

    /// Consume the writer, returning the destination
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Map a term color to its ANSI SGR foreground code
fn ansi_code(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) }
}

//
// Table Layout and Widths
//

/// Column widths for the 5-column table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub type_name: usize,
    pub size: usize,
    pub layout: usize,
    pub definition: usize,
    pub verdict: usize,
    pub total: usize, // Total table width including borders
}

impl TableWidths {
    pub fn new(terminal_width: usize) -> Self {
        // Borders: │ = 6 characters (1 before each column + 1 at end)
        let borders = 6;
        let available = terminal_width.saturating_sub(borders);

        // Size: "16/12/8" fits comfortably
        let size = 14;
        // Layout: "✗ DIFFER"
        let layout = 12;
        // Definition: same glyphs, wider heading
        let definition = 14;
        // Verdict: "needs serialization"
        let verdict = 23;

        // Type name gets remaining space (for long qualified names)
        let fixed_total = size + layout + definition + verdict;
        let type_name = if available > fixed_total + 20 {
            available - fixed_total
        } else {
            20 // Minimum fallback
        };

        TableWidths { type_name, size, layout, definition, verdict, total: terminal_width }
    }

    fn columns(&self) -> [usize; 5] {
        [self.type_name, self.size, self.layout, self.definition, self.verdict]
    }
}

/// Explicit width set with --console-width
static WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (first call wins)
pub fn set_console_width(width: usize) {
    let _ = WIDTH_OVERRIDE.set(width);
}

/// Get console width: override, then terminal, then 120
fn get_terminal_width() -> usize {
    if let Some(w) = WIDTH_OVERRIDE.get() {
        return *w;
    }
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        120 // Default width
    }
}

/// Table widths for the current console
pub fn get_widths() -> TableWidths {
    TableWidths::new(get_terminal_width())
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);

            if current_width + c_width > target_width {
                break;
            }

            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        let padding = width - display_w;
        format!("{}{}", s, " ".repeat(padding))
    }
}

//
// Table Header/Footer Rendering
//

/// Format table top border and headings as a string
pub fn format_table_header(w: &TableWidths) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "┌{:─<width1$}┬{:─<width2$}┬{:─<width3$}┬{:─<width4$}┬{:─<width5$}┐\n",
        "",
        "",
        "",
        "",
        "",
        width1 = w.type_name,
        width2 = w.size,
        width3 = w.layout,
        width4 = w.definition,
        width5 = w.verdict
    ));
    output.push_str(&format!(
        "│{:^width1$}│{:^width2$}│{:^width3$}│{:^width4$}│{:^width5$}│\n",
        "Type",
        "Size",
        "Layout",
        "Definition",
        "Verdict",
        width1 = w.type_name,
        width2 = w.size,
        width3 = w.layout,
        width4 = w.definition,
        width5 = w.verdict
    ));
    output.push_str(&format!(
        "├{:─<width1$}┼{:─<width2$}┼{:─<width3$}┼{:─<width4$}┼{:─<width5$}┤\n",
        "",
        "",
        "",
        "",
        "",
        width1 = w.type_name,
        width2 = w.size,
        width3 = w.layout,
        width4 = w.definition,
        width5 = w.verdict
    ));

    output
}

/// Format table footer as a string
pub fn format_table_footer(w: &TableWidths) -> String {
    format!(
        "└{:─<width1$}┴{:─<width2$}┴{:─<width3$}┴{:─<width4$}┴{:─<width5$}┘\n",
        "",
        "",
        "",
        "",
        "",
        width1 = w.type_name,
        width2 = w.size,
        width3 = w.layout,
        width4 = w.definition,
        width5 = w.verdict
    )
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
