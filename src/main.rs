// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod compare;
mod config;
mod console_format;
mod ingest;
mod report;
mod types;
mod ui;

#[cfg(test)]
mod test_support;

use config::{Mode, RunConfig};
use log::info;
use types::*;

/// Exit status when --strict is set and some type needs serialization
const EXIT_NEEDS_SERIALIZATION: i32 = 2;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load every platform before comparing anything
    let platforms = match ingest::load_platforms(&config.files) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Error loading signatures: {}", e));
            std::process::exit(1);
        }
    };

    let exit_code = match config.mode {
        Mode::Single => {
            report::print_single(&platforms[0]);
            0
        }
        Mode::Compare => run_comparison(&platforms, &config),
    };

    std::process::exit(exit_code);
}

/// Compare all platforms, print the report and write requested exports
fn run_comparison(platforms: &[PlatformRecord], config: &RunConfig) -> i32 {
    let table = compare::aggregate(platforms);
    info!("Compared {} types across {} platforms", table.len(), platforms.len());

    if let Err(e) = report::print_report(platforms, &table, config.use_colors) {
        ui::print_error(&format!("Failed to write report: {}", e));
        return 1;
    }

    generate_file_reports(platforms, &table, config);

    let summary = report::summarize(&table);
    if config.strict && !summary.incompatible.is_empty() { EXIT_NEEDS_SERIALIZATION } else { 0 }
}

/// Write JSON and Markdown reports when requested
fn generate_file_reports(platforms: &[PlatformRecord], table: &ComparisonTable, config: &RunConfig) {
    if let Some(ref path) = config.json_output {
        match report::export_json_report(platforms, table, path) {
            Ok(_) => ui::status(&format!("JSON report saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }

    if let Some(ref path) = config.markdown_output {
        match report::export_markdown_report(platforms, table, path) {
            Ok(_) => ui::status(&format!("Markdown report saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save markdown report: {}", e),
        }
    }
}
