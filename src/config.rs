/// Configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Applying environment overrides
/// - Deciding between single-platform and comparison mode
use crate::cli::CliArgs;
use log::debug;
use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Set to any non-empty value to disable colored output
pub const NO_COLOR_ENV: &str = "TYPELAYOUT_NO_COLOR";

/// How the signature files should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One file: echo its signatures
    Single,
    /// Several files: compare across platforms
    Compare,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub files: Vec<PathBuf>,
    pub mode: Mode,
    pub json_output: Option<PathBuf>,
    pub markdown_output: Option<PathBuf>,
    pub use_colors: bool,
    pub strict: bool,
}

/// Build a complete RunConfig from CLI arguments
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig, String> {
    args.validate()?;

    let mode = if args.is_comparison() { Mode::Compare } else { Mode::Single };
    let env_no_color = env::var(NO_COLOR_ENV).map(|v| !v.is_empty()).unwrap_or(false);
    let use_colors = !args.no_color && !env_no_color && std::io::stdout().is_terminal();

    if mode == Mode::Single && (args.json_output.is_some() || args.markdown_output.is_some()) {
        return Err("--json and --markdown need at least two signature files to compare".to_string());
    }

    debug!("Resolved {} signature files, mode {:?}, colors {}", args.files.len(), mode, use_colors);

    Ok(RunConfig {
        files: args.files.clone(),
        mode,
        json_output: args.json_output.clone(),
        markdown_output: args.markdown_output.clone(),
        use_colors,
        strict: args.strict,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
