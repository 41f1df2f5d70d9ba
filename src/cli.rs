use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "typelayout-compare")]
#[command(about = "Compare type layout signatures across platforms and report which types need serialization")]
#[command(version)]
pub struct CliArgs {
    /// Signature JSON files, one per platform
    /// With a single file the extracted signatures are shown;
    /// with several files they are compared across platforms
    #[arg(value_name = "SIGNATURES.json", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Also write the comparison as JSON to this path
    #[arg(long = "json", value_name = "PATH")]
    pub json_output: Option<PathBuf>,

    /// Also write the report as Markdown to this path
    #[arg(long = "markdown", value_name = "PATH")]
    pub markdown_output: Option<PathBuf>,

    /// Override console width for testing (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with status 2 when any type needs serialization
    #[arg(long)]
    pub strict: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.files.is_empty() {
            return Err("Provide at least one signature JSON file".to_string());
        }

        // The same file twice would compare a platform against itself
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file) {
                return Err(format!("Signature file given more than once: {}", file.display()));
            }
        }

        if self.console_width == Some(0) {
            return Err("--console-width must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Are we comparing, or just showing one platform?
    pub fn is_comparison(&self) -> bool {
        self.files.len() > 1
    }
}
