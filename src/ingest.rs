/// Signature file ingestion
///
/// This module handles:
/// - Reading signature files produced by the extraction tool
/// - Strict parsing into typed records (every key is required)
/// - Rejecting records the comparison cannot trust
/// - Building the platform label from the arch prefix and file stem
/// - Keeping labels unique across the compared files
use crate::types::{PlatformInfo, PlatformRecord, SignatureFile};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed signature data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("type '{name}': {reason}")]
    InvalidType { name: String, reason: String },
    #[error("type '{0}' is listed more than once")]
    DuplicateType(String),
    #[error("platform label '{0}' is shared by more than one input file")]
    DuplicateLabel(String),
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<IngestError>,
    },
}

impl IngestError {
    fn in_file(self, path: &Path) -> Self {
        IngestError::InFile { path: path.to_path_buf(), source: Box::new(self) }
    }
}

/// Parse and validate the JSON text of one signature file
pub fn parse_signature_file(text: &str) -> Result<SignatureFile, IngestError> {
    let file: SignatureFile = serde_json::from_str(text)?;
    validate(&file)?;
    Ok(file)
}

/// Reject non-positive sizes and alignments, and names repeated within one file
pub fn validate(file: &SignatureFile) -> Result<(), IngestError> {
    let mut seen = HashSet::new();

    for ty in &file.types {
        if ty.size == 0 {
            return Err(IngestError::InvalidType { name: ty.name.clone(), reason: "size must be positive".to_string() });
        }
        if ty.align == 0 {
            return Err(IngestError::InvalidType {
                name: ty.name.clone(),
                reason: "align must be positive".to_string(),
            });
        }
        if !seen.insert(ty.name.as_str()) {
            return Err(IngestError::DuplicateType(ty.name.clone()));
        }
    }

    Ok(())
}

/// Build a platform label: "[64-le]" from "sig_x86.json" becomes "64-le (sig_x86)"
pub fn platform_label(info: &PlatformInfo, path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    format!("{} ({})", arch_tag(info), stem)
}

/// Label qualified by the parent directory: "64-le (linux/signatures)"
pub fn qualified_label(info: &PlatformInfo, path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    match path.parent().and_then(|p| p.file_name()) {
        Some(dir) => format!("{} ({}/{})", arch_tag(info), dir.to_string_lossy(), stem),
        None => format!("{} ({})", arch_tag(info), stem),
    }
}

fn arch_tag(info: &PlatformInfo) -> &str {
    info.arch_prefix.trim_matches(['[', ']'])
}

/// Requalify colliding labels with their parent directory; fail if any still collide
pub fn ensure_unique_labels(platforms: &mut [PlatformRecord], paths: &[PathBuf]) -> Result<(), IngestError> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for platform in platforms.iter() {
        *counts.entry(platform.label.clone()).or_default() += 1;
    }

    for (platform, path) in platforms.iter_mut().zip(paths) {
        if counts[&platform.label] > 1 {
            let qualified = qualified_label(&platform.info, path);
            warn!("Platform label '{}' is ambiguous, using '{}'", platform.label, qualified);
            platform.label = qualified;
        }
    }

    let mut seen = HashSet::new();
    for platform in platforms.iter() {
        if !seen.insert(platform.label.as_str()) {
            return Err(IngestError::DuplicateLabel(platform.label.clone()));
        }
    }
    Ok(())
}

/// Load one signature file into a validated platform record
pub fn load_platform(path: &Path) -> Result<PlatformRecord, IngestError> {
    debug!("Loading signature file {:?}", path);

    let text = fs::read_to_string(path).map_err(|source| IngestError::Io { path: path.to_path_buf(), source })?;
    let file = parse_signature_file(&text).map_err(|e| e.in_file(path))?;
    let label = platform_label(&file.platform, path);

    debug!("Loaded {} types for {}", file.types.len(), label);
    Ok(PlatformRecord::new(label, file.platform, file.types))
}

/// Load every file in argument order, stopping at the first failure
pub fn load_platforms(paths: &[PathBuf]) -> Result<Vec<PlatformRecord>, IngestError> {
    let mut platforms = paths.iter().map(|p| load_platform(p)).collect::<Result<Vec<_>, _>>()?;
    ensure_unique_labels(&mut platforms, paths)?;
    Ok(platforms)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;
