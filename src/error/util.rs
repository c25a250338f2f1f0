//! Utility functions for error handling
//!
//! Helpers that attach the path and the reason a file was needed to I/O failures.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, bail};

use crate::error::Result;

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        bail!("File not found: {} (needed for: {purpose})", path.display());
    }

    if !path.is_file() {
        bail!("Path is not a file: {} (expected a file for: {purpose})", path.display());
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        anyhow::Error::new(e).context(format!("{context}: {}", path.display()))
    })
}

/// Create a file for writing, creating missing parent directories first
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Failed to create directory {} for: {purpose}",
                parent.display()
            )
        })?;
    }

    fs::File::create(path)
        .with_context(|| format!("Failed to create file {} for: {purpose}", path.display()))
}
