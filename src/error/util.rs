//! Utility functions for error handling

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EmsStatsError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(EmsStatsError::io(
            path,
            format!("file not found, needed for: {purpose}"),
        ));
    }

    if !path.is_file() {
        return Err(EmsStatsError::io(
            path,
            format!("path is not a file, expected a file for: {purpose}"),
        ));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "file not found - it may have been deleted during operation".to_string()
                }
                _ => format!("failed to open file for: {purpose}"),
            };
            Err(EmsStatsError::io_with_source(path, context, e))
        }
    }
}
