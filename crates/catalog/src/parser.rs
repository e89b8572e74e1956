//! Parser for catalog files.
//!
//! A catalog file is a JSON array of destination records in camelCase, e.g.
//! `[{"id": "goa", "name": "Goa", "budgetCategory": "Low", ...}]`.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::types::Destination;

/// Read and parse a catalog file.
pub fn parse_destinations(path: &Path) -> Result<Vec<Destination>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_destinations_str(&content, &file)
}

/// Parse catalog JSON already held in memory.
///
/// `file` is only used to label parse errors.
pub fn parse_destinations_str(content: &str, file: &str) -> Result<Vec<Destination>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}
