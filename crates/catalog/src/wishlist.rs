//! Saved destination ids, persisted as a JSON array on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CatalogError, Result};

/// Insertion-ordered set of destination ids backed by a file.
#[derive(Debug, Clone)]
pub struct Wishlist {
    path: PathBuf,
    ids: Vec<String>,
}

impl Wishlist {
    /// Load the wishlist at `path`; a missing file is an empty wishlist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ids = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            Vec::new()
        };
        debug!("Loaded wishlist with {} entries from {:?}", ids.len(), path);
        Ok(Self { path, ids })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    /// Returns false if the id was already saved.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Returns false if the id was not saved.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| saved != id);
        self.ids.len() != before
    }

    /// Add the id if absent, remove it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.ids).map_err(|e| CatalogError::ParseError {
            file: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
