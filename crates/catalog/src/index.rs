//! The in-memory catalog and its integrity checks.
//!
//! Destinations keep their file order, which the scoring engine relies on to
//! break ties, and an id index gives O(1) lookups when joining AI results.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Destination;

/// Read-only set of destinations, validated once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading destination catalog from {:?}", path);
        let destinations = parser::parse_destinations(path)?;
        let catalog = Self::from_destinations(destinations)?;
        info!("Catalog loaded with {} destinations", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    ///
    /// Fails on the first duplicate id, blank id or empty tag list.
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(destinations.len());
        for (position, destination) in destinations.iter().enumerate() {
            validate_destination(destination)?;
            if by_id.insert(destination.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: destination.id.clone(),
                });
            }
        }
        debug!("Validated {} destinations", destinations.len());
        Ok(Self { destinations, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.by_id.get(id).map(|&i| &self.destinations[i])
    }

    /// All destinations in catalog order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Case-insensitive search over name, country and region.
    ///
    /// Exact name matches come first, then substring matches in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Destination> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for destination in &self.destinations {
            let name = destination.name.to_lowercase();
            if name == needle {
                exact.push(destination);
            } else if name.contains(&needle)
                || destination.country.to_lowercase().contains(&needle)
                || destination.region.to_lowercase().contains(&needle)
            {
                partial.push(destination);
            }
        }
        exact.extend(partial);
        exact
    }
}

fn validate_destination(destination: &Destination) -> Result<()> {
    if destination.id.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "id".to_string(),
            value: destination.id.clone(),
        });
    }
    for (field, values) in destination.tag_lists() {
        if values.is_empty() {
            return Err(CatalogError::EmptyField {
                id: destination.id.clone(),
                field: field.to_string(),
            });
        }
    }
    Ok(())
}
