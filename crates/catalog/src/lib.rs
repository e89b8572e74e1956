//! # Catalog Crate
//!
//! Loads and indexes the destination catalog the recommendation engine
//! matches against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Destination, BudgetCategory, UserPreferences)
//! - **parser**: Parse the JSON catalog file into Rust structs
//! - **index**: The validated, read-only `Catalog`
//! - **wishlist**: File-backed set of saved destination ids
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/destinations.json"))?;
//! let goa = catalog.get("goa").unwrap();
//! println!("{} is a {} budget destination", goa.name, goa.budget_category);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod wishlist;

pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use types::{ANYTIME, BudgetCategory, Destination, DestinationId, UserPreferences};
pub use wishlist::Wishlist;
