//! # Catalog Sources
//!
//! Catalogs are read through the [`CatalogSource`] trait so the browsing core never
//! cares where the records come from.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a JSON document from disk
//! - [`memory::InMemorySource`]: hands back a prepared catalog, or a failure, for tests
//!
//! ## Wire Format
//!
//! ```text
//! {
//!   "courses": [
//!     { "courseCode": "CS101", "title": "...", "department": "CS",
//!       "description": "...", "level": 100, "credits": 3,
//!       "terms": ["Fall"], "prerequisites": [] }
//!   ]
//! }
//! ```
//!
//! Nothing beyond the record shape is validated. Duplicate codes, negative credits
//! or odd levels pass through untouched.

use crate::error::LoadError;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Something a catalog can be loaded from, exactly once per session.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, LoadError>;
}

/// Parses the `{ "courses": [...] }` document into a catalog.
pub fn parse_catalog(text: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(text)?;
    Ok(catalog)
}
