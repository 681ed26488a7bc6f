use super::{parse_catalog, CatalogSource};
use crate::error::LoadError;
use crate::model::Catalog;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Catalog, LoadError> {
        debug!(path = %self.path.display(), "reading catalog");
        let text = fs::read_to_string(&self.path).map_err(|source| LoadError::Unreachable {
            path: self.path.clone(),
            source,
        })?;
        let catalog = parse_catalog(&text)?;
        debug!(courses = catalog.len(), "catalog parsed");
        Ok(catalog)
    }
}
