use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a catalog from its source.
///
/// This is the only error the browsing core knows about: it is raised once,
/// during bootstrap, and turns the session into its terminal failed state.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Catalog source unreachable: {}: {source}", path.display())]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
