use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::tier::Tier;
use crate::config::ConfigError;
use crate::search::SearchError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Puzzle catalog has not been loaded")]
    NotLoaded,
    #[error("No puzzles available for difficulty: {0}")]
    EmptyTier(Tier),
    #[error("Unknown difficulty: {0}")]
    UnknownTier(String),
    #[error("Invalid generator configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
