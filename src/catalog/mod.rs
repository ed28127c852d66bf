//! Puzzle classification, the generated catalog and play-side retrieval

mod classifier;
mod errors;
mod provider;
mod record;
mod store;
mod tier;

pub use classifier::{Classified, classify_combination, generate_catalog, valid_targets};
pub use errors::CatalogError;
pub use provider::{CatalogSource, FileSource, PuzzleProvider};
pub use record::{Catalog, PuzzleRecord, puzzle_id};
pub use store::{read_catalog, to_json, write_catalog};
pub use tier::{Tier, TierThresholds};

#[cfg(test)]
mod tests;
