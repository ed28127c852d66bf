use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::errors::CatalogError;
use crate::catalog::record::{Catalog, PuzzleRecord};
use crate::catalog::store::read_catalog;
use crate::catalog::tier::Tier;

/// Where the play side gets its catalog from
pub trait CatalogSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be fetched or decoded.
    fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// A catalog JSON file written by the generator
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
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        read_catalog(&self.path)
    }
}

impl CatalogSource for Catalog {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        Ok(self.clone())
    }
}

/// Load-once cache over a [`CatalogSource`] that hands out random puzzles.
pub struct PuzzleProvider {
    source: Box<dyn CatalogSource>,
    catalog: Mutex<Option<Arc<Catalog>>>,
}

impl PuzzleProvider {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            catalog: Mutex::new(None),
        }
    }

    /// Fetch the catalog on first use and return the cached copy afterwards.
    ///
    /// The lock is held across the fetch, so concurrent first callers wait
    /// for the one fetch instead of starting their own. A failed fetch leaves
    /// the provider unloaded.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the first fetch fails.
    pub fn load_catalog(&self) -> Result<Arc<Catalog>, CatalogError> {
        let mut slot = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.source.fetch()?);
        info!(
            "Loaded {} puzzles (easy: {}, medium: {}, hard: {})",
            catalog.len(),
            catalog.easy.len(),
            catalog.medium.len(),
            catalog.hard.len()
        );
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded().is_some()
    }

    fn loaded(&self) -> Option<Arc<Catalog>> {
        self.catalog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// A uniformly random puzzle from `tier`.
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` before [`load_catalog`](Self::load_catalog) has
    /// succeeded and `EmptyTier` when the bucket has no puzzles.
    pub fn select_puzzle(&self, tier: Tier) -> Result<PuzzleRecord, CatalogError> {
        self.select_puzzle_with(tier, &mut rand::thread_rng())
    }

    /// [`select_puzzle`](Self::select_puzzle) with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`select_puzzle`](Self::select_puzzle).
    pub fn select_puzzle_with<R: Rng + ?Sized>(
        &self,
        tier: Tier,
        rng: &mut R,
    ) -> Result<PuzzleRecord, CatalogError> {
        let catalog = self.loaded().ok_or(CatalogError::NotLoaded)?;
        let record = catalog
            .bucket(tier)
            .choose(rng)
            .cloned()
            .ok_or(CatalogError::EmptyTier(tier))?;
        debug!("Selected {} ({}) from {}", record.id, record.target, tier);
        Ok(record)
    }

    /// Startup check that every tier has at least one puzzle. An empty tier
    /// means the generator ran with a pool or thresholds that cannot fill it.
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` or the first `EmptyTier` found.
    pub fn ensure_tiers_populated(&self) -> Result<(), CatalogError> {
        let catalog = self.loaded().ok_or(CatalogError::NotLoaded)?;
        match Tier::ALL
            .into_iter()
            .find(|&tier| catalog.bucket(tier).is_empty())
        {
            Some(tier) => Err(CatalogError::EmptyTier(tier)),
            None => Ok(()),
        }
    }
}
