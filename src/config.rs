//! Generator configuration
//!
//! Defaults reproduce the standard catalog: pool `1..=25`, four numbers per
//! puzzle, targets up to 150, easy above 50 targets and medium from 25. A JSON
//! file may override any subset of fields; CLI flags override the file.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::TierThresholds;
use crate::pool::{DEFAULT_POOL_MAX, DEFAULT_POOL_MIN, NumberPool, PoolError};

pub const DEFAULT_COMBINATION_SIZE: usize = 4;
pub const DEFAULT_TARGET_CEILING: u32 = 150;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid number pool: {0}")]
    Pool(#[from] PoolError),
    #[error("Target ceiling must be positive")]
    ZeroCeiling,
    #[error("Easy threshold {easy_above} must be at least the medium threshold {medium_from}")]
    InvertedThresholds { easy_above: usize, medium_from: usize },
    #[error("Medium threshold must be at least 1")]
    ZeroMediumThreshold,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk form of [`GeneratorConfig`]; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub pool: Option<Vec<u32>>,
    pub pool_min: Option<u32>,
    pub pool_max: Option<u32>,
    pub combination_size: Option<usize>,
    pub ceiling: Option<u32>,
    pub easy_above: Option<usize>,
    pub medium_from: Option<usize>,
    pub parallel: Option<bool>,
}

/// Everything the batch generator needs
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub pool: NumberPool,
    pub combination_size: usize,
    pub ceiling: u32,
    pub thresholds: TierThresholds,
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pool: NumberPool::default(),
            combination_size: DEFAULT_COMBINATION_SIZE,
            ceiling: DEFAULT_TARGET_CEILING,
            thresholds: TierThresholds::default(),
            parallel: true,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an invalid configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading generator config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents)?;
        Self::default().merge(file)
    }

    /// Apply the fields set in `file` on top of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pool or thresholds are invalid.
    pub fn merge(mut self, file: ConfigFile) -> Result<Self, ConfigError> {
        if let Some(values) = file.pool {
            if file.pool_min.is_some() || file.pool_max.is_some() {
                warn!("Explicit pool given, ignoring pool_min/pool_max");
            }
            self.pool = NumberPool::new(values)?;
        } else if file.pool_min.is_some() || file.pool_max.is_some() {
            let current = self.pool.values();
            let min = file
                .pool_min
                .or_else(|| current.first().copied())
                .unwrap_or(DEFAULT_POOL_MIN);
            let max = file
                .pool_max
                .or_else(|| current.last().copied())
                .unwrap_or(DEFAULT_POOL_MAX);
            self.pool = NumberPool::range(min, max)?;
        }
        if let Some(size) = file.combination_size {
            self.combination_size = size;
        }
        if let Some(ceiling) = file.ceiling {
            self.ceiling = ceiling;
        }
        if let Some(easy_above) = file.easy_above {
            self.thresholds.easy_above = easy_above;
        }
        if let Some(medium_from) = file.medium_from {
            self.thresholds.medium_from = medium_from;
        }
        if let Some(parallel) = file.parallel {
            self.parallel = parallel;
        }
        self.validate()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error for a combination size that does not fit the pool, a
    /// zero ceiling, or thresholds that would leave a tier unreachable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::pool::validate_combination_size(self.combination_size, self.pool.len())?;
        if self.ceiling == 0 {
            return Err(ConfigError::ZeroCeiling);
        }
        if self.thresholds.medium_from == 0 {
            return Err(ConfigError::ZeroMediumThreshold);
        }
        if self.thresholds.easy_above < self.thresholds.medium_from {
            return Err(ConfigError::InvertedThresholds {
                easy_above: self.thresholds.easy_above,
                medium_from: self.thresholds.medium_from,
            });
        }
        Ok(())
    }
}
