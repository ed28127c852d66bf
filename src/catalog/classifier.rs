use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::catalog::errors::CatalogError;
use crate::catalog::record::{Catalog, PuzzleRecord, puzzle_id};
use crate::catalog::tier::{Tier, TierThresholds};
use crate::config::{ConfigError, GeneratorConfig};
use crate::numeric::nearest_integer;
use crate::search::{ReachableSet, reachable_values};

const PROGRESS_INTERVAL: usize = 1000;

/// A combination together with the targets it supports and the tier they imply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub numbers: Vec<u32>,
    pub targets: Vec<u32>,
    pub tier: Tier,
}

/// Whole, positive values no larger than `ceiling`, ascending and deduplicated.
pub fn valid_targets(reachable: &ReachableSet, ceiling: u32) -> Vec<u32> {
    let targets: BTreeSet<u32> = reachable
        .iter()
        .filter_map(nearest_integer)
        .filter(|&n| n > 0 && n <= i64::from(ceiling))
        .filter_map(|n| u32::try_from(n).ok())
        .collect();
    targets.into_iter().collect()
}

/// Run the search for one combination and classify it.
///
/// Returns `Ok(None)` for a combination with no valid targets.
///
/// # Errors
///
/// Returns an error if the search rejects the input.
pub fn classify_combination(
    numbers: &[u32],
    ceiling: u32,
    thresholds: &TierThresholds,
) -> Result<Option<Classified>, CatalogError> {
    let values: Vec<f64> = numbers.iter().copied().map(f64::from).collect();
    let reachable = reachable_values(&values)?;
    let targets = valid_targets(&reachable, ceiling);

    let Some(tier) = thresholds.tier_for(targets.len()) else {
        debug!("Dropping {:?}: no valid targets", numbers);
        return Ok(None);
    };

    debug!(
        "{:?} reaches {} targets, classified {}",
        numbers,
        targets.len(),
        tier
    );
    Ok(Some(Classified {
        numbers: numbers.to_vec(),
        targets,
        tier,
    }))
}

/// Build the full catalog for `config`.
///
/// Combinations are classified independently (in parallel when enabled) and
/// collected back in enumeration order before identifiers are assigned, so the
/// output does not depend on scheduling.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a search fails. No
/// partial catalog is returned.
pub fn generate_catalog(config: &GeneratorConfig) -> Result<Catalog, CatalogError> {
    config.validate()?;

    let combinations: Vec<Vec<u32>> = config
        .pool
        .combinations(config.combination_size)
        .map_err(ConfigError::from)?
        .collect();
    let total = combinations.len();
    info!(
        "Found {} combinations. Evaluating puzzles{}...",
        total,
        if config.parallel { " in parallel" } else { "" }
    );

    let processed = AtomicUsize::new(0);
    let classify = |numbers: &Vec<u32>| {
        let result = classify_combination(numbers, config.ceiling, &config.thresholds);
        let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % PROGRESS_INTERVAL == 0 {
            info!("Processed {} / {} combinations...", done, total);
        }
        result
    };

    let classified: Vec<Option<Classified>> = if config.parallel {
        combinations
            .par_iter()
            .map(classify)
            .collect::<Result<_, _>>()?
    } else {
        combinations
            .iter()
            .map(classify)
            .collect::<Result<_, _>>()?
    };

    let mut catalog = Catalog::new();
    let mut next_id = 0;
    for entry in classified.into_iter().flatten() {
        for target in entry.targets {
            catalog.push(
                entry.tier,
                PuzzleRecord {
                    id: puzzle_id(next_id),
                    numbers: entry.numbers.clone(),
                    target,
                },
            );
            next_id += 1;
        }
    }

    info!(
        "Finished generating puzzles! Easy: {}, Medium: {}, Hard: {}",
        catalog.easy.len(),
        catalog.medium.len(),
        catalog.hard.len()
    );
    Ok(catalog)
}
