//! Tetrad - four-number arithmetic puzzles
//!
//! This library finds every whole-number target reachable from a set of numbers
//! by pairwise arithmetic, builds a difficulty-graded catalog of puzzles over a
//! pool of numbers, and replays puzzles move by move for interactive play.

pub mod catalog;
pub mod config;
pub mod numeric;
pub mod operation;
pub mod pool;
pub mod search;
pub mod session;

// Re-export the main public API
pub use catalog::{Catalog, CatalogError, PuzzleProvider, PuzzleRecord, Tier, generate_catalog};
pub use config::GeneratorConfig;
pub use numeric::{Fraction, to_fraction};
pub use operation::Operation;
pub use search::{ReachabilitySearch, ReachableSet, SearchError, reachable_values};
pub use session::{Game, MoveError, Session, SessionView};

/// Every positive whole-number target up to `ceiling` reachable from `numbers`
///
/// This is a convenience function that runs a fresh search and keeps only the
/// values a puzzle could use as its target.
///
/// # Arguments
///
/// * `numbers` - The starting numbers; each must be used exactly once
/// * `ceiling` - The largest target worth keeping
///
/// # Returns
///
/// * `Ok(Vec<u32>)` - Reachable targets in ascending order, possibly empty
/// * `Err(SearchError)` - If `numbers` is empty
///
/// # Errors
///
/// This function will return an error if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use tetrad::find_targets;
///
/// // 1 + 2 + 3 + 4 = 10
/// match find_targets(&[1, 2, 3, 4], 150) {
///     Ok(targets) => assert!(targets.contains(&10)),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_targets(numbers: &[u32], ceiling: u32) -> Result<Vec<u32>, SearchError> {
    let values: Vec<f64> = numbers.iter().copied().map(f64::from).collect();
    let reachable = reachable_values(&values)?;
    Ok(catalog::valid_targets(&reachable, ceiling))
}
