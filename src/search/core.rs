use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use crate::operation::pair_results;
use crate::search::constants::MAX_CACHE_SIZE;
use crate::search::errors::SearchError;
use crate::search::set::{ReachableSet, ValueKey};

/// Computes every value reachable from a multiset of numbers by repeatedly
/// replacing two of them with their sum, either difference, product or either
/// quotient.
///
/// Nothing is pruned along the way: negative and fractional intermediates are
/// kept because they can still lead to a whole-number result.
#[derive(Debug, Default)]
pub struct ReachabilitySearch {
    cache: Option<HashMap<Vec<ValueKey>, Arc<ReachableSet>>>,
}

impl ReachabilitySearch {
    /// A search that explores every branch directly into one accumulator.
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// A search that remembers the result for each sorted sub-multiset it
    /// has already expanded. Worth it for larger inputs or repeated queries.
    pub fn memoized() -> Self {
        Self {
            cache: Some(HashMap::new()),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or contains a non-finite value.
    pub fn reachable(&mut self, numbers: &[f64]) -> Result<ReachableSet, SearchError> {
        if numbers.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        if let Some(&bad) = numbers.iter().find(|n| !n.is_finite()) {
            return Err(SearchError::NonFiniteInput(bad));
        }

        debug!("Searching reachable values of {:?}", numbers);

        let mut working = numbers.to_vec();
        let result = match self.cache.as_mut() {
            Some(cache) => expand_memoized(&mut working, cache).as_ref().clone(),
            None => {
                let mut out = ReachableSet::new();
                expand(&mut working, &mut out);
                out
            }
        };

        debug!("Found {} distinct values for {:?}", result.len(), numbers);
        Ok(result)
    }
}

/// Convenience wrapper around a fresh, non-memoizing search.
///
/// # Errors
///
/// See [`ReachabilitySearch::reachable`].
pub fn reachable_values(numbers: &[f64]) -> Result<ReachableSet, SearchError> {
    ReachabilitySearch::new().reachable(numbers)
}

/// Collapse pair `(i, j)` of `values` into `result` in place. The pair is
/// restored by [`restore_pair`] after the recursive call returns.
#[inline]
fn collapse_pair(values: &mut Vec<f64>, i: usize, j: usize, result: f64) {
    values.swap_remove(j);
    values[i] = result;
}

#[inline]
fn restore_pair(values: &mut Vec<f64>, i: usize, j: usize, a: f64, b: f64) {
    values[i] = a;
    values.push(b);
    let last = values.len() - 1;
    values.swap(j, last);
}

fn expand(values: &mut Vec<f64>, out: &mut ReachableSet) {
    let n = values.len();
    if n == 1 {
        out.insert(values[0]);
        return;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (values[i], values[j]);
            for result in pair_results(a, b).into_iter().flatten() {
                collapse_pair(values, i, j, result);
                expand(values, out);
                restore_pair(values, i, j, a, b);
            }
        }
    }
}

fn multiset_key(values: &[f64]) -> Vec<ValueKey> {
    let mut key: Vec<ValueKey> = values.iter().copied().map(ValueKey::new).collect();
    key.sort_unstable();
    key
}

fn expand_memoized(
    values: &mut Vec<f64>,
    cache: &mut HashMap<Vec<ValueKey>, Arc<ReachableSet>>,
) -> Arc<ReachableSet> {
    let n = values.len();
    if n == 1 {
        return Arc::new(ReachableSet::singleton(values[0]));
    }

    let key = multiset_key(values);
    if let Some(hit) = cache.get(&key) {
        trace!("Cache hit for {} values", n);
        return Arc::clone(hit);
    }

    let mut out = ReachableSet::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (values[i], values[j]);
            for result in pair_results(a, b).into_iter().flatten() {
                collapse_pair(values, i, j, result);
                let sub = expand_memoized(values, cache);
                out.extend_from(&sub);
                restore_pair(values, i, j, a, b);
            }
        }
    }

    let out = Arc::new(out);
    if cache.len() < MAX_CACHE_SIZE {
        cache.insert(key, Arc::clone(&out));
    }
    out
}
