use std::collections::HashSet;

/// Exact identity of an `f64` for set membership, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueKey(u64);

impl ValueKey {
    #[inline]
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            ValueKey(0.0_f64.to_bits())
        } else {
            ValueKey(value.to_bits())
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Distinct values produced by one search.
///
/// Values are kept bit-exact; comparing against integers under a tolerance is
/// left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachableSet {
    values: HashSet<ValueKey>,
}

impl ReachableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(value: f64) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }

    #[inline]
    pub fn insert(&mut self, value: f64) -> bool {
        self.values.insert(ValueKey::new(value))
    }

    pub fn extend_from(&mut self, other: &ReachableSet) {
        self.values.extend(other.values.iter().copied());
    }

    pub fn contains(&self, value: f64) -> bool {
        self.values.contains(&ValueKey::new(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|key| key.value())
    }

    /// All values in ascending order.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.iter().collect();
        values.sort_by(f64::total_cmp);
        values
    }
}
