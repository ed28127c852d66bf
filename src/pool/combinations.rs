use log::debug;

/// Number of `k`-subsets of an `n`-set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Lexicographic k-subset enumeration over a slice.
///
/// Tracks a strictly increasing index vector and backtracks to the rightmost
/// index that can still move. Two enumerations over the same input always
/// yield the same sequence.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    items: &'a [u32],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(items: &'a [u32], size: usize) -> Self {
        debug!(
            "Enumerating {}-subsets of {} items ({} total)",
            size,
            items.len(),
            binomial(items.len(), size)
        );
        Self {
            items,
            indices: (0..size).collect(),
            started: false,
            exhausted: size == 0 || size > items.len(),
        }
    }

    fn current(&self) -> Vec<u32> {
        self.indices.iter().map(|&i| self.items[i]).collect()
    }

    /// Move to the next index vector, or mark the enumeration exhausted.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.exhausted = true;
            return;
        };

        self.indices[pivot] += 1;
        for i in (pivot + 1)..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            self.advance();
            if self.exhausted {
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.current())
    }
}
