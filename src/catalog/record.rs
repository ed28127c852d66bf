use serde::{Deserialize, Serialize};

use crate::catalog::tier::Tier;

/// One playable puzzle: four starting numbers and a target they can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub id: String,
    pub numbers: Vec<u32>,
    pub target: u32,
}

pub fn puzzle_id(sequence: usize) -> String {
    format!("puzzle-{}", sequence)
}

/// Generated puzzles partitioned by difficulty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub easy: Vec<PuzzleRecord>,
    pub medium: Vec<PuzzleRecord>,
    pub hard: Vec<PuzzleRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, tier: Tier) -> &[PuzzleRecord] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    pub fn push(&mut self, tier: Tier, record: PuzzleRecord) {
        match tier {
            Tier::Easy => self.easy.push(record),
            Tier::Medium => self.medium.push(record),
            Tier::Hard => self.hard.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which bucket holds the puzzle with this id, if any.
    pub fn tier_of(&self, id: &str) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|&tier| self.bucket(tier).iter().any(|record| record.id == id))
    }
}
