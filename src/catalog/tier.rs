use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::errors::CatalogError;

/// Difficulty bucket of a puzzle, derived from how many targets its numbers
/// support. More targets means an easier puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Tier::Easy),
            "medium" | "m" => Ok(Tier::Medium),
            "hard" | "h" => Ok(Tier::Hard),
            other => Err(CatalogError::UnknownTier(other.to_string())),
        }
    }
}

/// Target-count cut-offs between tiers.
///
/// More than `easy_above` targets is easy, `medium_from..=easy_above` is
/// medium, and anything from one target up to `medium_from - 1` is hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub easy_above: usize,
    pub medium_from: usize,
}

impl TierThresholds {
    /// `None` when the combination supports no targets at all.
    pub fn tier_for(&self, count: usize) -> Option<Tier> {
        if count == 0 {
            None
        } else if count > self.easy_above {
            Some(Tier::Easy)
        } else if count >= self.medium_from {
            Some(Tier::Medium)
        } else {
            Some(Tier::Hard)
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            easy_above: 50,
            medium_from: 25,
        }
    }
}
