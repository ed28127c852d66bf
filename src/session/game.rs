use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::catalog::{CatalogError, PuzzleProvider, Tier};
use crate::operation::Operation;
use crate::session::core::Session;
use crate::session::errors::MoveError;
use crate::session::view::SessionView;

pub const SOLVED_LOG_LEN: usize = 5;

/// A recently solved puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolvedEntry {
    pub id: String,
    pub numbers: Vec<u32>,
    pub seconds: u64,
}

/// Play-side bookkeeping around a [`Session`]: the chosen tier, the score and
/// the short log of recent wins.
pub struct Game {
    provider: Arc<PuzzleProvider>,
    rng: StdRng,
    tier: Tier,
    session: Session,
    wins: u32,
    skips: u32,
    solved_log: VecDeque<SolvedEntry>,
}

impl Game {
    /// Load the catalog if needed and deal the first puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or `tier` is empty.
    pub fn start(provider: Arc<PuzzleProvider>, tier: Tier) -> Result<Self, CatalogError> {
        Self::with_rng(provider, tier, StdRng::from_entropy())
    }

    /// [`start`](Self::start) with a fixed RNG, for reproducible deals.
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start).
    pub fn with_rng(
        provider: Arc<PuzzleProvider>,
        tier: Tier,
        mut rng: StdRng,
    ) -> Result<Self, CatalogError> {
        provider.load_catalog()?;
        let puzzle = provider.select_puzzle_with(tier, &mut rng)?;
        Ok(Self {
            provider,
            rng,
            tier,
            session: Session::new(puzzle),
            wins: 0,
            skips: 0,
            solved_log: VecDeque::with_capacity(SOLVED_LOG_LEN),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn skips(&self) -> u32 {
        self.skips
    }

    /// Most recent win first.
    pub fn solved_log(&self) -> impl Iterator<Item = &SolvedEntry> {
        self.solved_log.iter()
    }

    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// # Errors
    ///
    /// See [`Session::select_slot`].
    pub fn select_slot(&mut self, index: usize) -> Result<SessionView, MoveError> {
        let view = self.session.select_slot(index)?;
        if view.solved {
            self.record_win();
        }
        Ok(view)
    }

    /// # Errors
    ///
    /// See [`Session::select_operation`].
    pub fn select_operation(&mut self, operation: Operation) -> Result<SessionView, MoveError> {
        self.session.select_operation(operation)
    }

    pub fn reset(&mut self) -> SessionView {
        self.session.reset()
    }

    /// Abandon the current puzzle for a fresh one from the same tier. Leaving
    /// an unsolved puzzle counts as a skip.
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be drawn.
    pub fn skip(&mut self) -> Result<SessionView, CatalogError> {
        let solved = self.session.is_solved();
        let view = self.deal(self.tier)?;
        if !solved {
            self.skips += 1;
            debug!("Skipped, {} skips so far", self.skips);
        }
        Ok(view)
    }

    /// Switch difficulty. Picking the current tier keeps the puzzle in play.
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be drawn from `tier`.
    pub fn change_tier(&mut self, tier: Tier) -> Result<SessionView, CatalogError> {
        if tier == self.tier {
            return Ok(self.view());
        }
        let view = self.deal(tier)?;
        self.tier = tier;
        info!("Difficulty changed to {}", tier);
        Ok(view)
    }

    fn deal(&mut self, tier: Tier) -> Result<SessionView, CatalogError> {
        let puzzle = self.provider.select_puzzle_with(tier, &mut self.rng)?;
        self.session = Session::new(puzzle);
        Ok(self.session.view())
    }

    fn record_win(&mut self) {
        self.wins += 1;
        let puzzle = self.session.puzzle();
        self.solved_log.push_front(SolvedEntry {
            id: puzzle.id.clone(),
            numbers: puzzle.numbers.clone(),
            seconds: self.session.elapsed().as_secs(),
        });
        self.solved_log.truncate(SOLVED_LOG_LEN);
        info!("{} wins, {} skips", self.wins, self.skips);
    }
}
