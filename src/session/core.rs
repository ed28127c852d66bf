use std::time::{Duration, Instant};

use log::{debug, info};

use crate::catalog::PuzzleRecord;
use crate::numeric::approx_eq;
use crate::numeric::constants::WIN_TOLERANCE;
use crate::operation::Operation;
use crate::session::errors::{InvalidMove, MoveError};
use crate::session::state::{SessionState, Slot};
use crate::session::view::SessionView;

/// One puzzle in play.
///
/// Each move either applies completely or is refused with the session left
/// exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    puzzle: PuzzleRecord,
    slots: Vec<Slot>,
    state: SessionState,
    started: Instant,
    solved_after: Option<Duration>,
}

impl Session {
    pub fn new(puzzle: PuzzleRecord) -> Self {
        let slots = puzzle.numbers.iter().copied().map(Slot::fresh).collect();
        debug!(
            "Starting {} with {:?} -> {}",
            puzzle.id, puzzle.numbers, puzzle.target
        );
        Self {
            puzzle,
            slots,
            state: SessionState::Idle,
            started: Instant::now(),
            solved_after: None,
        }
    }

    pub fn puzzle(&self) -> &PuzzleRecord {
        &self.puzzle
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    /// Time since the puzzle started (or was reset), frozen once solved.
    pub fn elapsed(&self) -> Duration {
        self.solved_after.unwrap_or_else(|| self.started.elapsed())
    }

    /// Values still on the board, in slot order.
    pub fn remaining(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().filter(|s| !s.consumed).map(|s| s.value)
    }

    pub fn view(&self) -> SessionView {
        SessionView::of(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidMove` for a missing or used slot, for picking a second
    /// number before an operation, or once solved; `DivisionByZero` when the
    /// pending division has a zero divisor.
    pub fn select_slot(&mut self, index: usize) -> Result<SessionView, MoveError> {
        let next = self.plan_slot(index).inspect_err(|e| {
            debug!("Rejected selection of slot {}: {}", index, e);
        })?;
        self.state = next;
        Ok(self.view())
    }

    /// # Errors
    ///
    /// Returns `InvalidMove` if no number is selected or the puzzle is solved.
    pub fn select_operation(&mut self, operation: Operation) -> Result<SessionView, MoveError> {
        self.state = match self.state {
            SessionState::Solved => return Err(InvalidMove::AlreadySolved.into()),
            SessionState::Idle => {
                debug!("Rejected {}: no number selected", operation);
                return Err(InvalidMove::NoOperandSelected.into());
            }
            SessionState::OperandSelected { slot }
            | SessionState::OperationPending { slot, .. } => {
                SessionState::OperationPending { slot, operation }
            }
        };
        Ok(self.view())
    }

    /// Put every number back and restart the clock.
    pub fn reset(&mut self) -> SessionView {
        debug!("Resetting {}", self.puzzle.id);
        self.slots = self.puzzle.numbers.iter().copied().map(Slot::fresh).collect();
        self.state = SessionState::Idle;
        self.started = Instant::now();
        self.solved_after = None;
        self.view()
    }

    /// Work out the state after selecting `index`, mutating slots only when a
    /// pending operation is actually applied.
    fn plan_slot(&mut self, index: usize) -> Result<SessionState, MoveError> {
        if self.is_solved() {
            return Err(InvalidMove::AlreadySolved.into());
        }
        let chosen = self
            .slots
            .get(index)
            .copied()
            .ok_or(InvalidMove::NoSuchSlot(index))?;
        if chosen.consumed {
            return Err(InvalidMove::SlotConsumed(index).into());
        }

        match self.state {
            SessionState::Idle => Ok(SessionState::OperandSelected { slot: index }),
            SessionState::OperandSelected { slot } if slot == index => Ok(SessionState::Idle),
            SessionState::OperandSelected { .. } => Err(InvalidMove::OperationRequired.into()),
            SessionState::OperationPending { slot, .. } if slot == index => Ok(SessionState::Idle),
            SessionState::OperationPending { slot, operation } => {
                self.apply(slot, index, operation)
            }
            SessionState::Solved => Err(InvalidMove::AlreadySolved.into()),
        }
    }

    fn apply(
        &mut self,
        first: usize,
        second: usize,
        operation: Operation,
    ) -> Result<SessionState, MoveError> {
        let (Some(left), Some(right)) = (self.slots.get(first), self.slots.get(second)) else {
            return Err(InvalidMove::NoSuchSlot(first.max(second)).into());
        };
        let result = operation.apply(left.value, right.value)?;

        debug!("{} {} {} = {}", left.value, operation, right.value, result);
        if let Some(slot) = self.slots.get_mut(first) {
            slot.value = result;
        }
        if let Some(slot) = self.slots.get_mut(second) {
            slot.consumed = true;
        }

        if self.check_win() {
            let elapsed = self.started.elapsed();
            self.solved_after = Some(elapsed);
            info!(
                "Solved {} ({:?} -> {}) in {:.1}s",
                self.puzzle.id,
                self.puzzle.numbers,
                self.puzzle.target,
                elapsed.as_secs_f64()
            );
            return Ok(SessionState::Solved);
        }
        Ok(SessionState::Idle)
    }

    fn check_win(&self) -> bool {
        let mut remaining = self.remaining();
        match (remaining.next(), remaining.next()) {
            (Some(last), None) => approx_eq(last, f64::from(self.puzzle.target), WIN_TOLERANCE),
            _ => false,
        }
    }
}
