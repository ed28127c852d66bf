use thiserror::Error;

use crate::operation::OperationError;

/// Why a move was refused. A refused move never changes the session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("slot {0} does not exist")]
    NoSuchSlot(usize),
    #[error("slot {0} has already been used")]
    SlotConsumed(usize),
    #[error("select a number before choosing an operation")]
    NoOperandSelected,
    #[error("choose an operation before selecting a second number")]
    OperationRequired,
    #[error("the puzzle is already solved")]
    AlreadySolved,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
    #[error("Division by zero")]
    DivisionByZero,
}

impl From<OperationError> for MoveError {
    fn from(error: OperationError) -> Self {
        match error {
            OperationError::DivisionByZero => MoveError::DivisionByZero,
        }
    }
}
