//! Interactive play: one puzzle replayed move by move against player input

mod core;
mod errors;
mod game;
mod state;
mod view;

pub use core::Session;
pub use errors::{InvalidMove, MoveError};
pub use game::{Game, SOLVED_LOG_LEN, SolvedEntry};
pub use state::{SessionState, Slot};
pub use view::{SessionView, SlotView, format_elapsed};
