//! Core Connect Four game logic: board representation, sides, win detection,
//! and the live game state.

mod board;
pub mod detect;
mod side;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use detect::{has_won, is_terminal, Outcome, Window};
pub use side::Side;
pub use state::{GameState, Placement};
