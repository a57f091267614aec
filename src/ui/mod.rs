//! Front-ends: a ratatui game view and a line-oriented console mode.

mod app;
pub mod console;
mod game_view;

pub use app::{App, PendingMove};
pub use console::{ConsoleRenderer, LineInput};
