use crate::game::detect::windows;
use crate::game::{Board, Cell, Side, Window};

/// Trait for evaluating a board position from a side's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, side: Side) -> f64;
}

/// Default heuristic: every 4-cell window is scored, plus a bonus for tokens
/// in the center column.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

const FOUR: f64 = 100.0;
const OPEN_THREE: f64 = 5.0;
const OPEN_TWO: f64 = 2.0;
const OPPONENT_OPEN_THREE: f64 = -4.0;
const CENTER_WEIGHT: f64 = 3.0;

/// Score one window for `side`.
pub fn score_window(window: &Window, side: Side) -> f64 {
    let own_cell = side.to_cell();
    let opp_cell = side.other().to_cell();
    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0.0;
    if own == 4 {
        score += FOUR;
    } else if own == 3 && empty == 1 {
        score += OPEN_THREE;
    } else if own == 2 && empty == 2 {
        score += OPEN_TWO;
    }

    // independent of the rules above
    if opp == 3 && empty == 1 {
        score += OPPONENT_OPEN_THREE;
    }

    score
}

/// Static evaluation of a non-terminal board for `side`.
pub fn score_position(board: &Board, side: Side) -> f64 {
    let own_cell = side.to_cell();

    // Center column bonus
    let center = board.cols() / 2;
    let center_count = (0..board.rows())
        .filter(|&row| board.get(row, center) == own_cell)
        .count();
    let mut score = center_count as f64 * CENTER_WEIGHT;

    for window in windows(board) {
        score += score_window(&window, side);
    }

    score
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> f64 {
        score_position(board, side)
    }
}
