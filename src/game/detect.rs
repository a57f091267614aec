//! Four-in-a-row detection and game-over classification.

use super::board::{Board, Cell};
use super::side::Side;

/// Four consecutive cells along one alignment direction.
pub type Window = [Cell; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Every 4-cell window on the board that stays inside the grid: horizontal,
/// vertical, ascending diagonal (`/`), then descending diagonal (`\`).
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    let rows = board.rows();
    let cols = board.cols();
    let row_starts = rows.saturating_sub(3);
    let col_starts = cols.saturating_sub(3);

    let horizontal = (0..rows).flat_map(move |r| {
        (0..col_starts).map(move |c| [(r, c), (r, c + 1), (r, c + 2), (r, c + 3)])
    });
    let vertical = (0..cols).flat_map(move |c| {
        (0..row_starts).map(move |r| [(r, c), (r + 1, c), (r + 2, c), (r + 3, c)])
    });
    let ascending = (0..row_starts).flat_map(move |r| {
        (0..col_starts).map(move |c| [(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)])
    });
    let descending = (0..row_starts).flat_map(move |r| {
        (0..col_starts).map(move |c| [(r + 3, c), (r + 2, c + 1), (r + 1, c + 2), (r, c + 3)])
    });

    horizontal
        .chain(vertical)
        .chain(ascending)
        .chain(descending)
        .map(move |coords| coords.map(|(r, c)| board.get(r, c)))
}

/// True if `side` has four in a row anywhere on the board.
pub fn has_won(board: &Board, side: Side) -> bool {
    let cell = side.to_cell();
    windows(board).any(|window| window.iter().all(|&c| c == cell))
}

/// A win for either side, or a full board.
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Side::Human)
        || has_won(board, Side::Automated)
        || board.valid_columns().is_empty()
}

/// Classify a finished board. The automated side is checked first, the same
/// order the search uses when scoring terminal positions.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if has_won(board, Side::Automated) {
        Some(Outcome::Winner(Side::Automated))
    } else if has_won(board, Side::Human) {
        Some(Outcome::Winner(Side::Human))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::board::{COLS, ROWS};

    /// A full 6×7 board with no four-in-a-row for either side.
    pub(crate) fn drawn_board() -> Board {
        let mut board = Board::standard();
        for row in 0..ROWS {
            for col in 0..COLS {
                let side = if (col % 2) ^ ((row / 2) % 2) == 1 {
                    Side::Human
                } else {
                    Side::Automated
                };
                board.place(row, col, side);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::standard();
        assert!(!has_won(&board, Side::Human));
        assert!(!has_won(&board, Side::Automated));
        assert!(!is_terminal(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_window_count_standard_board() {
        // 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(windows(&Board::standard()).count(), 69);
    }

    #[test]
    fn test_small_board_has_no_windows() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(windows(&board).count(), 0);
        assert!(!has_won(&board, Side::Human));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 2..6 {
            board.drop_piece(col, Side::Human).unwrap();
        }
        assert!(has_won(&board, Side::Human));
        assert!(!has_won(&board, Side::Automated));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Side::Human)));
    }

    #[test]
    fn test_horizontal_win_on_top_row_right_edge() {
        let mut board = drawn_board();
        assert!(!has_won(&board, Side::Automated));
        board.place(ROWS - 1, 3, Side::Automated);
        board.place(ROWS - 1, 5, Side::Automated);
        assert!((3..COLS).all(|col| board.get(ROWS - 1, col) == Cell::Automated));
        assert!(has_won(&board, Side::Automated));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        board.drop_piece(6, Side::Human).unwrap();
        for _ in 0..4 {
            board.drop_piece(6, Side::Automated).unwrap();
        }
        assert!(has_won(&board, Side::Automated));
        assert!(!has_won(&board, Side::Human));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::standard();
        // Create diagonal / pattern
        board.drop_piece(0, Side::Human).unwrap();

        board.drop_piece(1, Side::Automated).unwrap();
        board.drop_piece(1, Side::Human).unwrap();

        board.drop_piece(2, Side::Automated).unwrap();
        board.drop_piece(2, Side::Automated).unwrap();
        board.drop_piece(2, Side::Human).unwrap();

        board.drop_piece(3, Side::Automated).unwrap();
        board.drop_piece(3, Side::Automated).unwrap();
        board.drop_piece(3, Side::Automated).unwrap();
        assert!(!has_won(&board, Side::Human));
        board.drop_piece(3, Side::Human).unwrap();

        assert!(has_won(&board, Side::Human));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::standard();
        // Create diagonal \ pattern
        board.drop_piece(6, Side::Automated).unwrap();

        board.drop_piece(5, Side::Human).unwrap();
        board.drop_piece(5, Side::Automated).unwrap();

        board.drop_piece(4, Side::Human).unwrap();
        board.drop_piece(4, Side::Human).unwrap();
        board.drop_piece(4, Side::Automated).unwrap();

        board.drop_piece(3, Side::Human).unwrap();
        board.drop_piece(3, Side::Human).unwrap();
        board.drop_piece(3, Side::Human).unwrap();
        assert!(!has_won(&board, Side::Automated));
        board.drop_piece(3, Side::Automated).unwrap();

        assert!(has_won(&board, Side::Automated));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Side::Automated)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Side::Human).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(6, Side::Human).unwrap();
        }
        assert!(!has_won(&board, Side::Human));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = Board::standard();
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, Side::Automated).unwrap();
        }
        board.drop_piece(2, Side::Human).unwrap();
        assert!(!has_won(&board, Side::Automated));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!has_won(&board, Side::Human));
        assert!(!has_won(&board, Side::Automated));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }
}
