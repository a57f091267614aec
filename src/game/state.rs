use super::board::Board;
use super::detect::{self, Outcome};
use super::side::Side;
use crate::config::EngineConfig;
use crate::error::{ConfigError, GameError};

/// A move that has just been applied to the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub side: Side,
}

/// The live game: board, side to move, and the result once it is decided.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_side: Side,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create initial game state
    pub fn new(board: Board, first: Side) -> Self {
        let outcome = detect::outcome(&board);
        GameState {
            board,
            current_side: first,
            outcome,
        }
    }

    /// Standard 6×7 game with the human moving first.
    pub fn initial() -> Self {
        Self::new(Board::standard(), Side::Human)
    }

    pub fn from_config(config: &EngineConfig, first: Side) -> Result<Self, ConfigError> {
        Ok(Self::new(Board::from_config(config)?, first))
    }

    /// Get side to move
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, GameError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Validate and apply a move for the side to move, then hand the turn over.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_valid(column) {
            return Err(GameError::InvalidMove { column });
        }

        let side = self.current_side;
        let row = self.board.drop_piece(column, side)?;

        // Only the mover can have completed a line
        if detect::has_won(&self.board, side) {
            self.outcome = Some(Outcome::Winner(side));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }

        self.current_side = side.other();

        Ok(Placement { row, column, side })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_side(), Side::Human);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_side(), Side::Automated);
        assert_eq!(new_state.board().get(0, 3), Cell::Human);
        // the original is untouched
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_apply_move_mut_reports_placement() {
        let mut state = GameState::initial();
        state.apply_move_mut(2).unwrap();
        let placement = state.apply_move_mut(2).unwrap();
        assert_eq!(
            placement,
            Placement {
                row: 1,
                column: 2,
                side: Side::Automated
            }
        );
    }

    #[test]
    fn test_rejects_full_and_out_of_range_columns() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        let before = state.clone();
        assert_eq!(
            state.apply_move_mut(0),
            Err(GameError::InvalidMove { column: 0 })
        );
        assert_eq!(
            state.apply_move_mut(9),
            Err(GameError::InvalidMove { column: 9 })
        );
        // A rejected move does not pass the turn
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Human wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Human
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Computer (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(Outcome::Winner(Side::Human)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::new(Board::new(1, 3).unwrap(), Side::Automated);
        for col in 0..3 {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_from_config_checks_dimensions() {
        let config = EngineConfig::new(4, 5, 2).unwrap();
        let state = GameState::from_config(&config, Side::Automated).unwrap();
        assert_eq!(state.board().cols(), 5);
        assert_eq!(state.current_side(), Side::Automated);

        let oversized = EngineConfig {
            rows: usize::MAX,
            cols: usize::MAX,
            search_depth: 3,
        };
        assert!(matches!(
            GameState::from_config(&oversized, Side::Human),
            Err(ConfigError::Validation(_))
        ));
    }
}
