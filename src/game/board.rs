use std::fmt;

use super::side::Side;
use crate::config::{validate_dimensions, EngineConfig};
use crate::error::{ConfigError, GameError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Automated,
}

impl Cell {
    /// The side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Side::Human),
            Cell::Automated => Some(Side::Automated),
        }
    }
}

/// A `rows × cols` grid. Row 0 is the bottom row; tokens stack upward.
///
/// `Clone` is a deep copy, so the search can mutate its own copies freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must lie in
    /// `1..=MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        validate_dimensions(rows, cols)?;
        Ok(Self::empty(rows, cols))
    }

    /// The 6×7 board used by default.
    pub fn standard() -> Self {
        Self::empty(ROWS, COLS)
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.rows, config.cols)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// True iff `col` is on the board and its top cell is still empty.
    pub fn is_valid(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// Lowest empty row in `col`.
    pub fn next_open_row(&self, col: usize) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidMove { column: col });
        }
        (0..self.rows)
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(GameError::InvalidMove { column: col })
    }

    /// Write `side`'s token at `(row, col)`.
    ///
    /// The caller is responsible for passing the row returned by
    /// [`Board::next_open_row`]; no validation happens here.
    pub fn place(&mut self, row: usize, col: usize, side: Side) {
        self.cells[row * self.cols + col] = side.to_cell();
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, GameError> {
        let row = self.next_open_row(col)?;
        self.place(row, col, side);
        Ok(row)
    }

    /// All playable columns in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_valid(col))
    }

    /// Number of tokens on the board.
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Console rendering: top row first, 1-based column numbers underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            write!(f, "|")?;
            for col in 0..self.cols {
                match self.get(row, col).side() {
                    Some(side) => write!(f, " {} |", side.symbol())?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "|")?;
        for col in 0..self.cols {
            write!(f, " {} |", col + 1)?;
        }
        writeln!(f)
    }
}
