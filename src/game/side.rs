use super::board::Cell;

/// One of the two players. The automated side maximizes, the human minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Automated => Cell::Automated,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Human => "Human",
            Side::Automated => "Computer",
        }
    }

    /// Single-character token used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Side::Human => 'X',
            Side::Automated => 'O',
        }
    }
}
