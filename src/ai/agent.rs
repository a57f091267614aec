use crate::error::GameError;
use crate::game::GameState;

/// Anything that can choose a column: the search engine for the automated
/// side, or a front-end collecting the human's choice.
pub trait Agent {
    /// Choose a column for the side to move.
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Told when the controller refused the proposed column; the next
    /// `select_action` call is the re-request.
    fn reject(&mut self, _column: usize, _reason: &GameError) {}
}

/// Replays a fixed list of columns, then reports that its input is exhausted.
pub struct ScriptedAgent {
    columns: std::vec::IntoIter<usize>,
    rejected: Vec<usize>,
}

impl ScriptedAgent {
    pub fn new(columns: Vec<usize>) -> Self {
        ScriptedAgent {
            columns: columns.into_iter(),
            rejected: Vec::new(),
        }
    }

    /// Columns the controller refused so far.
    pub fn rejected(&self) -> &[usize] {
        &self.rejected
    }
}

impl Agent for ScriptedAgent {
    fn select_action(&mut self, _state: &GameState) -> Result<usize, GameError> {
        self.columns.next().ok_or(GameError::InputClosed)
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn reject(&mut self, column: usize, _reason: &GameError) {
        self.rejected.push(column);
    }
}
