//! Turn alternation between a human move source and the automated player.

use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{Board, GameState, Outcome, Placement, Side};

/// Receives every move applied to the live board and the final result.
/// Renderers and actuators hang off this; the controller ignores what they do.
pub trait MoveObserver {
    fn on_move(&mut self, _board: &Board, _placement: Placement) {}

    fn on_game_over(&mut self, _board: &Board, _outcome: Outcome) {}
}

/// Observer that does nothing.
pub struct NoObserver;

impl MoveObserver for NoObserver {}

/// Owns the live game and asks each side's agent for moves in turn.
pub struct TurnController<H, A> {
    state: GameState,
    human: H,
    automated: A,
}

impl<H: Agent, A: Agent> TurnController<H, A> {
    pub fn new(state: GameState, human: H, automated: A) -> Self {
        TurnController {
            state,
            human,
            automated,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn human_mut(&mut self) -> &mut H {
        &mut self.human
    }

    pub fn automated(&self) -> &A {
        &self.automated
    }

    /// Start over on a fresh board.
    pub fn reset(&mut self, state: GameState) {
        self.state = state;
    }

    /// Obtain and apply one move for the side to move.
    ///
    /// A column the human source proposes that is not playable is handed
    /// back through [`Agent::reject`] and the source is asked again. An
    /// unplayable column from the automated side is returned as an error.
    pub fn play_turn(&mut self, observer: &mut dyn MoveObserver) -> Result<Placement, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }

        let side = self.state.current_side();
        let agent: &mut dyn Agent = match side {
            Side::Human => &mut self.human,
            Side::Automated => &mut self.automated,
        };

        loop {
            let column = agent.select_action(&self.state)?;
            match self.state.apply_move_mut(column) {
                Ok(placement) => {
                    log::info!(
                        "{} ({}) played column {} row {}",
                        side.name(),
                        agent.name(),
                        placement.column,
                        placement.row
                    );
                    observer.on_move(self.state.board(), placement);
                    if let Some(outcome) = self.state.outcome() {
                        match outcome {
                            Outcome::Winner(winner) => log::info!("{} wins", winner.name()),
                            Outcome::Draw => log::info!("board full, draw"),
                        }
                        observer.on_game_over(self.state.board(), outcome);
                    }
                    return Ok(placement);
                }
                Err(err @ GameError::InvalidMove { .. }) if side == Side::Human => {
                    log::warn!("rejected column {column}: {err}");
                    agent.reject(column, &err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Play until the game is decided.
    pub fn play(&mut self, observer: &mut dyn MoveObserver) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            self.play_turn(observer)?;
        }
    }
}
