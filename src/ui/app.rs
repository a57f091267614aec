use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::controller::{NoObserver, TurnController};
use crate::error::{ConfigError, GameError};
use crate::game::{GameState, Outcome, Side};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Human move source fed by the column selector: holds at most one pending
/// column and remembers why the last one was refused.
#[derive(Default)]
pub struct PendingMove {
    column: Option<usize>,
    rejection: Option<String>,
}

impl PendingMove {
    pub fn set(&mut self, column: usize) {
        self.column = Some(column);
        self.rejection = None;
    }

    pub fn take_rejection(&mut self) -> Option<String> {
        self.rejection.take()
    }
}

impl Agent for PendingMove {
    fn select_action(&mut self, _state: &GameState) -> Result<usize, GameError> {
        self.column.take().ok_or(GameError::InputClosed)
    }

    fn name(&self) -> &str {
        "Keyboard"
    }

    fn reject(&mut self, column: usize, _reason: &GameError) {
        self.rejection = Some(format!("Column {} is full!", column + 1));
    }
}

pub struct App {
    controller: TurnController<PendingMove, MinimaxAgent>,
    config: AppConfig,
    /// Empty board with the configured first mover, reused on restart.
    initial: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app and, if the engine moves first, play its opening move.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let first = if config.game.human_starts {
            Side::Human
        } else {
            Side::Automated
        };
        let initial = GameState::from_config(&config.engine, first)?;
        let controller = TurnController::new(
            initial.clone(),
            PendingMove::default(),
            MinimaxAgent::from_config(&config.engine)?,
        );
        let selected_column = config.engine.cols / 2; // Start in middle
        let mut app = App {
            controller,
            config,
            initial,
            selected_column,
            should_quit: false,
            message: None,
        };
        app.engine_reply();
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.config.engine.cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.controller.reset(self.initial.clone());
                self.selected_column = self.config.engine.cols / 2;
                self.message = Some("New game started!".to_string());
                self.engine_reply();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the engine answer.
    fn drop_piece(&mut self) {
        if self.controller.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        self.controller.human_mut().set(self.selected_column);
        match self.controller.play_turn(&mut NoObserver) {
            Ok(_) => self.engine_reply(),
            Err(GameError::InputClosed) => {
                self.message = self.controller.human_mut().take_rejection();
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Play the automated side's move if it is its turn.
    fn engine_reply(&mut self) {
        let state = self.controller.state();
        if !state.is_terminal() && state.current_side() == Side::Automated {
            if let Err(e) = self.controller.play_turn(&mut NoObserver) {
                self.message = Some(format!("Engine error: {e}"));
                return;
            }
        }
        self.announce_outcome();
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.controller.state().outcome() {
            self.message = Some(match outcome {
                Outcome::Winner(Side::Human) => "You win!".to_string(),
                Outcome::Winner(Side::Automated) => "The computer wins!".to_string(),
                Outcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    fn engine_status(&self) -> String {
        let engine = self.controller.automated();
        match engine.last_result() {
            Some(result) => format!(
                "Depth {}  |  last eval {}",
                engine.depth(),
                result.score
            ),
            None => format!("Depth {}", engine.depth()),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.controller.state(),
            self.selected_column,
            &self.message,
            &self.engine_status(),
        );
    }
}
