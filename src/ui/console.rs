//! Line-oriented play: columns are read from a reader, the board is printed
//! to a writer after every move.

use std::io::{BufRead, Write};

use crate::ai::Agent;
use crate::controller::MoveObserver;
use crate::error::GameError;
use crate::game::{Board, GameState, Outcome, Placement, Side};

/// Human move source reading 1-based column numbers, one per line.
pub struct LineInput<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        LineInput { input, prompt }
    }

    fn say(&mut self, text: std::fmt::Arguments<'_>) {
        let written = self
            .prompt
            .write_fmt(text)
            .and_then(|()| self.prompt.flush());
        if let Err(e) = written {
            log::warn!("failed to write prompt: {e}");
        }
    }
}

impl<R: BufRead, W: Write> Agent for LineInput<R, W> {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        let cols = state.board().cols();
        loop {
            self.say(format_args!("Column (1-{cols}): "));

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    log::info!("input closed");
                    return Err(GameError::InputClosed);
                }
                Err(e) => {
                    log::warn!("failed to read move: {e}");
                    return Err(GameError::InputClosed);
                }
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=cols).contains(&n) => return Ok(n - 1),
                _ => self.say(format_args!("Please enter a number between 1 and {cols}.\n")),
            }
        }
    }

    fn name(&self) -> &str {
        "Console"
    }

    fn reject(&mut self, column: usize, _reason: &GameError) {
        self.say(format_args!("Column {} is full, pick another.\n", column + 1));
    }
}

/// Prints the board after each move and a result line at the end.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        ConsoleRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, board: &Board) {
        if let Err(e) = write!(self.out, "\n{board}\n") {
            log::warn!("failed to render board: {e}");
        }
    }
}

impl<W: Write> MoveObserver for ConsoleRenderer<W> {
    fn on_move(&mut self, board: &Board, placement: Placement) {
        if placement.side == Side::Automated {
            if let Err(e) = writeln!(self.out, "Computer plays column {}", placement.column + 1) {
                log::warn!("failed to write engine move: {e}");
            }
        }
        self.write_board(board);
    }

    fn on_game_over(&mut self, _board: &Board, outcome: Outcome) {
        let line = match outcome {
            Outcome::Winner(Side::Human) => "You win!",
            Outcome::Winner(Side::Automated) => "The computer wins!",
            Outcome::Draw => "Draw! The board is full.",
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("failed to write result: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxAgent;
    use crate::controller::TurnController;
    use std::io::{self, Cursor, Read};

    /// Reader whose every read fails, like a detached terminal.
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    /// Writer that refuses all output.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    #[test]
    fn line_input_parses_one_based_columns() {
        let mut input = LineInput::new(Cursor::new("4\n"), Vec::new());
        assert_eq!(input.select_action(&GameState::initial()), Ok(3));
    }

    #[test]
    fn line_input_re_prompts_on_garbage() {
        let mut input = LineInput::new(Cursor::new("abc\n0\n8\n7\n"), Vec::new());
        assert_eq!(input.select_action(&GameState::initial()), Ok(6));
        let prompts = String::from_utf8(input.prompt.clone()).unwrap();
        assert_eq!(prompts.matches("Please enter a number").count(), 3);
    }

    #[test]
    fn line_input_reports_end_of_input() {
        let mut input = LineInput::new(Cursor::new(""), Vec::new());
        assert_eq!(
            input.select_action(&GameState::initial()),
            Err(GameError::InputClosed)
        );
    }

    #[test]
    fn line_input_read_error_closes_input() {
        let reader = io::BufReader::new(BrokenReader);
        let mut input = LineInput::new(reader, Vec::new());
        assert_eq!(
            input.select_action(&GameState::initial()),
            Err(GameError::InputClosed)
        );
    }

    #[test]
    fn line_input_still_reads_when_prompt_fails() {
        let mut input = LineInput::new(Cursor::new("x\n2\n"), BrokenWriter);
        assert_eq!(input.select_action(&GameState::initial()), Ok(1));
        input.reject(1, &GameError::InvalidMove { column: 1 });
    }

    #[test]
    fn renderer_survives_broken_output() {
        let mut renderer = ConsoleRenderer::new(BrokenWriter);
        let board = Board::standard();
        let placement = Placement {
            row: 0,
            column: 3,
            side: Side::Automated,
        };
        renderer.on_move(&board, placement);
        renderer.on_game_over(&board, Outcome::Draw);
    }

    #[test]
    fn headless_game_prints_board_and_result() {
        let input = LineInput::new(Cursor::new("7\n7\n7\n1\n1\n1\n6\n6\n6\n"), Vec::new());
        let engine = MinimaxAgent::new(3).unwrap();
        let mut controller = TurnController::new(GameState::initial(), input, engine);
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let outcome = controller.play(&mut renderer).unwrap();
        assert_eq!(outcome, Outcome::Winner(Side::Automated));

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("| 1 | 2 | 3 | 4 | 5 | 6 | 7 |"));
        assert!(text.contains("Computer plays column 4"));
        assert!(text.trim_end().ends_with("The computer wins!"));
    }
}
