use crate::config::{validate_depth, EngineConfig};
use crate::error::{ConfigError, GameError};
use crate::game::{has_won, Board, GameState, Side};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a board the automated side has won.
pub const AUTOMATED_WIN_SCORE: f64 = 1e14;
/// Score of a board the human side has won. Deliberately not the negation of
/// [`AUTOMATED_WIN_SCORE`].
pub const HUMAN_WIN_SCORE: f64 = -1e13;

/// Column chosen by the search and its minimax value. `column` is `None` only
/// when the searched board was already a leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: f64,
}

/// Per-call counters; nothing is carried from one search to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Alpha-beta minimax with the default window heuristic. The automated side
/// maximizes, the human side minimizes.
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: f64,
    beta: f64,
    maximizing: bool,
) -> Result<SearchResult, GameError> {
    let mut stats = SearchStats::default();
    alpha_beta(
        board,
        depth,
        alpha,
        beta,
        maximizing,
        &WindowHeuristic,
        &mut stats,
    )
}

/// Pick the automated side's move on `board`.
pub fn search(board: &Board, depth: usize) -> Result<SearchResult, GameError> {
    search_with(board, depth, &WindowHeuristic).map(|(result, _)| result)
}

/// Root search with a custom evaluator, also reporting node statistics.
pub fn search_with<H: Heuristic + ?Sized>(
    board: &Board,
    depth: usize,
    heuristic: &H,
) -> Result<(SearchResult, SearchStats), GameError> {
    let mut stats = SearchStats::default();
    let result = alpha_beta(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        heuristic,
        &mut stats,
    )?;
    log::debug!(
        "search depth {depth}: column {:?} score {} ({} nodes, {} cutoffs)",
        result.column,
        result.score,
        stats.nodes,
        stats.cutoffs
    );
    Ok((result, stats))
}

fn alpha_beta<H: Heuristic + ?Sized>(
    board: &Board,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    heuristic: &H,
    stats: &mut SearchStats,
) -> Result<SearchResult, GameError> {
    stats.nodes += 1;

    let automated_won = has_won(board, Side::Automated);
    let human_won = has_won(board, Side::Human);
    let valid = board.valid_columns();

    if depth == 0 || automated_won || human_won || valid.is_empty() {
        let score = if automated_won {
            AUTOMATED_WIN_SCORE
        } else if human_won {
            HUMAN_WIN_SCORE
        } else if valid.is_empty() {
            0.0
        } else {
            heuristic.evaluate(board, Side::Automated)
        };
        return Ok(SearchResult {
            column: None,
            score,
        });
    }

    let mover = if maximizing {
        Side::Automated
    } else {
        Side::Human
    };
    let mut best = SearchResult {
        column: None,
        score: if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        },
    };

    // Ascending column order plus strict comparison: ties keep the lower
    // column, so no random fallback is needed.
    for col in valid {
        let mut child = board.clone();
        let row = child.next_open_row(col)?;
        child.place(row, col, mover);

        let score =
            alpha_beta(&child, depth - 1, alpha, beta, !maximizing, heuristic, stats)?.score;

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    column: Some(col),
                    score,
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = SearchResult {
                    column: Some(col),
                    score,
                };
            }
            beta = beta.min(best.score);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    if best.column.is_none() {
        return Err(GameError::NoMovesAvailable);
    }
    Ok(best)
}

/// The automated player: a fixed-depth minimax search.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    last_result: Option<SearchResult>,
}

impl MinimaxAgent {
    /// Agent using the window heuristic. `depth` must be at least 1.
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(
        depth: usize,
        heuristic: Box<dyn Heuristic>,
    ) -> Result<Self, ConfigError> {
        validate_depth(depth)?;
        Ok(MinimaxAgent {
            depth,
            heuristic,
            last_result: None,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.search_depth)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Result of the most recent search, if any.
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, GameError> {
        let (result, _) = search_with(state.board(), self.depth, self.heuristic.as_ref())?;
        self.last_result = Some(result);
        result.column.ok_or(GameError::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
