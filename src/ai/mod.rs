mod agent;
pub mod heuristic;
pub mod minimax;

pub use agent::{Agent, ScriptedAgent};
pub use heuristic::{score_position, score_window, Heuristic, WindowHeuristic};
pub use minimax::{
    minimax, search, search_with, MinimaxAgent, SearchResult, SearchStats, AUTOMATED_WIN_SCORE,
    HUMAN_WIN_SCORE,
};
