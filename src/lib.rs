//! # Connect Four
//!
//! Connect Four against a minimax opponent with alpha-beta pruning. Playable
//! in a Ratatui terminal UI or in a line-oriented headless mode.
//!
//! ## Modules
//!
//! - [`game`] — Board model, win detection, live game state
//! - [`ai`] — Agent trait, window heuristic, minimax search
//! - [`controller`] — Turn alternation and move observers
//! - [`ui`] — Terminal UI and console front-end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
