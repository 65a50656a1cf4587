//! # Four Square
//!
//! Rules engine for a two-player game on a 4x4 grid: each player places four
//! pieces, then pieces are moved one at a time. Four in a row along a row,
//! column or long diagonal wins, at any point in the game.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, rule variants, state machine
//! - [`console`] — Line-oriented driver reading coordinates from any reader
//! - [`ui`] — Text board rendering and the interactive terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
