//! Core game logic: board representation, player types, rule variants and
//! the place-then-move state machine.

mod board;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, BOARD_SIZE, NUM_PIECES, WINNING_NUM};
pub use player::Player;
pub use rules::{Movement, RulesConfig};
pub use state::{GameState, Phase};
