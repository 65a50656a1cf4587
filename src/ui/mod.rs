//! Front ends: plain text board rendering for the line console, and an
//! interactive terminal UI.

mod app;
pub mod board_widget;
mod game_view;
pub mod text;

pub use app::App;
