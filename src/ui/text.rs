//! Plain ASCII rendering of the board for the line-oriented console.

use std::fmt::Write;

use crate::game::{Board, Cell, BOARD_SIZE};

/// Glyphs used to draw pieces, loadable from the `[display]` config table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub white: char,
    pub black: char,
    pub empty: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            white: 'X',
            black: 'O',
            empty: '_',
        }
    }
}

impl DisplayConfig {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::White => self.white,
            Cell::Black => self.black,
        }
    }
}

/// Draw the board as boxed cells, one text row of pieces and one of
/// underlines per board row.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();

    // Top edge
    for _ in 0..BOARD_SIZE {
        out.push_str(" ___");
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push('|');
        for col in 0..BOARD_SIZE {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            // Writing to a String cannot fail
            let _ = write!(out, " {} |", display.glyph(cell));
        }
        out.push('\n');

        out.push('|');
        for _ in 0..BOARD_SIZE {
            out.push_str("___|");
        }
        out.push('\n');
    }

    out
}
