//! Line-oriented driver: reads whitespace-separated coordinates, feeds them
//! to the engine and redraws the board after every accepted action.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::debug;

use crate::game::GameState;
use crate::ui::text::{render_board, DisplayConfig};

/// Whitespace-separated token stream over a buffered reader.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before the game was over",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Read `N` coordinates. `None` if any token is not a non-negative
    /// integer; all `N` tokens are consumed either way.
    fn coords<const N: usize>(&mut self) -> io::Result<Option<[usize; N]>> {
        let mut values = [0usize; N];
        let mut valid = true;
        for value in values.iter_mut() {
            let token = self.next_token()?;
            match token.parse() {
                Ok(v) => *value = v,
                Err(_) => {
                    debug!("not a coordinate: {token:?}");
                    valid = false;
                }
            }
        }
        Ok(valid.then_some(values))
    }
}

/// Play a game to completion. Placing turns read `row col`, moving turns
/// read `from_row from_col to_row to_col`; rejected input is reported and
/// re-read until the engine accepts it.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    display: &DisplayConfig,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    write!(output, "{}", render_board(game.board(), display))?;

    while !game.is_over() {
        if game.in_placing_phase() {
            loop {
                let Some(player) = game.current_player() else {
                    break;
                };
                if let Some([row, col]) = tokens.coords::<2>()? {
                    if game.place(row, col, player) {
                        break;
                    }
                }
                writeln!(output, "Invalid placement. Please try again.")?;
            }
        } else {
            loop {
                if let Some([fr, fc, tr, tc]) = tokens.coords::<4>()? {
                    if game.move_piece(fr, fc, tr, tc) {
                        break;
                    }
                }
                writeln!(output, "Invalid move. Please try again.")?;
            }
        }
        write!(output, "{}", render_board(game.board(), display))?;
    }

    writeln!(output, "Game over!")?;
    if let Some(player) = game.winner().player() {
        writeln!(output, "{} wins.", player.name())?;
    }
    output.flush()
}
