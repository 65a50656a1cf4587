pub const BOARD_SIZE: usize = 4;
/// Pieces each player places before the moving phase.
pub const NUM_PIECES: usize = 4;
/// Streak length that ends the game.
pub const WINNING_NUM: usize = 4;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// Owner of the piece on this cell, if any
    pub fn player(self) -> Option<super::Player> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(super::Player::White),
            Cell::Black => Some(super::Player::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square grid stored row-major in a fixed-length array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Check whether (row, col) lies on the board
    pub fn is_valid_position(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Get the cell at a specific position, `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if !Self::is_valid_position(row, col) {
            return None;
        }
        self.cells.get(row * BOARD_SIZE + col).copied()
    }

    /// True if the position is on the board and holds no piece
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(Self::is_valid_position(row, col));
        if let Some(slot) = self.cells.get_mut(row * BOARD_SIZE + col) {
            *slot = cell;
        }
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check every row, column and both long diagonals for a streak of
    /// `WINNING_NUM` same-colored pieces.
    pub fn has_winning_line(&self) -> bool {
        self.check_columns() || self.check_rows() || self.check_diagonals()
    }

    fn check_rows(&self) -> bool {
        (0..BOARD_SIZE).any(|row| self.line_has_streak((0..BOARD_SIZE).map(|col| (row, col))))
    }

    fn check_columns(&self) -> bool {
        (0..BOARD_SIZE).any(|col| self.line_has_streak((0..BOARD_SIZE).map(|row| (row, col))))
    }

    /// Main diagonal (i, i) and anti-diagonal (N-1-i, i)
    fn check_diagonals(&self) -> bool {
        self.line_has_streak((0..BOARD_SIZE).map(|i| (i, i)))
            || self.line_has_streak((0..BOARD_SIZE).map(|i| (BOARD_SIZE - 1 - i, i)))
    }

    /// Walk a line tracking the running streak. A change of color (Empty
    /// included) restarts the streak at that cell; Empty never counts.
    fn line_has_streak(&self, line: impl Iterator<Item = (usize, usize)>) -> bool {
        let mut streak = 0;
        let mut color = Cell::Empty;

        for (row, col) in line {
            let cell = self.get(row, col).unwrap_or(Cell::Empty);
            if cell == color && !color.is_empty() {
                streak += 1;
                if streak >= WINNING_NUM {
                    return true;
                }
            } else {
                streak = 1;
                color = cell;
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
