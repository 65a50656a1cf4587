use log::{debug, info};

use super::board::{Board, Cell, NUM_PIECES};
use super::rules::RulesConfig;
use super::Player;
use crate::error::InvalidAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Placing,
    Moving,
}

/// The rules engine. All board mutation goes through `try_place` and
/// `try_move`; every other method is a read-only query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    rules: RulesConfig,
    phase: Phase,
    current_player: Option<Player>,
    pieces_placed: usize,
    game_over: bool,
    winner: Cell,
    last_touched: Option<(usize, usize)>,
}

impl GameState {
    /// Create initial game state with the default rules
    pub fn initial() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    /// Create initial game state: empty board, placing phase, White to move
    pub fn with_rules(rules: RulesConfig) -> Self {
        GameState {
            board: Board::new(),
            rules,
            phase: Phase::Placing,
            current_player: Some(Player::White),
            pieces_placed: 0,
            game_over: false,
            winner: Cell::Empty,
            last_touched: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_placing_phase(&self) -> bool {
        self.phase == Phase::Placing
    }

    /// Player to act; `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    pub fn pieces_placed(&self) -> usize {
        self.pieces_placed
    }

    /// Occupant of (row, col). Positions off the board read as empty.
    pub fn color_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col).unwrap_or(Cell::Empty)
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Color of the winner, `Cell::Empty` while the game is running
    pub fn winner(&self) -> Cell {
        self.winner
    }

    /// Most recently written position, used to attribute a win
    pub fn last_touched(&self) -> Option<(usize, usize)> {
        self.last_touched
    }

    /// Place a piece for `player`. Returns `false` and leaves the state
    /// untouched if the placement is not legal.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        self.try_place(row, col, player).is_ok()
    }

    /// Move the piece at (from_row, from_col) to (to_row, to_col). Returns
    /// `false` and leaves the state untouched if the move is not legal.
    pub fn move_piece(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        self.try_move(from_row, from_col, to_row, to_col).is_ok()
    }

    pub fn try_place(&mut self, row: usize, col: usize, player: Player) -> Result<(), InvalidAction> {
        self.check_place(row, col, player).map_err(|e| {
            debug!("rejected placement at ({row}, {col}) by {player:?}: {e}");
            e
        })?;

        self.board.set(row, col, player.to_cell());
        self.last_touched = Some((row, col));
        self.check_game_over();

        // A winning placement ends the game on the placer's turn
        if !self.game_over {
            self.current_player = self.current_player.map(Player::other);
            self.pieces_placed += 1;

            if self.pieces_placed == 2 * NUM_PIECES {
                self.phase = Phase::Moving;
                info!("all {} pieces placed, entering moving phase", self.pieces_placed);
            }
        }

        Ok(())
    }

    pub fn try_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<(), InvalidAction> {
        let from = (from_row, from_col);
        let to = (to_row, to_col);
        self.check_move(from, to).map_err(|e| {
            debug!("rejected move {from:?} -> {to:?}: {e}");
            e
        })?;

        let piece = self.color_at(from_row, from_col);
        self.board.set(to_row, to_col, piece);
        self.board.set(from_row, from_col, Cell::Empty);
        self.last_touched = Some(to);
        self.check_game_over();

        // Moves never advance the turn; after a win the toggle is applied to
        // the already-cleared player and leaves it cleared.
        if self.game_over {
            self.current_player = self.current_player.map(Player::other);
        }

        Ok(())
    }

    fn check_place(&self, row: usize, col: usize, player: Player) -> Result<(), InvalidAction> {
        if self.game_over {
            return Err(InvalidAction::GameOver);
        }
        if self.phase != Phase::Placing {
            return Err(InvalidAction::WrongPhase {
                expected: Phase::Placing,
            });
        }
        if !Board::is_valid_position(row, col) {
            return Err(InvalidAction::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(InvalidAction::Occupied { row, col });
        }
        if self.current_player != Some(player) {
            return Err(InvalidAction::OutOfTurn {
                expected: self.current_player,
                got: player,
            });
        }
        Ok(())
    }

    fn check_move(&self, from: (usize, usize), to: (usize, usize)) -> Result<(), InvalidAction> {
        if self.game_over {
            return Err(InvalidAction::GameOver);
        }
        if self.phase != Phase::Moving {
            return Err(InvalidAction::WrongPhase {
                expected: Phase::Moving,
            });
        }
        for (row, col) in [from, to] {
            if !Board::is_valid_position(row, col) {
                return Err(InvalidAction::OutOfBounds { row, col });
            }
        }
        if self.board.is_empty(from.0, from.1) {
            return Err(InvalidAction::EmptySource {
                row: from.0,
                col: from.1,
            });
        }
        if !self.board.is_empty(to.0, to.1) {
            return Err(InvalidAction::Occupied { row: to.0, col: to.1 });
        }
        if !self.rules.movement.allows(from, to) {
            return Err(InvalidAction::NotAdjacent { from, to });
        }
        Ok(())
    }

    /// Scan the whole board after a mutation. The winner is the color at the
    /// last touched position, which is always part of the new line.
    fn check_game_over(&mut self) {
        if !self.board.has_winning_line() {
            return;
        }
        self.winner = self
            .last_touched
            .map(|(row, col)| self.color_at(row, col))
            .unwrap_or(Cell::Empty);
        self.game_over = true;
        self.current_player = None;
        info!("game over, winner {:?}", self.winner);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Movement, BOARD_SIZE};

    /// Eight placements, alternating from White, with no four-in-a-row.
    /// White ends on (0,0) (0,1) (2,2) (2,3), Black on (1,0) (1,1) (3,2) (3,3).
    const QUIET_SETUP: [(usize, usize); 8] = [
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ];

    fn play_placements(state: &mut GameState, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            let player = state.current_player().unwrap();
            assert!(state.place(row, col, player), "placement at ({row}, {col}) failed");
        }
    }

    fn moving_state(rules: RulesConfig) -> GameState {
        let mut state = GameState::with_rules(rules);
        play_placements(&mut state, &QUIET_SETUP);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Some(Player::White));
        assert!(state.in_placing_phase());
        assert!(!state.is_over());
        assert_eq!(state.winner(), Cell::Empty);
        assert_eq!(state.pieces_placed(), 0);
        assert_eq!(state.last_touched(), None);
        assert_eq!(state.board().occupied(), 0);
    }

    #[test]
    fn test_place_flips_current_player() {
        let mut state = GameState::initial();
        assert!(state.place(2, 1, Player::White));

        assert_eq!(state.color_at(2, 1), Cell::White);
        assert_eq!(state.current_player(), Some(Player::Black));
        assert_eq!(state.pieces_placed(), 1);
        assert_eq!(state.last_touched(), Some((2, 1)));
    }

    #[test]
    fn test_place_out_of_turn_fails_without_change() {
        let mut state = GameState::initial();
        let before = state;

        assert_eq!(
            state.try_place(0, 0, Player::Black),
            Err(InvalidAction::OutOfTurn {
                expected: Some(Player::White),
                got: Player::Black,
            })
        );
        assert!(!state.place(0, 0, Player::Black));
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut state = GameState::initial();
        assert!(state.place(1, 1, Player::White));
        let before = state;

        assert_eq!(
            state.try_place(1, 1, Player::Black),
            Err(InvalidAction::Occupied { row: 1, col: 1 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut state = GameState::initial();
        let before = state;

        assert_eq!(
            state.try_place(BOARD_SIZE, 0, Player::White),
            Err(InvalidAction::OutOfBounds {
                row: BOARD_SIZE,
                col: 0
            })
        );
        assert!(!state.place(0, 9, Player::White));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_during_placing_fails() {
        let mut state = GameState::initial();
        assert!(state.place(0, 0, Player::White));
        let before = state;

        assert_eq!(
            state.try_move(0, 0, 3, 3),
            Err(InvalidAction::WrongPhase {
                expected: Phase::Moving
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_placement_enters_moving_phase() {
        let mut state = GameState::initial();
        play_placements(&mut state, &QUIET_SETUP[..7]);
        assert!(state.in_placing_phase());

        play_placements(&mut state, &QUIET_SETUP[7..]);
        assert_eq!(state.phase(), Phase::Moving);
        assert!(!state.is_over());
        assert_eq!(state.pieces_placed(), 2 * NUM_PIECES);
        assert_eq!(state.board().occupied(), 2 * NUM_PIECES);
        assert_eq!(state.current_player(), Some(Player::White));
    }

    #[test]
    fn test_place_during_moving_fails() {
        let mut state = moving_state(RulesConfig::default());
        let before = state;

        assert_eq!(
            state.try_place(3, 0, Player::White),
            Err(InvalidAction::WrongPhase {
                expected: Phase::Placing
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_moving_phase_is_permanent() {
        let mut state = moving_state(RulesConfig::default());
        assert!(state.move_piece(0, 0, 3, 0));
        assert!(state.move_piece(3, 0, 0, 0));
        assert!(!state.in_placing_phase());
        assert_eq!(state.board().occupied(), 2 * NUM_PIECES);
    }

    #[test]
    fn test_row_win_during_placing() {
        let mut state = GameState::initial();
        play_placements(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
        assert!(!state.is_over());

        assert!(state.place(0, 3, Player::White));
        assert!(state.is_over());
        assert_eq!(state.winner(), Cell::White);
        assert_eq!(state.current_player(), None);
        // The winning placement is not counted and does not start the moving phase
        assert_eq!(state.pieces_placed(), 6);
        assert!(state.in_placing_phase());
    }

    #[test]
    fn test_anti_diagonal_win_during_placing() {
        let mut state = GameState::initial();
        play_placements(&mut state, &[(3, 0), (0, 0), (2, 1), (0, 1), (1, 2), (0, 2)]);
        assert!(!state.is_over());

        assert!(state.place(0, 3, Player::White));
        assert!(state.is_over());
        assert_eq!(state.winner(), Cell::White);
    }

    #[test]
    fn test_column_win_for_black() {
        let mut state = GameState::initial();
        play_placements(
            &mut state,
            &[(0, 0), (0, 3), (1, 0), (1, 3), (3, 1), (2, 3), (2, 0)],
        );
        assert!(!state.is_over());

        assert!(state.place(3, 3, Player::Black));
        assert!(state.is_over());
        assert_eq!(state.winner(), Cell::Black);
        assert_eq!(state.current_player(), None);
    }

    #[test]
    fn test_place_after_win_fails() {
        let mut state = GameState::initial();
        play_placements(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)]);
        let before = state;

        assert_eq!(state.try_place(3, 3, Player::Black), Err(InvalidAction::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_relocates_piece() {
        let mut state = moving_state(RulesConfig::default());
        assert!(state.move_piece(2, 2, 0, 3));

        assert_eq!(state.color_at(2, 2), Cell::Empty);
        assert_eq!(state.color_at(0, 3), Cell::White);
        assert_eq!(state.last_touched(), Some((0, 3)));
    }

    #[test]
    fn test_move_does_not_consult_or_advance_turn() {
        let mut state = moving_state(RulesConfig::default());
        assert_eq!(state.current_player(), Some(Player::White));

        // Black piece moved while White is "to move"
        assert!(state.move_piece(1, 0, 2, 0));
        assert_eq!(state.current_player(), Some(Player::White));
        assert!(state.move_piece(2, 2, 2, 1));
        assert_eq!(state.current_player(), Some(Player::White));
    }

    #[test]
    fn test_move_rejections_leave_state_unchanged() {
        let mut state = moving_state(RulesConfig::default());
        let before = state;

        assert_eq!(
            state.try_move(0, 2, 3, 0),
            Err(InvalidAction::EmptySource { row: 0, col: 2 })
        );
        assert_eq!(
            state.try_move(0, 0, 1, 0),
            Err(InvalidAction::Occupied { row: 1, col: 0 })
        );
        assert_eq!(
            state.try_move(0, 0, 0, BOARD_SIZE),
            Err(InvalidAction::OutOfBounds {
                row: 0,
                col: BOARD_SIZE
            })
        );
        assert_eq!(
            state.try_move(4, 0, 0, 2),
            Err(InvalidAction::OutOfBounds { row: 4, col: 0 })
        );
        assert_eq!(
            state.try_move(0, 0, 0, 0),
            Err(InvalidAction::Occupied { row: 0, col: 0 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_winning_move_leaves_no_current_player() {
        let mut state = moving_state(RulesConfig::default());
        assert!(state.move_piece(2, 2, 0, 2));
        assert!(!state.is_over());

        assert!(state.move_piece(2, 3, 0, 3));
        assert!(state.is_over());
        assert_eq!(state.winner(), Cell::White);
        // The post-win toggle applies to an absent player
        assert_eq!(state.current_player(), None);
    }

    #[test]
    fn test_move_after_win_fails() {
        let mut state = moving_state(RulesConfig::default());
        assert!(state.move_piece(2, 2, 0, 2));
        assert!(state.move_piece(2, 3, 0, 3));
        let before = state;

        assert_eq!(state.try_move(1, 0, 2, 0), Err(InvalidAction::GameOver));
        assert_eq!(state, before);
        assert_eq!(state.winner(), Cell::White);
    }

    #[test]
    fn test_adjacent_rule_rejects_long_moves() {
        let mut state = moving_state(RulesConfig {
            movement: Movement::Adjacent,
        });
        let before = state;

        assert_eq!(
            state.try_move(2, 2, 0, 2),
            Err(InvalidAction::NotAdjacent {
                from: (2, 2),
                to: (0, 2)
            })
        );
        assert_eq!(state, before);

        assert!(state.move_piece(2, 2, 1, 2));
        assert_eq!(state.color_at(1, 2), Cell::White);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut state = GameState::initial();
        play_placements(&mut state, &[(0, 0), (3, 3), (1, 1)]);

        let snapshot = (
            state.color_at(0, 0),
            state.color_at(3, 3),
            state.is_over(),
            state.winner(),
            state.current_player(),
            state.in_placing_phase(),
        );
        for _ in 0..3 {
            assert_eq!(
                snapshot,
                (
                    state.color_at(0, 0),
                    state.color_at(3, 3),
                    state.is_over(),
                    state.winner(),
                    state.current_player(),
                    state.in_placing_phase(),
                )
            );
        }
    }

    #[test]
    fn test_color_at_off_board_is_empty() {
        let state = GameState::initial();
        assert_eq!(state.color_at(BOARD_SIZE, BOARD_SIZE), Cell::Empty);
    }
}
