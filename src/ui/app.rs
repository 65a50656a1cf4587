use crate::config::AppConfig;
use crate::game::{GameState, BOARD_SIZE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    cursor: (usize, usize),
    selected: Option<(usize, usize)>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game_state: GameState::with_rules(config.rules),
            config,
            cursor: (0, 0),
            selected: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Piece picked up for a move, if any
    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let (row, col) = self.cursor;
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.selected.take().is_none() {
                    self.should_quit = true;
                }
            }
            KeyCode::Up => self.cursor.0 = row.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (row + 1).min(BOARD_SIZE - 1),
            KeyCode::Left => self.cursor.1 = col.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (col + 1).min(BOARD_SIZE - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.act();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::with_rules(self.config.rules);
                self.selected = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place at the cursor, or pick up / drop a piece in the moving phase
    fn act(&mut self) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let (row, col) = self.cursor;
        let result = if self.game_state.in_placing_phase() {
            let Some(player) = self.game_state.current_player() else {
                return;
            };
            self.game_state.try_place(row, col, player)
        } else {
            match self.selected {
                None => {
                    if self.game_state.color_at(row, col).is_empty() {
                        self.message = Some(format!("No piece at ({row}, {col})"));
                    } else {
                        self.selected = Some(self.cursor);
                        self.message = Some(format!("Selected ({row}, {col})"));
                    }
                    return;
                }
                Some(from) if from == self.cursor => {
                    self.selected = None;
                    return;
                }
                Some((from_row, from_col)) => {
                    let result = self.game_state.try_move(from_row, from_col, row, col);
                    if result.is_ok() {
                        self.selected = None;
                    }
                    result
                }
            }
        };

        match result {
            Ok(()) => {
                if let Some(player) = self.game_state.winner().player() {
                    self.message = Some(format!("{} wins!", player.name()));
                }
            }
            Err(e) => {
                self.message = Some(format!("Invalid: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.config.display,
            self.cursor,
            self.selected,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
