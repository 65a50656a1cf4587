use crate::game::{GameState, Phase, Player};
use crate::ui::text::DisplayConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    display: &DisplayConfig,
    cursor: (usize, usize),
    selected: Option<(usize, usize)>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(4),  // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    super::board_widget::render_board(
        frame,
        game_state.board(),
        display,
        cursor,
        selected,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state.phase(), chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::White => Color::White,
        Player::Black => Color::Red,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let phase = match game_state.phase() {
        Phase::Placing => "Placing",
        Phase::Moving => "Moving",
    };

    let (status, color) = if game_state.is_over() {
        match game_state.winner().player() {
            Some(player) => (
                format!("Game Over  |  {} wins", player.name()),
                player_color(player),
            ),
            None => ("Game Over".to_string(), Color::Gray),
        }
    } else {
        match game_state.current_player() {
            Some(player) => (
                format!("{} phase  |  Current Player: {}", phase, player.name()),
                player_color(player),
            ),
            None => (format!("{phase} phase"), Color::Gray),
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Four Square"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, phase: Phase, area: Rect) {
    let action = match phase {
        Phase::Placing => "Enter: Place",
        Phase::Moving => "Enter: Select / Move  |  Esc: Cancel",
    };
    let line1 = Line::from(format!("Arrows: Cursor  |  {action}"));
    let line2 = Line::from("R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
