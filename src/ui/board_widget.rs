use crate::game::{Board, Cell, BOARD_SIZE};
use crate::ui::text::DisplayConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::White => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        Cell::Black => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Render the board with row/column labels, highlighting the cursor and the
/// piece selected for a move.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    display: &DisplayConfig,
    cursor: (usize, usize),
    selected: Option<(usize, usize)>,
    area: Rect,
) {
    let mut lines = Vec::new();

    let mut header = vec![Span::raw("    ")];
    for col in 0..BOARD_SIZE {
        header.push(Span::raw(format!(" {col}  ")));
    }
    lines.push(Line::from(header));

    let border = format!("   +{}", "---+".repeat(BOARD_SIZE));
    lines.push(Line::from(border.clone()));

    for row in 0..BOARD_SIZE {
        let mut spans = vec![Span::raw(format!(" {row} |"))];
        for col in 0..BOARD_SIZE {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            let mut style = cell_style(cell);
            if selected == Some((row, col)) {
                style = style.bg(Color::Blue);
            }
            if cursor == (row, col) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", display.glyph(cell)), style));
            spans.push(Span::raw("|"));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(border.clone()));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
