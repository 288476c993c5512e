//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use noughts::{Board, Mark, Square};

use super::app::App;

/// Renders the title, board and status message.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Noughts and Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = Paragraph::new(board_lines(app.board())).alignment(Alignment::Center);
    frame.render_widget(board, chunks[1]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Builds the board grid as styled text, one line per row with separator
/// lines between them. Empty cells show their index as an input hint.
fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let size = board.size();
    let mut lines = Vec::with_capacity(2 * size - 1);

    for row in 0..size {
        let mut spans = Vec::with_capacity(2 * size - 1);
        for col in 0..size {
            let cell = row * size + col;
            spans.push(cell_span(board, cell));
            if col + 1 < size {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));

        if row + 1 < size {
            let sep = vec!["───"; size].join("┼");
            lines.push(Line::from(Span::styled(
                sep,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

fn cell_span(board: &Board, cell: usize) -> Span<'static> {
    match board.get(cell) {
        Some(Square::Occupied(Mark::Nought)) => Span::styled(
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::Cross)) => Span::styled(
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled(
            format!(" {cell} "),
            Style::default().fg(Color::DarkGray),
        ),
    }
}
