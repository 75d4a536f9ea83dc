//! Stateless UI rendering for the board and status regions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_moves::{BoardSurface, Region, Square};

use super::input::Cursor;

const CELL_WIDTH: usize = 5;

/// Renders the board, status regions and key help.
pub fn draw(frame: &mut Frame, surface: &BoardSurface, cursor: Cursor, status: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(4),    // Board
            Constraint::Length(7), // Regions
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Moves")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], surface, cursor);
    draw_regions(frame, chunks[2], surface, status);

    let help = Paragraph::new("arrows: move  enter/space: select  r: retry  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, surface: &BoardSurface, cursor: Cursor) {
    let mut lines: Vec<Line> = Vec::new();
    for (r, row) in surface.rows().iter().enumerate() {
        lines.push(Line::from(
            row.iter()
                .enumerate()
                .map(|(c, square)| cell_span(square, cursor.row == r && cursor.col == c))
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::from(
            row.iter()
                .map(|square| {
                    Span::styled(
                        id_label(square.id().as_str()),
                        Style::default().fg(Color::DarkGray),
                    )
                })
                .collect::<Vec<_>>(),
        ));
    }

    let title = surface
        .rows()
        .get(cursor.row)
        .and_then(|row| row.get(cursor.col))
        .map(|square| format!(" {} ", square.id()))
        .unwrap_or_default();

    let width = surface.rows().iter().map(Vec::len).max().unwrap_or(0) * CELL_WIDTH;
    let board_area = center_rect(area, width as u16 + 2, lines.len() as u16 + 2);
    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(board, board_area);
}

/// Square id centred in a cell, cut to fit.
fn id_label(id: &str) -> String {
    let clipped: String = id.chars().take(CELL_WIDTH - 1).collect();
    format!("{:^width$}", clipped, width = CELL_WIDTH)
}

fn cell_span(square: &Square, under_cursor: bool) -> Span<'static> {
    let glyph = square.glyph().as_str();
    let text = format!("{:^width$}", if glyph.is_empty() { "·" } else { glyph }, width = CELL_WIDTH);

    let mut style = if *square.interactive() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if *square.selected() {
        style = style.bg(Color::Blue);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(text, style)
}

fn draw_regions(frame: &mut Frame, area: Rect, surface: &BoardSurface, status: &str) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("To move: "),
            Span::styled(
                surface.text(Region::CurrentPlayer).to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(surface.text(Region::MoveInfo).to_string()),
    ];

    let error = surface.text(Region::Error);
    if !error.is_empty() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let winner = surface.text(Region::Winner);
    if !winner.is_empty() {
        lines.push(Line::from(Span::styled(
            winner.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        status.to_string(),
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_label_centred() {
        assert_eq!(id_label("a1"), " a1  ");
        assert_eq!(id_label("a1").chars().count(), CELL_WIDTH);
    }

    #[test]
    fn test_long_id_clipped() {
        assert_eq!(id_label("square-12"), "squa ");
    }
}
