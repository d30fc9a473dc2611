//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_board::{Coord, Mark, Player, RESTART_LABEL, Snapshot, status_line};

const CELL_WIDTH: u16 = 3;

/// Renders the board, the status line, and any notice.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Coord, notice: Option<&str>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], snapshot, cursor);

    let mut status = vec![Line::from(status_line(
        *snapshot.phase(),
        *snapshot.active_player(),
    ))];
    if snapshot.is_ended() {
        status.push(Line::from(format!("{} (r)", RESTART_LABEL)));
    } else if let Some(notice) = notice {
        status.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(snapshot))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn help_text(snapshot: &Snapshot) -> &'static str {
    if snapshot.grid().size().cell_count() <= 9 {
        "arrows move | enter place | 1-9 cell | r restart | q quit"
    } else {
        "arrows move | enter place | r restart | q quit"
    }
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Coord) {
    let n = snapshot.grid().size().get();
    let width = CELL_WIDTH * n as u16 + (n as u16 - 1);
    let height = 2 * n as u16 - 1;

    let winning = snapshot.winning_line();
    let show_cursor = !snapshot.is_ended();

    let mut lines = Vec::with_capacity(height as usize);
    for (row, marks) in snapshot.grid().rows().enumerate() {
        if row > 0 {
            lines.push(separator(n));
        }
        let mut spans = Vec::with_capacity(2 * n);
        for (col, mark) in marks.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let coord = Coord::new(row, col);
            let mut style = mark_style(*mark);
            if winning.is_some_and(|line| line.contains(coord, snapshot.grid().size())) {
                style = style.fg(Color::Green).add_modifier(Modifier::REVERSED);
            }
            if show_cursor && coord == cursor {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(format!(" {:1} ", mark.label()), style));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, center_rect(area, width, height));
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Mark::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

fn separator(n: usize) -> Line<'static> {
    let text = vec!["───"; n].join("┼");
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
