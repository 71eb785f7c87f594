//! Loading screen shown until the first refresh cycle resolves.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render_loading(f: &mut Frame) {
    let lines: Vec<Line> = vec![
        Span::styled(
            "ANALYTICS DASHBOARD",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .into(),
        Line::from(Span::raw(" ")),
        Span::styled(
            "Loading analytics...",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    ];

    let block_height = lines.len() as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(block_height)) / 2),
            Constraint::Length(block_height),
            Constraint::Min((f.area().height.saturating_sub(block_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let indicator = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(indicator, centered_area);
}
