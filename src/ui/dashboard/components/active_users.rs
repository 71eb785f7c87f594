//! Active users counter

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_active_users(f: &mut Frame, area: ratatui::layout::Rect, active_users: u64) {
    let lines = vec![
        Line::from(Span::styled(
            "Last 5 minutes",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            active_users.to_string(),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title("ACTIVE USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let counter = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(counter, area);
}
