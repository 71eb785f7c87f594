//! Recent sessions table

use super::super::utils::session_ids_cell;
use crate::gateway::types::SessionSummary;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

/// Render one row per user: id, session count badge and the first session ids.
pub fn render_sessions_table(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    sessions: &[SessionSummary],
) {
    let block = Block::default()
        .title("ACTIVE SESSIONS")
        .title_bottom(Line::from(Span::styled(
            " Most recent users with active sessions ",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if sessions.is_empty() {
        let empty = Paragraph::new("No active sessions")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["User ID", "Active Sessions", "Session IDs"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = sessions
        .iter()
        .map(|summary| {
            Row::new(vec![
                Cell::from(summary.user_id.clone()).style(Style::default().fg(Color::White)),
                Cell::from(Span::styled(
                    format!(" {} ", summary.active_sessions),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(session_ids_cell(&summary.sessions))
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(16),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}
