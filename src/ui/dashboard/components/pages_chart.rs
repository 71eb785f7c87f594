//! Top pages bar chart
//!
//! One horizontal bar per page, scaled against the most viewed page.

use super::super::utils::{bar_ratio, max_views};
use crate::gateway::types::PageMetric;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub fn render_pages_chart(f: &mut Frame, area: ratatui::layout::Rect, pages: &[PageMetric]) {
    let block = Block::default()
        .title("TOP PAGES")
        .title_bottom(Line::from(Span::styled(
            " Last 15 minutes - Most visited pages ",
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    if pages.is_empty() {
        let empty = Paragraph::new("No data available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let max = max_views(pages);
    // Two lines per page: the bar and a blank spacer
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            pages
                .iter()
                .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)]),
        )
        .split(inner);

    for (page, row) in pages.iter().zip(rows.iter().step_by(2)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(*row);

        let label = Paragraph::new(page.url.as_str()).style(Style::default().fg(Color::White));
        f.render_widget(label, columns[0]);

        let bar = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(Color::LightBlue)
                    .bg(Color::Rgb(30, 36, 44))
                    .add_modifier(Modifier::BOLD),
            )
            .ratio(bar_ratio(page.views, max))
            .label(page.views.to_string());
        f.render_widget(bar, columns[1]);
    }
}
