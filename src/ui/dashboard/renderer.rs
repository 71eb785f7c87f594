//! Dashboard main renderer

use super::components::{active_users, footer, header, pages_chart, sessions_table};
use super::state::DashboardState;
use crate::refresh::state::Phase;
use crate::ui::loading::render_loading;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    if state.refresh.phase() == Phase::Initializing {
        render_loading(f);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(content_chunks[0]);

    let data = &state.refresh.data;
    active_users::render_active_users(f, left_chunks[0], data.active_users);
    sessions_table::render_sessions_table(f, left_chunks[1], &data.sessions);
    pages_chart::render_pages_chart(f, content_chunks[1], &data.top_pages);
    footer::render_footer(f, main_chunks[2], state);
}
