//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::POLL_INTERVAL_MS;
use crate::events::Event as RefreshActivity;
use crate::refresh::RefreshState;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            api_url,
            refresh_interval,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Latest state committed by the refresh controller.
    state_receiver: watch::Receiver<RefreshState>,

    /// Receives refresh activity and diagnostics.
    event_receiver: mpsc::Receiver<RefreshActivity>,

    /// What the dashboard is currently drawing.
    dashboard: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state_receiver: watch::Receiver<RefreshState>,
        event_receiver: mpsc::Receiver<RefreshActivity>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state_receiver,
            event_receiver,
            dashboard: DashboardState::new(ui_config),
        }
    }

    /// Pulls pending activity and the latest committed state into the dashboard.
    fn sync(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        let latest = self.state_receiver.borrow_and_update().clone();
        self.dashboard.update(latest);
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Runs the application UI in a loop, handling key events and redrawing the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.sync();
        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        // Poll for key events
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if is_quit_key(&key) {
                    return Ok(());
                }
            }
        }

        // Let the refresh tasks run between frames.
        tokio::task::yield_now().await;
    }
}
