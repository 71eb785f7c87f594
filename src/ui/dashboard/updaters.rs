//! Dashboard state update logic

use super::state::DashboardState;

use crate::events::Event;
use crate::refresh::RefreshState;

impl DashboardState {
    /// Replace the displayed refresh state with the latest committed one.
    pub fn update(&mut self, refresh: RefreshState) {
        self.refresh = refresh;
    }

    /// Record refresh activity for the footer, ignoring what the log level hides.
    pub fn add_event(&mut self, event: Event) {
        if event.should_display() {
            self.latest_activity = Some(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::EventType;
    use crate::ui::app::UIConfig;
    use std::time::Duration;

    fn dashboard() -> DashboardState {
        DashboardState::new(UIConfig::new(
            false,
            "http://localhost:8080/api/analytics".to_string(),
            Duration::from_secs(5),
        ))
    }

    #[test]
    fn test_cycle_outcomes_become_latest_activity() {
        let mut state = dashboard();
        state.add_event(Event::refresher_with_level(
            "Refreshed: 3 active users, 2 pages, 1 sessions".to_string(),
            EventType::Success,
            LogLevel::Info,
        ));
        assert_eq!(
            state.latest_activity.map(|e| e.msg),
            Some("Refreshed: 3 active users, 2 pages, 1 sessions".to_string())
        );
    }

    #[test]
    fn test_update_replaces_refresh_state() {
        let mut state = dashboard();
        let mut refresh = RefreshState::new();
        refresh.loading = false;
        refresh.data.active_users = 9;

        state.update(refresh.clone());
        assert_eq!(state.refresh, refresh);
    }
}
