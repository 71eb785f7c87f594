//! Dashboard state management
//!
//! Wraps the latest refresh state together with what the dashboard needs to
//! draw around it.

use crate::events::Event;
use crate::refresh::RefreshState;
use crate::ui::app::UIConfig;

#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Latest state committed by the refresh controller.
    pub refresh: RefreshState,
    /// Base URL of the analytics API, shown in the footer.
    pub api_url: String,
    /// Seconds between refresh cycles, shown in the footer.
    pub refresh_interval_secs: f64,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Most recent displayable refresh activity.
    pub latest_activity: Option<Event>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            refresh: RefreshState::new(),
            api_url: ui_config.api_url,
            refresh_interval_secs: ui_config.refresh_interval.as_secs_f64(),
            with_background_color: ui_config.with_background_color,
            latest_activity: None,
        }
    }
}
