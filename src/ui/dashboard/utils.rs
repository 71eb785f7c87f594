//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::ui::INLINE_SESSION_IDS;
use crate::events::EventType;
use crate::gateway::types::PageMetric;
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Get a ratatui color for an activity event based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Refresh => Color::Cyan,
        EventType::Diagnostic => Color::Yellow,
    }
}

/// Wall-clock time of the last successful refresh, e.g. `14:03:27`
pub fn format_last_updated(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Extract `HH:MM:SS` from a `YYYY-MM-DD HH:MM:SS` event timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    timestamp
        .split(' ')
        .nth(1)
        .map(|time| time.to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Refresh failed: request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Refresh failed: backend unreachable".to_string();
    }
    msg.to_string()
}

/// Largest view count, never below 1 so bar ratios stay finite.
pub fn max_views(pages: &[PageMetric]) -> u64 {
    pages.iter().map(|page| page.views).max().unwrap_or(0).max(1)
}

/// Fraction of the chart width a bar covers, clamped to `[0, 1]`.
pub fn bar_ratio(views: u64, max_views: u64) -> f64 {
    (views as f64 / max_views.max(1) as f64).clamp(0.0, 1.0)
}

/// First session ids of a user, with `+N more` for the rest.
pub fn session_ids_cell(sessions: &[String]) -> String {
    let shown = sessions
        .iter()
        .take(INLINE_SESSION_IDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if sessions.len() > INLINE_SESSION_IDS {
        format!("{} +{} more", shown, sessions.len() - INLINE_SESSION_IDS)
    } else {
        shown
    }
}
