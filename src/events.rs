//! Event System
//!
//! Refresh activity events shown in the dashboard footer and printed in
//! headless mode.

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The refresh controller reporting on its cycles.
    Refresher,
    /// Records emitted through the `log` facade.
    Diagnostics,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Refresher, msg, event_type, log_level)
    }

    pub fn diagnostic(msg: String, log_level: LogLevel) -> Self {
        Self::new(Source::Diagnostics, msg, EventType::Diagnostic, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show cycle outcomes
        if matches!(self.event_type, EventType::Success | EventType::Error) {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Non-blocking event publishing for the refresh controller.
///
/// Events are best effort: when the queue is full or the consumer is gone the
/// event is dropped rather than stalling a refresh cycle.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub fn send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }

    pub fn send_refresh_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::refresher_with_level(
            message, event_type, log_level,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_outcomes_are_always_displayed() {
        let event = Event::refresher_with_level(
            "Cycle failed".to_string(),
            EventType::Error,
            LogLevel::Trace,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::refresher_with_level(
            "Refreshing analytics data".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("Refreshing analytics data"));
    }

    #[tokio::test]
    async fn test_sender_drops_events_when_queue_is_full() {
        let (tx, mut rx) = mpsc::channel(1);
        let sender = EventSender::new(tx);
        sender.send_event(Event::diagnostic("first".to_string(), LogLevel::Info));
        sender.send_event(Event::diagnostic("second".to_string(), LogLevel::Info));

        assert_eq!(rx.recv().await.map(|e| e.msg), Some("first".to_string()));
        assert!(rx.try_recv().is_err());
    }
}
