use crate::error_classifier::LogLevel;
use crate::events::{Event, EventSender};
use log::{Log, Metadata, Record, SetLoggerError};
use std::env;
use tokio::sync::mpsc;

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Where `log` records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// stderr, through env_logger.
    Console,
    /// The dashboard's activity feed, so nothing is written over the TUI.
    Activity,
}

/// Forwards this crate's log records into the event channel.
pub struct EventLogger {
    sender: EventSender,
    threshold: LogLevel,
}

impl EventLogger {
    pub fn new(sender: EventSender, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }
}

impl Log for EventLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            && should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.sender.send_event(Event::diagnostic(
            record.args().to_string(),
            record.level().into(),
        ));
    }

    fn flush(&self) {}
}

/// Installs the stderr logger, honouring `RUST_LOG` (default `info`).
pub fn init_console_logger() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()
}

/// Installs the logger that feeds the dashboard's activity feed.
pub fn init_event_logger(sender: mpsc::Sender<Event>) -> Result<(), SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(EventLogger::new(
        EventSender::new(sender),
        threshold,
    )))?;
    log::set_max_level(threshold.into());
    Ok(())
}
