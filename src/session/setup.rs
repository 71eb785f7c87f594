//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::{Event, EventSender};
use crate::gateway::{AnalyticsApi, AnalyticsClient};
use crate::logging::{LogSink, init_console_logger, init_event_logger};
use crate::refresh::{RefreshController, RefreshHandle};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Running refresh controller
    pub handle: RefreshHandle,
    /// Refresh activity and, with [`LogSink::Activity`], log records
    pub event_receiver: mpsc::Receiver<Event>,
    /// Base URL of the analytics API
    pub api_url: String,
    /// Delay between refresh cycles
    pub refresh_interval: Duration,
}

/// Sets up a refresh session
///
/// This function handles the setup shared by the TUI and headless modes:
/// 1. Creates the event channel and installs the logger
/// 2. Builds the analytics API client
/// 3. Starts the refresh controller, which runs its first cycle immediately
///
/// Must be called from within a Tokio runtime.
pub fn setup_session(config: &Config, log_sink: LogSink) -> Result<SessionData, Box<dyn Error>> {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    match log_sink {
        LogSink::Console => init_console_logger()?,
        LogSink::Activity => init_event_logger(event_sender.clone())?,
    }

    let client = AnalyticsClient::new(&config.api_url)?;
    let api_url = client.base_url().to_string();
    let api: Arc<dyn AnalyticsApi> = Arc::new(client);

    let refresh_config = config.refresh_config();
    log::info!(
        "Refreshing from {} every {} ms",
        api_url,
        refresh_config.interval.as_millis()
    );
    let handle =
        RefreshController::new(api, refresh_config, EventSender::new(event_sender)).start();

    Ok(SessionData {
        handle,
        event_receiver,
        api_url,
        refresh_interval: refresh_config.interval,
    })
}
