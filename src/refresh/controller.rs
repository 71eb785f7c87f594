//! Repeating refresh loop
//!
//! The controller owns the refresh timer. Each tick runs one cycle in its own
//! task and commits the outcome to a watch channel the UI reads from. Tearing
//! the controller down stops the timer; cycles still in flight are left to
//! finish, but their results are discarded.

use super::cycle::{CycleLimits, run_cycle};
use super::state::{RefreshEvent, RefreshState, transition};
use crate::consts::cli_consts::refresh;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{EventSender, EventType};
use crate::gateway::AnalyticsApi;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    /// Delay between the start of two cycles.
    pub interval: Duration,
    pub limits: CycleLimits,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: refresh::interval(),
            limits: CycleLimits::default(),
        }
    }
}

/// Single writer of the refresh state.
#[derive(Debug)]
struct StatePublisher {
    sender: watch::Sender<RefreshState>,
    token: CancellationToken,
}

impl StatePublisher {
    /// Applies `event` unless the controller has been torn down.
    ///
    /// The liveness check runs under the channel's write lock, so once
    /// [`StatePublisher::close`] has returned no commit can land.
    fn commit(&self, event: RefreshEvent) -> bool {
        self.sender.send_if_modified(|state| {
            if self.token.is_cancelled() {
                return false;
            }
            let current = std::mem::take(state);
            *state = transition(current, event);
            true
        })
    }

    fn close(&self) {
        if self.token.is_cancelled() {
            return;
        }
        self.token.cancel();
        // Wait out a commit that may be holding the write lock right now.
        self.sender.send_if_modified(|_| false);
    }
}

/// Periodically refreshes the dashboard data through an [`AnalyticsApi`].
pub struct RefreshController {
    api: Arc<dyn AnalyticsApi>,
    config: RefreshConfig,
    event_sender: EventSender,
}

impl RefreshController {
    pub fn new(api: Arc<dyn AnalyticsApi>, config: RefreshConfig, event_sender: EventSender) -> Self {
        Self {
            api,
            config,
            event_sender,
        }
    }

    /// Starts the first cycle immediately and arms the repeating timer.
    pub fn start(self) -> RefreshHandle {
        let (sender, receiver) = watch::channel(RefreshState::new());
        let publisher = Arc::new(StatePublisher {
            sender,
            token: CancellationToken::new(),
        });

        let loop_publisher = publisher.clone();
        let join_handle = tokio::spawn(async move { self.run(loop_publisher).await });

        RefreshHandle {
            publisher,
            receiver,
            join_handle: Some(join_handle),
        }
    }

    async fn run(self, publisher: Arc<StatePublisher>) {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut in_flight: Option<JoinHandle<()>> = None;

        loop {
            tokio::select! {
                _ = publisher.token.cancelled() => break,
                _ = ticker.tick() => {
                    if in_flight.as_ref().is_some_and(|cycle| !cycle.is_finished()) {
                        log::debug!("Previous refresh cycle still running, skipping tick");
                    } else {
                        in_flight = Some(tokio::spawn(Self::refresh_once(
                            self.api.clone(),
                            self.config.limits,
                            publisher.clone(),
                            self.event_sender.clone(),
                        )));
                    }
                }
            }
        }
        log::debug!("Refresh timer disarmed");
    }

    async fn refresh_once(
        api: Arc<dyn AnalyticsApi>,
        limits: CycleLimits,
        publisher: Arc<StatePublisher>,
        events: EventSender,
    ) {
        if !publisher.commit(RefreshEvent::CycleStarted) {
            return;
        }
        events.send_refresh_event(
            "Refreshing analytics data...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        );

        let (event, message, event_type, log_level) = match run_cycle(api.as_ref(), limits).await
        {
            Ok(data) => {
                let message = format!(
                    "Refreshed: {} active users, {} pages, {} sessions",
                    data.active_users,
                    data.top_pages.len(),
                    data.sessions.len()
                );
                (
                    RefreshEvent::CycleSucceeded {
                        data,
                        at: Local::now(),
                    },
                    message,
                    EventType::Success,
                    LogLevel::Info,
                )
            }
            Err(e) => {
                let log_level = ErrorClassifier::new().classify_fetch_error(&e);
                let message = format!("Refresh failed: {}", e);
                (
                    RefreshEvent::CycleFailed {
                        cause: e.to_string(),
                    },
                    message,
                    EventType::Error,
                    log_level,
                )
            }
        };

        if publisher.commit(event) {
            events.send_refresh_event(message, event_type, log_level);
        } else {
            log::debug!("Discarding refresh result that arrived after shutdown");
        }
    }
}

/// Owner of a running [`RefreshController`].
///
/// Dropping the handle tears the controller down just like
/// [`RefreshHandle::shutdown`], minus waiting for the timer task.
#[derive(Debug)]
pub struct RefreshHandle {
    publisher: Arc<StatePublisher>,
    receiver: watch::Receiver<RefreshState>,
    join_handle: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// A receiver that observes every committed state.
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.receiver.clone()
    }

    /// Disarms the timer and waits for the timer task to exit.
    pub async fn shutdown(mut self) {
        self.publisher.close();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.publisher.close();
    }
}
