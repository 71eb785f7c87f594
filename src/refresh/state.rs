//! Refresh state and its transition function
//!
//! The view only ever sees a `RefreshState`; the controller only ever changes
//! it through [`transition`].

use crate::consts::cli_consts::refresh::FETCH_ERROR_MESSAGE;
use crate::gateway::types::{PageMetric, SessionSummary};
use chrono::{DateTime, Local};

/// The three datasets fetched by one successful cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardData {
    /// Distinct users active in the last 5 minutes.
    pub active_users: u64,
    /// Most viewed pages, in backend order.
    pub top_pages: Vec<PageMetric>,
    /// Most recently active users.
    pub sessions: Vec<SessionSummary>,
}

/// Whether any cycle has resolved yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Phase {
    /// The first cycle has not resolved yet.
    Initializing,
    /// At least one cycle resolved, successfully or not.
    Steady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshState {
    /// True until the first cycle resolves.
    pub loading: bool,
    /// User-facing message of the most recent failure, cleared when a cycle starts.
    pub error: Option<String>,
    /// Underlying cause of the most recent failure, kept for diagnostics.
    pub last_failure: Option<String>,
    /// When the displayed data was fetched.
    pub last_updated: Option<DateTime<Local>>,
    /// Last successfully fetched data; survives failed cycles.
    pub data: DashboardData,
}

impl RefreshState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            last_failure: None,
            last_updated: None,
            data: DashboardData::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Initializing
        } else {
            Phase::Steady
        }
    }
}

impl Default for RefreshState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshEvent {
    CycleStarted,
    CycleSucceeded {
        data: DashboardData,
        at: DateTime<Local>,
    },
    CycleFailed {
        cause: String,
    },
}

pub fn transition(mut state: RefreshState, event: RefreshEvent) -> RefreshState {
    match event {
        RefreshEvent::CycleStarted => {
            state.error = None;
        }
        RefreshEvent::CycleSucceeded { data, at } => {
            state.data = data;
            state.error = None;
            state.last_failure = None;
            state.last_updated = Some(at);
            state.loading = false;
        }
        RefreshEvent::CycleFailed { cause } => {
            state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            state.last_failure = Some(cause);
            state.loading = false;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(active_users: u64) -> DashboardData {
        DashboardData {
            active_users,
            top_pages: vec![PageMetric::new("/home", 40), PageMetric::new("/cart", 10)],
            sessions: vec![SessionSummary::new(
                "usr_1",
                vec!["s1".to_string(), "s2".to_string()],
            )],
        }
    }

    fn succeeded(data: DashboardData) -> RefreshEvent {
        RefreshEvent::CycleSucceeded {
            data,
            at: Local::now(),
        }
    }

    fn failed() -> RefreshEvent {
        RefreshEvent::CycleFailed {
            cause: "HTTP error with status 503: down".to_string(),
        }
    }

    #[test]
    fn test_new_state_is_initializing() {
        let state = RefreshState::new();
        assert!(state.loading);
        assert_eq!(state.phase(), Phase::Initializing);
        assert_eq!(state.data, DashboardData::default());
    }

    #[test]
    fn test_cycle_started_keeps_loading_until_resolved() {
        let state = transition(RefreshState::new(), RefreshEvent::CycleStarted);
        assert!(state.loading);
        assert_eq!(state.phase(), Phase::Initializing);
    }

    #[test]
    fn test_success_replaces_data_and_stamps_time() {
        let state = transition(RefreshState::new(), succeeded(sample_data(7)));
        assert!(!state.loading);
        assert_eq!(state.phase(), Phase::Steady);
        assert_eq!(state.data, sample_data(7));
        assert!(state.last_updated.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_first_failure_leaves_empty_data() {
        let state = transition(RefreshState::new(), failed());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.data, DashboardData::default());
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn test_failure_keeps_stale_data_and_timestamp() {
        let ok = transition(RefreshState::new(), succeeded(sample_data(3)));
        let stamped = ok.last_updated;

        let state = transition(ok, failed());
        assert_eq!(state.data, sample_data(3));
        assert_eq!(state.last_updated, stamped);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(
            state.last_failure.as_deref(),
            Some("HTTP error with status 503: down")
        );
    }

    #[test]
    fn test_failure_never_returns_to_loading() {
        let mut state = RefreshState::new();
        for event in [failed(), RefreshEvent::CycleStarted, failed()] {
            state = transition(state, event);
            assert!(!state.loading);
        }
    }

    #[test]
    fn test_next_cycle_start_clears_error_but_keeps_cause() {
        let state = transition(RefreshState::new(), failed());
        let state = transition(state, RefreshEvent::CycleStarted);
        assert!(state.error.is_none());
        assert!(state.last_failure.is_some());
    }

    #[test]
    fn test_success_after_failure_clears_cause() {
        let state = transition(RefreshState::new(), failed());
        let state = transition(state, succeeded(sample_data(1)));
        assert!(state.error.is_none());
        assert!(state.last_failure.is_none());
    }

    #[test]
    fn test_identical_cycles_are_idempotent() {
        let once = transition(
            transition(RefreshState::new(), RefreshEvent::CycleStarted),
            succeeded(sample_data(5)),
        );
        let twice = transition(
            transition(once.clone(), RefreshEvent::CycleStarted),
            succeeded(sample_data(5)),
        );

        let without_time = |mut s: RefreshState| {
            s.last_updated = None;
            s
        };
        assert_eq!(without_time(once), without_time(twice));
    }
}
