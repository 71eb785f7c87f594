pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all tunables for the dashboard, organized by
    //! functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Maximum number of buffered refresh events between the controller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Analytics API base URL used when neither the config file nor the CLI provides one
    pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/analytics";

    /// HTTP client timeouts
    pub mod http {
        use std::time::Duration;

        /// Time allowed to establish a TCP connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Time allowed for a whole request, including the body (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    /// Query limits accepted by the backend
    pub mod limits {
        /// Number of pages shown in the top pages chart
        pub const TOP_PAGES: u32 = 10;
        /// Largest `limit` the backend accepts for `/top-pages`; anything outside
        /// 1..=100 is clamped here, since the backend silently falls back to 5.
        pub const TOP_PAGES_MAX: u32 = 100;

        /// Number of users shown in the sessions table
        pub const RECENT_SESSIONS: u32 = 5;
        /// Largest `limit` the backend accepts for `/recent-sessions`; anything outside
        /// 1..=50 is clamped here, since the backend silently falls back to 5.
        pub const RECENT_SESSIONS_MAX: u32 = 50;
    }

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    pub mod refresh {
        use std::time::Duration;

        /// Delay between two refresh cycles (milliseconds)
        pub const INTERVAL_MS: u64 = 5_000;

        pub const fn interval() -> Duration {
            Duration::from_millis(INTERVAL_MS)
        }

        /// Message shown in the header whenever a refresh cycle fails
        pub const FETCH_ERROR_MESSAGE: &str =
            "Failed to fetch analytics data. Make sure the backend is running.";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        /// Session ids listed inline before collapsing into "+N more"
        pub const INLINE_SESSION_IDS: usize = 2;

        /// Redraw / input poll period of the TUI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;
    }
}
