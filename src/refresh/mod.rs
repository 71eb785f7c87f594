//! Polling refresh of the dashboard data
//!
//! Split into the pure state machine, a single cycle and the timer-driven
//! controller.

pub mod controller;
pub mod cycle;
pub mod state;

pub use controller::{RefreshConfig, RefreshController, RefreshHandle};
pub use cycle::CycleLimits;
pub use state::RefreshState;
