//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod active_users;
pub mod footer;
pub mod header;
pub mod pages_chart;
pub mod sessions_table;
