use crate::gateway::error::FetchError;
use crate::gateway::types::{
    ActiveSessions, ActiveUsersResponse, RecentSessionsResponse, TopPagesResponse,
};

pub(crate) mod client;
pub use client::AnalyticsClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Base URL every endpoint is resolved against.
    fn base_url(&self) -> &str;

    /// Number of distinct users active in the last 5 minutes.
    async fn fetch_active_users(&self) -> Result<ActiveUsersResponse, FetchError>;

    /// Most viewed pages, at most `limit` of them.
    async fn fetch_top_pages(&self, limit: u32) -> Result<TopPagesResponse, FetchError>;

    /// Most recently active users with their sessions, at most `limit` of them.
    async fn fetch_recent_sessions(&self, limit: u32)
    -> Result<RecentSessionsResponse, FetchError>;

    /// Active sessions of a single user.
    async fn fetch_active_sessions_for_user(
        &self,
        user_id: &str,
    ) -> Result<ActiveSessions, FetchError>;

    /// Backend liveness message.
    async fn health(&self) -> Result<String, FetchError>;
}
