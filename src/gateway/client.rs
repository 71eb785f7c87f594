//! Analytics API Client
//!
//! A JSON-over-HTTP client for the analytics backend. Requests are plain GETs;
//! failures are logged and handed back to the caller without retrying.

use crate::consts::cli_consts::{http, limits};
use crate::gateway::AnalyticsApi;
use crate::gateway::error::FetchError;
use crate::gateway::types::{
    ActiveSessions, ActiveUsersResponse, RecentSessionsResponse, TopPagesResponse,
};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("analytics-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
}

impl AnalyticsClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, endpoint: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send_get(&self, url: &str) -> Result<Response, FetchError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.build_url(endpoint, query);
        let response = self.send_get(&url).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

/// Logs a failed request before it is handed back to the caller.
fn log_failure<T>(what: &str, result: Result<T, FetchError>) -> Result<T, FetchError> {
    if let Err(e) = &result {
        log::error!("Error fetching {}: {}", what, e);
    }
    result
}

#[async_trait::async_trait]
impl AnalyticsApi for AnalyticsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_active_users(&self) -> Result<ActiveUsersResponse, FetchError> {
        log_failure("active users", self.get_json("active-users", &[]).await)
    }

    async fn fetch_top_pages(&self, limit: u32) -> Result<TopPagesResponse, FetchError> {
        let limit = limit.clamp(1, limits::TOP_PAGES_MAX);
        log_failure(
            "top pages",
            self.get_json("top-pages", &[("limit", limit.to_string())])
                .await,
        )
    }

    async fn fetch_recent_sessions(
        &self,
        limit: u32,
    ) -> Result<RecentSessionsResponse, FetchError> {
        let limit = limit.clamp(1, limits::RECENT_SESSIONS_MAX);
        log_failure(
            "recent sessions",
            self.get_json("recent-sessions", &[("limit", limit.to_string())])
                .await,
        )
    }

    async fn fetch_active_sessions_for_user(
        &self,
        user_id: &str,
    ) -> Result<ActiveSessions, FetchError> {
        log_failure(
            "active sessions",
            self.get_json("active-sessions", &[("userId", user_id.to_string())])
                .await,
        )
    }

    async fn health(&self) -> Result<String, FetchError> {
        let url = self.build_url("health", &[]);
        let result = match self.send_get(&url).await {
            Ok(response) => response.text().await.map_err(FetchError::from),
            Err(e) => Err(e),
        };
        log_failure("health", result)
    }
}

#[cfg(test)]
/// These are ignored by default since they require a running analytics backend.
mod live_backend_tests {
    use crate::consts::cli_consts::DEFAULT_API_URL;
    use crate::gateway::AnalyticsApi;

    #[tokio::test]
    #[ignore] // This test requires a live analytics backend.
    /// Should return the active user count.
    async fn test_fetch_active_users() {
        let client = super::AnalyticsClient::new(DEFAULT_API_URL).unwrap();
        match client.fetch_active_users().await {
            Ok(users) => println!("Active users: {}", users.active_users),
            Err(e) => panic!("Failed to fetch active users: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live analytics backend.
    /// Should return at most `limit` pages.
    async fn test_fetch_top_pages() {
        let client = super::AnalyticsClient::new(DEFAULT_API_URL).unwrap();
        match client.fetch_top_pages(3).await {
            Ok(response) => assert!(response.pages.len() <= 3),
            Err(e) => panic!("Failed to fetch top pages: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live analytics backend.
    /// Should report the backend as running.
    async fn test_health() {
        let client = super::AnalyticsClient::new(DEFAULT_API_URL).unwrap();
        match client.health().await {
            Ok(message) => println!("Health: {}", message),
            Err(e) => panic!("Health check failed: {}", e),
        }
    }
}
