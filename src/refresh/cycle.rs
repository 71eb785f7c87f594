//! A single refresh cycle: three sequential gateway calls, all or nothing.

use super::state::DashboardData;
use crate::consts::cli_consts::limits;
use crate::gateway::AnalyticsApi;
use crate::gateway::error::FetchError;

/// How many records a cycle asks the backend for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLimits {
    pub top_pages: u32,
    pub recent_sessions: u32,
}

impl Default for CycleLimits {
    fn default() -> Self {
        Self {
            top_pages: limits::TOP_PAGES,
            recent_sessions: limits::RECENT_SESSIONS,
        }
    }
}

/// Fetches active users, then top pages, then recent sessions.
///
/// The first failure aborts the cycle; results of the calls that already
/// succeeded are dropped with it.
pub async fn run_cycle(
    api: &dyn AnalyticsApi,
    limits: CycleLimits,
) -> Result<DashboardData, FetchError> {
    let users = api.fetch_active_users().await?;
    let pages = api.fetch_top_pages(limits.top_pages).await?;
    let sessions = api.fetch_recent_sessions(limits.recent_sessions).await?;

    Ok(DashboardData {
        active_users: users.active_users,
        top_pages: pages.pages,
        sessions: sessions.users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockAnalyticsApi;
    use crate::gateway::types::{
        ActiveUsersResponse, PageMetric, RecentSessionsResponse, SessionSummary,
        TopPagesResponse,
    };
    use mockall::predicate::eq;

    fn unavailable() -> FetchError {
        FetchError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    }

    fn users(active_users: u64) -> ActiveUsersResponse {
        ActiveUsersResponse {
            active_users,
            timestamp: None,
        }
    }

    #[tokio::test]
    // Should call the three endpoints with the configured limits and combine the results.
    async fn test_successful_cycle_combines_all_datasets() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_active_users()
            .times(1)
            .returning(|| Ok(users(12)));
        api.expect_fetch_top_pages()
            .with(eq(10))
            .times(1)
            .returning(|_| {
                Ok(TopPagesResponse {
                    pages: vec![PageMetric::new("/home", 9)],
                    timestamp: None,
                })
            });
        api.expect_fetch_recent_sessions()
            .with(eq(5))
            .times(1)
            .returning(|_| {
                Ok(RecentSessionsResponse {
                    users: vec![SessionSummary::new("usr_1", vec!["s1".to_string()])],
                    timestamp: None,
                })
            });

        let data = run_cycle(&api, CycleLimits::default()).await.unwrap();
        assert_eq!(data.active_users, 12);
        assert_eq!(data.top_pages, vec![PageMetric::new("/home", 9)]);
        assert_eq!(data.sessions[0].user_id, "usr_1");
    }

    #[tokio::test]
    // A failing second call must abort the cycle before the third call is made.
    async fn test_second_call_failure_aborts_cycle() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_active_users()
            .times(1)
            .returning(|| Ok(users(12)));
        api.expect_fetch_top_pages()
            .times(1)
            .returning(|_| Err(unavailable()));
        api.expect_fetch_recent_sessions().times(0);

        let result = run_cycle(&api, CycleLimits::default()).await;
        assert!(matches!(result, Err(FetchError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_first_call_failure_skips_remaining_calls() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_active_users()
            .times(1)
            .returning(|| Err(unavailable()));
        api.expect_fetch_top_pages().times(0);
        api.expect_fetch_recent_sessions().times(0);

        assert!(run_cycle(&api, CycleLimits::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_custom_limits_are_forwarded() {
        let mut api = MockAnalyticsApi::new();
        api.expect_fetch_active_users().returning(|| Ok(users(0)));
        api.expect_fetch_top_pages()
            .with(eq(3))
            .returning(|_| {
                Ok(TopPagesResponse {
                    pages: Vec::new(),
                    timestamp: None,
                })
            });
        api.expect_fetch_recent_sessions()
            .with(eq(2))
            .returning(|_| {
                Ok(RecentSessionsResponse {
                    users: Vec::new(),
                    timestamp: None,
                })
            });

        let limits = CycleLimits {
            top_pages: 3,
            recent_sessions: 2,
        };
        let data = run_cycle(&api, limits).await.unwrap();
        assert_eq!(data, DashboardData::default());
    }
}
