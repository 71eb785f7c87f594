//! JSON payloads returned by the analytics API.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats both a missing field and an explicit `null` as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /active-users`: distinct users active in the last 5 minutes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUsersResponse {
    pub active_users: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// View count for a single page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageMetric {
    pub url: String,
    pub views: u64,
}

#[cfg(test)]
impl PageMetric {
    pub fn new(url: impl Into<String>, views: u64) -> Self {
        Self {
            url: url.into(),
            views,
        }
    }
}

/// `GET /top-pages`: pages ordered by view count, most viewed first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopPagesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pages: Vec<PageMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// One user with their currently active sessions.
///
/// `active_sessions` is expected to equal `sessions.len()`, but that is up to
/// the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub user_id: String,
    #[serde(default)]
    pub active_sessions: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sessions: Vec<String>,
}

#[cfg(test)]
impl SessionSummary {
    pub fn new(user_id: impl Into<String>, sessions: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            active_sessions: sessions.len() as u64,
            sessions,
        }
    }
}

/// `GET /recent-sessions`: most recently active users.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentSessionsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<SessionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// `GET /active-sessions?userId=...`: sessions of a single user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessions {
    pub user_id: String,
    #[serde(default)]
    pub active_sessions: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sessions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_active_users_with_timestamp() {
        let body = r#"{"activeUsers": 42, "timestamp": "2024-05-01T10:00:00Z"}"#;
        let parsed: ActiveUsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.active_users, 42);
        assert_eq!(parsed.timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn test_parses_top_pages_in_producer_order() {
        let body = r#"{"pages": [{"url": "/home", "views": 12}, {"url": "/cart", "views": 30}]}"#;
        let parsed: TopPagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.pages,
            vec![PageMetric::new("/home", 12), PageMetric::new("/cart", 30)]
        );
    }

    #[test]
    fn test_missing_or_null_users_parse_as_empty() {
        let missing: RecentSessionsResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.users.is_empty());

        let null: RecentSessionsResponse = serde_json::from_str(r#"{"users": null}"#).unwrap();
        assert!(null.users.is_empty());
    }

    #[test]
    fn test_parses_session_summary_camel_case() {
        let body = r#"{"users": [{"userId": "usr_1", "activeSessions": 3, "sessions": ["a", "b", "c"]}]}"#;
        let parsed: RecentSessionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.users.len(), 1);
        assert_eq!(parsed.users[0].user_id, "usr_1");
        assert_eq!(parsed.users[0].active_sessions, 3);
        assert_eq!(parsed.users[0].sessions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rejects_negative_view_counts() {
        let body = r#"{"pages": [{"url": "/home", "views": -1}]}"#;
        assert!(serde_json::from_str::<TopPagesResponse>(body).is_err());
    }
}
