//! Error handling for the gateway module

use thiserror::Error;

/// Failure of a single gateway request.
///
/// The refresh controller treats every variant the same way; the variants only
/// exist so the cause can be logged and surfaced for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_includes_status_and_body() {
        let err = FetchError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error with status 503: Service Unavailable"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err: FetchError = serde_json::from_str::<u64>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("Decoding error"));
    }
}
