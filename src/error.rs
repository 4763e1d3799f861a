//! Client Errors
//!
//! Every failure a workflow can hit. None of them is fatal: workflows turn
//! them into a [`Notice`](crate::models::Notice) and keep going.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("storage rejected {key}: {reason}")]
    Rejected { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Server answered with a non-success status
    #[error("API returned {status}{}", detail_suffix(.detail))]
    Api { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Text to show the user: validation text or the server's `detail`,
    /// otherwise the operation's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(message) => message.clone(),
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ClientError::Api {
            status: 401,
            detail: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message("An error occurred"), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back() {
        let no_detail = ClientError::Api { status: 500, detail: None };
        let network = ClientError::Network("connection refused".into());

        assert_eq!(no_detail.user_message("Failed to fetch todos"), "Failed to fetch todos");
        assert_eq!(network.user_message("Failed to fetch todos"), "Failed to fetch todos");
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 400,
            detail: Some("Username already registered".into()),
        };
        assert_eq!(err.to_string(), "API returned 400: Username already registered");
        assert_eq!(
            ClientError::Api { status: 502, detail: None }.to_string(),
            "API returned 502"
        );
    }
}
