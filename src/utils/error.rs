use std::fmt;
use thiserror::Error;

/// 哪一個外部資料來源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Apod,
    BackendStatus,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feed::Apod => write!(f, "NASA APOD"),
            Feed::BackendStatus => write!(f, "backend status"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{feed} request failed with status: {status}")]
    Status {
        feed: Feed,
        status: reqwest::StatusCode,
    },

    #[error("JSON deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// 失敗分類，呼叫端若需要區分可使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Status,
    Decode,
    Unexpected,
    Config,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport(e) if e.is_decode() => FailureKind::Decode,
            ApiError::Transport(_) => FailureKind::Network,
            ApiError::Status { .. } => FailureKind::Status,
            ApiError::Decode(_) => FailureKind::Decode,
            ApiError::InvalidUrl(_) => FailureKind::Unexpected,
            ApiError::Io(_)
            | ApiError::ConfigError { .. }
            | ApiError::InvalidConfigValue { .. } => FailureKind::Config,
        }
    }

    /// HTTP 狀態碼（僅限 Status 錯誤）
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            FailureKind::Network => "Could not reach the server".to_string(),
            FailureKind::Status => match self.status() {
                Some(status) => format!("The server answered with {}", status),
                None => "The server rejected the request".to_string(),
            },
            FailureKind::Decode => "The server sent data in an unexpected format".to_string(),
            FailureKind::Unexpected => format!("Unexpected error: {}", self),
            FailureKind::Config => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            FailureKind::Network => "Check the network connection and the endpoint URL",
            FailureKind::Status => match self.status().map(|s| s.as_u16()) {
                Some(401) | Some(403) => "Check that the API key is valid",
                Some(429) => "The API key is rate limited, try again later",
                _ => "Try again later",
            },
            FailureKind::Decode => "Check that the endpoint serves the expected JSON document",
            FailureKind::Unexpected => "Check the configured endpoint URLs",
            FailureKind::Config => "Fix the configuration file or command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_kind_and_message() {
        let err = ApiError::Status {
            feed: Feed::Apod,
            status: reqwest::StatusCode::FORBIDDEN,
        };

        assert_eq!(err.kind(), FailureKind::Status);
        assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));
        assert_eq!(
            err.to_string(),
            "NASA APOD request failed with status: 403 Forbidden"
        );
        assert_eq!(err.recovery_suggestion(), "Check that the API key is valid");
    }

    #[test]
    fn test_decode_error_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ApiError::from(json_err);

        assert_eq!(err.kind(), FailureKind::Decode);
        assert!(err.status().is_none());
    }

    #[test]
    fn test_config_errors_share_kind() {
        let err = ApiError::InvalidConfigValue {
            field: "endpoints.apod".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.kind(), FailureKind::Config);
        assert!(err.user_friendly_message().contains("endpoints.apod"));
    }
}
