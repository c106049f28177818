use std::fmt;

use crate::hcp::team_removal::{ExitStatus, FATAL_ERROR_CODE};

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Invalid or empty email input
    Input(String),
    /// Target team does not exist in the organization
    TeamNotFound { team: String, org: String },
}

impl TfeError {
    /// Process exit code for a run aborted by this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TfeError::TeamNotFound { .. } => ExitStatus::TeamNotFound.code(),
            _ => FATAL_ERROR_CODE,
        }
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::Input(msg) => write!(f, "Input error: {}", msg),
            TfeError::TeamNotFound { team, org } => {
                write!(f, "Team '{}' not found in organization '{}'", team, org)
            }
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Input(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TfeError::TokenNotFound("test host".to_string());
        assert!(err.to_string().contains("test host"));
    }

    #[test]
    fn test_api_error_display() {
        let err = TfeError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TfeError>();
    }

    #[test]
    fn test_input_error_display() {
        let err = TfeError::Input("no emails".to_string());
        assert_eq!(err.to_string(), "Input error: no emails");
    }

    #[test]
    fn test_team_not_found_display() {
        let err = TfeError::TeamNotFound {
            team: "owners".to_string(),
            org: "acme".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Team 'owners' not found in organization 'acme'"
        );
    }

    #[test]
    fn test_exit_codes() {
        let team = TfeError::TeamNotFound {
            team: "x".to_string(),
            org: "y".to_string(),
        };
        assert_eq!(team.exit_code(), 2);
        assert_eq!(TfeError::Input("bad".to_string()).exit_code(), 1);
        assert_eq!(TfeError::TokenNotFound("none".to_string()).exit_code(), 1);
        let api = TfeError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(api.exit_code(), 1);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TfeError = json_err.into();
        match err {
            TfeError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected TfeError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TfeError = io_err.into();
        match err {
            TfeError::Input(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected TfeError::Input"),
        }
    }

    #[test]
    fn test_error_source_api() {
        use std::error::Error;
        let err = TfeError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
