//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("No file staged for upload")]
    NothingStaged,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = Error::Status {
            status: 503,
            url: "http://localhost:8000/api/hygiene/summary".to_string(),
        };
        let display = format!("{}", error);
        assert_eq!(display, "HTTP 503 from http://localhost:8000/api/hygiene/summary");
    }

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Transport error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidFile("notes.txt".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidFile"));
        assert!(debug.contains("notes.txt"));
    }
}
