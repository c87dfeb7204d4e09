use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference endpoint error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode completion: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("completion was empty")]
    EmptyCompletion,

    #[error("message content is empty")]
    EmptyMessage,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_code_and_body() {
        let err = ChatError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "loading".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("loading"));
    }

    #[test]
    fn timeout_mentions_duration() {
        let err = ChatError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "no reply within 3s");
    }
}
