#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered, but the envelope header reports a failure.
    #[error("{} (status {status})", display_message(.message))]
    Application { status: i64, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn display_message(message: &str) -> &str {
    if message.is_empty() {
        "Unknown error"
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_shows_server_message() {
        let err = ApiError::Application {
            status: 403,
            message: "Token expired".into(),
        };
        assert_eq!(err.to_string(), "Token expired (status 403)");
    }

    #[test]
    fn empty_application_message_falls_back() {
        let err = ApiError::Application {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Unknown error (status 500)");
    }
}
