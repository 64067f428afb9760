use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E001] Invalid base URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: http://localhost:8000\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error("[E002] Invalid URL format: {0}\n\nSuggestions:\n  • Check the URL format is correct\n  • Use absolute URLs with protocol (http:// or https://)")]
    InvalidUrl(#[from] url::ParseError),

    /// The classify endpoint answered with a non-success status. The
    /// message is the server's `detail`, untouched.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("[E004] Failed to fetch sample: {path}\n\nSuggestions:\n  • Server answered with {status}\n  • Check the sample path, e.g. images/cat.jpg or audio/dog_bark.wav\n  • Make sure the server has its samples directory populated")]
    SampleUnavailable { path: String, status: StatusCode },

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CannotBeBase(_) => "E001",
            Self::InvalidUrl(_) => "E002",
            Self::Rejected { .. } => "E003",
            Self::SampleUnavailable { .. } => "E004",
            Self::Json(_) => "E005",
            Self::Reqwest(_) | Self::Io(_) => "E999", // Network errors get generic code
        }
    }

    /// HTTP status behind the failure, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } | Self::SampleUnavailable { status, .. } => Some(*status),
            Self::Reqwest(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_detail_verbatim() {
        let err = ApiClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: "No labels provided".to_string(),
        };
        assert_eq!(err.to_string(), "No labels provided");
        assert_eq!(err.error_code(), "E003");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_sample_unavailable_names_path() {
        let err = ApiClientError::SampleUnavailable {
            path: "audio/missing.wav".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("[E004]"));
        assert!(message.contains("Failed to fetch sample: audio/missing.wav"));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_cannot_be_base_has_suggestions() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        let err = ApiClientError::CannotBeBase(url);
        assert_eq!(err.error_code(), "E001");
        assert!(err.to_string().contains("Suggestions:"));
        assert_eq!(err.status(), None);
    }
}
