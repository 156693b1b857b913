use shared::error::ApiError;
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response body (status {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    #[error("backend rejected request: {0}")]
    Backend(#[from] ApiError),
    #[error("response has no enhanced prompt{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    MissingResult { detail: Option<String> },
    #[error("invalid backend base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// Backend-provided detail, when the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend(api) => api.message.as_deref(),
            Self::MissingResult { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message shown to the user. Transport and parse failures stay generic.
    pub fn user_message(&self) -> String {
        match self.detail() {
            Some(detail) => format!("Something went wrong: {detail}"),
            None => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a prompt.")]
    EmptyPrompt,
    #[error("Please wait for frameworks to load and select one.")]
    FrameworkNotSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_reaches_user_message() {
        let err = ClientError::from(ApiError::new(500, Some("framework not found".into())));
        assert_eq!(err.user_message(), "Something went wrong: framework not found");
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        let err = ClientError::MissingResult { detail: None };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.to_string(), "response has no enhanced prompt");

        let err = ClientError::from(ApiError::new(502, None));
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn validation_messages_match_notifications() {
        assert_eq!(ValidationError::EmptyPrompt.to_string(), "Please enter a prompt.");
        assert_eq!(
            ValidationError::FrameworkNotSelected.to_string(),
            "Please wait for frameworks to load and select one."
        );
    }
}
