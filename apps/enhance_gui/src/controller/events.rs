//! Backend-to-UI events and error modeling for the status bar.

use client_core::ClientError;

pub enum UiEvent {
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Backend,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadFrameworks,
    Enhance,
    Copy,
}

impl UiErrorContext {
    fn label(self) -> &'static str {
        match self {
            Self::BackendStartup => "Startup",
            Self::LoadFrameworks => "Framework load",
            Self::Enhance => "Enhance",
            Self::Copy => "Copy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// For failures that did not come from the backend client.
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    /// Categorizes by error variant rather than by message text.
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Http(source) if source.is_status() => UiErrorCategory::Backend,
            ClientError::Http(source) if source.is_decode() => UiErrorCategory::Validation,
            ClientError::Http(_) => UiErrorCategory::Transport,
            ClientError::Decode { .. } | ClientError::InvalidBaseUrl { .. } => {
                UiErrorCategory::Validation
            }
            ClientError::Backend(_) | ClientError::MissingResult { .. } => {
                UiErrorCategory::Backend
            }
        };

        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn status_line(&self) -> String {
        let hint = match self.category {
            UiErrorCategory::Transport => " (is the backend running?)",
            _ => "",
        };
        format!("{} failed: {}{hint}", self.context.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use shared::error::ApiError;

    use super::*;

    #[test]
    fn plain_messages_are_uncategorized() {
        let err = UiError::from_message(UiErrorContext::Copy, "clipboard write failed");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.context(), UiErrorContext::Copy);
        assert_eq!(err.status_line(), "Copy failed: clipboard write failed");
    }

    #[test]
    fn undecodable_response_body_is_a_validation_error() {
        let source = serde_json::from_str::<serde_json::Value>("upstream unavailable")
            .expect_err("not json");
        let client_err = ClientError::Decode {
            status: 502,
            source,
        };
        assert!(client_err.to_string().contains("status 502"));

        let err = UiError::from_client_error(UiErrorContext::Enhance, &client_err);
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn backend_rejection_and_missing_result_are_backend_errors() {
        let rejected = ClientError::from(ApiError::new(500, Some("framework not found".into())));
        let err = UiError::from_client_error(UiErrorContext::Enhance, &rejected);
        assert_eq!(err.category(), UiErrorCategory::Backend);
        assert_eq!(
            err.status_line(),
            "Enhance failed: backend rejected request: Internal (500): framework not found"
        );

        let missing = ClientError::MissingResult { detail: None };
        let err = UiError::from_client_error(UiErrorContext::Enhance, &missing);
        assert_eq!(err.category(), UiErrorCategory::Backend);
    }

    #[test]
    fn invalid_base_url_is_a_validation_error() {
        let client_err = ClientError::InvalidBaseUrl {
            url: "api".into(),
            reason: "relative URL without a base".into(),
        };
        let err = UiError::from_client_error(UiErrorContext::LoadFrameworks, &client_err);
        assert_eq!(err.category(), UiErrorCategory::Validation);
    }
}
