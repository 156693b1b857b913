use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            400 | 422 => Self::Validation,
            _ => Self::Internal,
        }
    }
}

/// Error body returned by the backend. `detail` is only a string for
/// hand-raised errors; request validation failures carry a list instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code:?} ({status}): {}", .message.as_deref().unwrap_or("no detail"))]
pub struct ApiError {
    pub code: ErrorCode,
    pub status: u16,
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self {
            code: ErrorCode::from_status(status),
            status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_as_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"framework not found"}"#).expect("parse");
        assert_eq!(body.detail_message(), Some("framework not found"));
    }

    #[test]
    fn list_detail_is_ignored() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","prompt"],"msg":"field required"}]}"#)
                .expect("parse");
        assert_eq!(body.detail_message(), None);
    }

    #[test]
    fn status_maps_to_code() {
        assert_eq!(ApiError::new(404, None).code, ErrorCode::NotFound);
        assert_eq!(ApiError::new(422, None).code, ErrorCode::Validation);
        assert_eq!(ApiError::new(500, None).code, ErrorCode::Internal);
    }
}
