use serde::{Deserialize, Serialize};

use crate::domain::{FrameworkDescriptor, FrameworkId, QualityScore};

/// Body of `GET {base}/frameworks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkListResponse {
    pub frameworks: Vec<FrameworkDescriptor>,
}

/// Body of `POST {base}/enhance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub prompt: String,
    pub framework_id: FrameworkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain: Option<bool>,
}

impl EnhanceRequest {
    pub fn new(prompt: impl Into<String>, framework_id: FrameworkId) -> Self {
        Self {
            prompt: prompt.into(),
            framework_id,
            explain: None,
        }
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain.then_some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub enhanced_prompt: String,
    /// Display name of the framework the backend applied.
    pub selected_framework: String,
    pub quality: QualityScore,
    #[serde(default)]
    pub explain: Vec<String>,
}
