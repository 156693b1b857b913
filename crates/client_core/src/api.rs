use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::FrameworkDescriptor,
    error::{ApiError, ErrorBody},
    protocol::{EnhanceRequest, EnhanceResponse, FrameworkListResponse},
};
use tracing::debug;

use crate::{config::ClientSettings, error::ClientError};

/// Backend operations the page components depend on.
#[async_trait]
pub trait EnhancerApi: Send + Sync {
    async fn list_frameworks(&self) -> Result<Vec<FrameworkDescriptor>, ClientError>;
    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResponse, ClientError>;
}

pub struct HttpEnhancerApi {
    http: Client,
    settings: ClientSettings,
}

impl HttpEnhancerApi {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl EnhancerApi for HttpEnhancerApi {
    async fn list_frameworks(&self) -> Result<Vec<FrameworkDescriptor>, ClientError> {
        let url = self.settings.endpoint("frameworks");
        debug!(%url, "fetching framework list");
        let body: FrameworkListResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.frameworks)
    }

    async fn enhance(&self, request: &EnhanceRequest) -> Result<EnhanceResponse, ClientError> {
        let url = self.settings.endpoint("enhance");
        debug!(%url, framework_id = %request.framework_id, "submitting enhance request");
        let res = self.http.post(url).json(request).send().await?;
        let status = res.status();
        let bytes = res.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            status: status.as_u16(),
            source,
        })?;
        interpret_enhance_body(status.as_u16(), status.is_success(), body)
    }
}

/// Success needs both a 2xx status and a non-empty `enhanced_prompt`.
fn interpret_enhance_body(
    status: u16,
    is_success: bool,
    body: Value,
) -> Result<EnhanceResponse, ClientError> {
    let has_result = body
        .get("enhanced_prompt")
        .and_then(Value::as_str)
        .is_some_and(|text| !text.is_empty());

    if !is_success || !has_result {
        let detail = serde_json::from_value::<ErrorBody>(body)
            .ok()
            .and_then(|err| err.detail_message().map(str::to_owned));
        if !is_success {
            return Err(ApiError::new(status, detail).into());
        }
        return Err(ClientError::MissingResult { detail });
    }

    serde_json::from_value(body).map_err(|source| ClientError::Decode { status, source })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
