use std::{sync::Arc, time::Duration};

use shared::{
    domain::FrameworkId,
    protocol::{EnhanceRequest, EnhanceResponse},
};
use tracing::{debug, error, info, warn};

use crate::{
    api::EnhancerApi,
    busy::BusyGuard,
    error::{ClientError, ValidationError},
    render::RenderedResult,
    view::{
        is_placeholder_value, PageHandles, COPY_DONE_LABEL, COPY_LABEL, ENHANCE_BUSY_LABEL,
        ENHANCE_LABEL,
    },
};

pub const COPY_CONFIRM_DELAY: Duration = Duration::from_millis(1500);
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard.";

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The enhance control was disabled; the click never reached the handler.
    Ignored,
    Rejected(ValidationError),
    Enhanced(EnhanceResponse),
    Failed(ClientError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    NothingToCopy,
    Copied,
    Failed,
}

pub struct EnhanceController {
    api: Arc<dyn EnhancerApi>,
    page: PageHandles,
    explain: bool,
}

impl EnhanceController {
    pub fn new(api: Arc<dyn EnhancerApi>, page: PageHandles) -> Self {
        Self {
            api,
            page,
            explain: false,
        }
    }

    /// Ask the backend to explain its changes alongside the enhanced prompt.
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if !self.page.enhance_button.is_enabled() {
            debug!("enhance control disabled; click ignored");
            return SubmitOutcome::Ignored;
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(reason) => {
                warn!(%reason, "enhance submission rejected");
                self.page.notifier.notify(&reason.to_string());
                return SubmitOutcome::Rejected(reason);
            }
        };

        let _busy = BusyGuard::acquire(
            self.page.enhance_button.as_ref(),
            ENHANCE_BUSY_LABEL,
            ENHANCE_LABEL,
        );

        match self.api.enhance(&request).await {
            Ok(response) => {
                self.page
                    .results
                    .render(RenderedResult::from_response(&response));
                self.page.results.reveal();
                info!(
                    framework = %response.selected_framework,
                    overall = response.quality.overall,
                    "prompt enhanced"
                );
                SubmitOutcome::Enhanced(response)
            }
            Err(err) => {
                error!(error = %err, framework_id = %request.framework_id, "enhancement failed");
                self.page.notifier.notify(&err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn build_request(&self) -> Result<EnhanceRequest, ValidationError> {
        let prompt = self.page.prompt_input.text();
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        let framework = self.page.framework_select.selected_value();
        if is_placeholder_value(&framework) {
            return Err(ValidationError::FrameworkNotSelected);
        }

        Ok(EnhanceRequest::new(prompt, FrameworkId::new(framework)).with_explain(self.explain))
    }

    /// Copies the rendered enhanced prompt as plain text, then shows a
    /// confirmation on the copy control for [`COPY_CONFIRM_DELAY`].
    pub async fn copy_result(&self) -> CopyOutcome {
        if !self.page.results.is_visible() {
            return CopyOutcome::NothingToCopy;
        }

        let text = self.page.results.output_text();
        if let Err(err) = self.page.clipboard.write_text(&text) {
            error!(error = %err, "clipboard write failed");
            self.page.notifier.notify(COPY_FAILED_MESSAGE);
            return CopyOutcome::Failed;
        }

        self.page.copy_button.set_label(COPY_DONE_LABEL);
        tokio::time::sleep(COPY_CONFIRM_DELAY).await;
        self.page.copy_button.set_label(COPY_LABEL);
        CopyOutcome::Copied
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
