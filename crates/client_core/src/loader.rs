use std::sync::Arc;

use tracing::{error, info};

use crate::{
    api::EnhancerApi,
    error::ClientError,
    view::{
        ActionButton, FrameworkSelect, PageHandles, SelectOption, LOADING_PLACEHOLDER,
        LOAD_ERROR_PLACEHOLDER,
    },
};

/// Populates the framework selector at page load.
///
/// The enhance control is disabled while loading and only re-enabled after a
/// successful load; a failed load leaves it disabled until the page is rebuilt,
/// since no valid framework id exists to submit.
pub struct FrameworkLoader {
    api: Arc<dyn EnhancerApi>,
    select: Arc<dyn FrameworkSelect>,
    submit: Arc<dyn ActionButton>,
}

impl FrameworkLoader {
    pub fn new(api: Arc<dyn EnhancerApi>, handles: &PageHandles) -> Self {
        Self {
            api,
            select: handles.framework_select.clone(),
            submit: handles.enhance_button.clone(),
        }
    }

    /// Runs one load. The page reflects the outcome before this returns; the
    /// result only tells the caller how it went.
    pub async fn load(&self) -> Result<usize, ClientError> {
        self.select
            .set_options(vec![SelectOption::placeholder(LOADING_PLACEHOLDER, true)]);
        self.submit.set_enabled(false);

        match self.api.list_frameworks().await {
            Ok(frameworks) => {
                let mut options = Vec::with_capacity(frameworks.len() + 1);
                options.push(SelectOption::choose_prompt());
                options.extend(frameworks.iter().map(SelectOption::from));
                self.select.set_options(options);
                self.submit.set_enabled(true);
                info!(count = frameworks.len(), "frameworks loaded");
                Ok(frameworks.len())
            }
            Err(err) => {
                self.select
                    .set_options(vec![SelectOption::placeholder(LOAD_ERROR_PLACEHOLDER, false)]);
                error!(error = %err, "framework load failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
