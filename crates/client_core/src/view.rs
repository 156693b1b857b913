//! Element handles for the enhancer page.
//!
//! Components never look elements up themselves: a [`PageHandles`] bundle is
//! acquired once when the page is built and handed to each component. All
//! handles use interior mutability so the loader and controller can share them
//! with whatever renders the page.

use std::sync::Arc;

use anyhow::Result;
use shared::domain::FrameworkDescriptor;

use crate::render::RenderedResult;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const LOAD_ERROR_PLACEHOLDER: &str = "Error loading frameworks";
pub const CHOOSE_FRAMEWORK_PROMPT: &str = "Choose a framework...";

pub const ENHANCE_LABEL: &str = "Enhance Prompt";
pub const ENHANCE_BUSY_LABEL: &str = "Enhancing...";
pub const COPY_LABEL: &str = "Copy to Clipboard";
pub const COPY_DONE_LABEL: &str = "Copied!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    /// An entry without its own value; like an HTML `<option>` with no value
    /// attribute, its label doubles as its value.
    pub fn placeholder(label: &str, disabled: bool) -> Self {
        Self {
            value: label.to_string(),
            label: label.to_string(),
            disabled,
        }
    }

    /// The leading, empty-valued prompt entry shown once frameworks loaded.
    pub fn choose_prompt() -> Self {
        Self {
            value: String::new(),
            label: CHOOSE_FRAMEWORK_PROMPT.to_string(),
            disabled: false,
        }
    }
}

impl From<&FrameworkDescriptor> for SelectOption {
    fn from(framework: &FrameworkDescriptor) -> Self {
        Self {
            value: framework.id.0.clone(),
            label: framework.display_label(),
            disabled: false,
        }
    }
}

/// True for values that can never name a loaded framework.
pub fn is_placeholder_value(value: &str) -> bool {
    value.is_empty() || value == LOADING_PLACEHOLDER || value == LOAD_ERROR_PLACEHOLDER
}

pub trait PromptInput: Send + Sync {
    fn text(&self) -> String;
}

pub trait FrameworkSelect: Send + Sync {
    /// Replaces every entry and selects the first one.
    fn set_options(&self, options: Vec<SelectOption>);
    fn options(&self) -> Vec<SelectOption>;
    fn selected_value(&self) -> String;
}

pub trait ActionButton: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
    fn set_label(&self, label: &str);
    fn label(&self) -> String;
}

pub trait ResultsPanel: Send + Sync {
    fn render(&self, result: RenderedResult);
    /// Reveals the panel. It starts hidden.
    fn reveal(&self);
    fn is_visible(&self) -> bool;
    /// Plain text of the rendered enhanced prompt, without markup.
    fn output_text(&self) -> String;
}

/// Blocking user notification (an `alert`).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct PageHandles {
    pub prompt_input: Arc<dyn PromptInput>,
    pub framework_select: Arc<dyn FrameworkSelect>,
    pub enhance_button: Arc<dyn ActionButton>,
    pub copy_button: Arc<dyn ActionButton>,
    pub results: Arc<dyn ResultsPanel>,
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn ClipboardSink>,
}
