//! In-memory page used by the CLI, the desktop window and the tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use anyhow::Result;

use crate::{
    render::RenderedResult,
    view::{
        ActionButton, ClipboardSink, FrameworkSelect, Notifier, PageHandles, PromptInput,
        ResultsPanel, SelectOption, COPY_LABEL, ENHANCE_LABEL,
    },
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
pub struct HeadlessPromptInput {
    text: Mutex<String>,
}

impl HeadlessPromptInput {
    pub fn set_text(&self, text: impl Into<String>) {
        *lock(&self.text) = text.into();
    }
}

impl PromptInput for HeadlessPromptInput {
    fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

#[derive(Default)]
struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

#[derive(Default)]
pub struct HeadlessSelect {
    state: Mutex<SelectState>,
}

impl HeadlessSelect {
    /// Selects the enabled entry carrying `value`. Returns false when no such
    /// entry exists, leaving the selection unchanged.
    pub fn select(&self, value: &str) -> bool {
        let mut state = lock(&self.state);
        match state
            .options
            .iter()
            .position(|option| option.value == value && !option.disabled)
        {
            Some(index) => {
                state.selected = Some(index);
                true
            }
            None => false,
        }
    }
}

impl FrameworkSelect for HeadlessSelect {
    fn set_options(&self, options: Vec<SelectOption>) {
        let mut state = lock(&self.state);
        state.selected = (!options.is_empty()).then_some(0);
        state.options = options;
    }

    fn options(&self) -> Vec<SelectOption> {
        lock(&self.state).options.clone()
    }

    fn selected_value(&self) -> String {
        let state = lock(&self.state);
        state
            .selected
            .and_then(|index| state.options.get(index))
            .map(|option| option.value.clone())
            .unwrap_or_default()
    }
}

pub struct HeadlessButton {
    enabled: AtomicBool,
    label: Mutex<String>,
}

impl HeadlessButton {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            label: Mutex::new(label.to_string()),
        }
    }
}

impl ActionButton for HeadlessButton {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn set_label(&self, label: &str) {
        *lock(&self.label) = label.to_string();
    }

    fn label(&self) -> String {
        lock(&self.label).clone()
    }
}

#[derive(Default)]
pub struct HeadlessResults {
    rendered: Mutex<Option<RenderedResult>>,
    visible: AtomicBool,
}

impl HeadlessResults {
    pub fn rendered(&self) -> Option<RenderedResult> {
        lock(&self.rendered).clone()
    }
}

impl ResultsPanel for HeadlessResults {
    fn render(&self, result: RenderedResult) {
        *lock(&self.rendered) = Some(result);
    }

    fn reveal(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn output_text(&self) -> String {
        lock(&self.rendered)
            .as_ref()
            .map(RenderedResult::plain_text)
            .unwrap_or_default()
    }
}

/// Collects notifications until the page owner drains them.
#[derive(Default)]
pub struct HeadlessNotifier {
    pending: Mutex<Vec<String>>,
}

impl HeadlessNotifier {
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.pending))
    }

    pub fn has_pending(&self) -> bool {
        !lock(&self.pending).is_empty()
    }
}

impl Notifier for HeadlessNotifier {
    fn notify(&self, message: &str) {
        lock(&self.pending).push(message.to_string());
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        lock(&self.contents).clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *lock(&self.contents) = Some(text.to_string());
        Ok(())
    }
}

pub struct HeadlessPage {
    pub prompt_input: Arc<HeadlessPromptInput>,
    pub framework_select: Arc<HeadlessSelect>,
    pub enhance_button: Arc<HeadlessButton>,
    pub copy_button: Arc<HeadlessButton>,
    pub results: Arc<HeadlessResults>,
    pub notifier: Arc<HeadlessNotifier>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::with_clipboard(Arc::new(MemoryClipboard::default()))
    }
}

impl HeadlessPage {
    pub fn with_clipboard(clipboard: Arc<dyn ClipboardSink>) -> Self {
        Self {
            prompt_input: Arc::new(HeadlessPromptInput::default()),
            framework_select: Arc::new(HeadlessSelect::default()),
            enhance_button: Arc::new(HeadlessButton::new(ENHANCE_LABEL)),
            copy_button: Arc::new(HeadlessButton::new(COPY_LABEL)),
            results: Arc::new(HeadlessResults::default()),
            notifier: Arc::new(HeadlessNotifier::default()),
            clipboard,
        }
    }

    pub fn handles(&self) -> PageHandles {
        PageHandles {
            prompt_input: self.prompt_input.clone(),
            framework_select: self.framework_select.clone(),
            enhance_button: self.enhance_button.clone(),
            copy_button: self.copy_button.clone(),
            results: self.results.clone(),
            notifier: self.notifier.clone(),
            clipboard: self.clipboard.clone(),
        }
    }
}
