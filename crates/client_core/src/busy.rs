use crate::view::ActionButton;

/// Holds an action control in its busy state. The control is disabled and
/// relabeled on acquire and restored on drop, so every exit path of the
/// holder, including early returns and panics, releases it.
pub struct BusyGuard<'a> {
    button: &'a dyn ActionButton,
    idle_label: &'static str,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(
        button: &'a dyn ActionButton,
        busy_label: &str,
        idle_label: &'static str,
    ) -> Self {
        button.set_enabled(false);
        button.set_label(busy_label);
        Self { button, idle_label }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.set_label(self.idle_label);
        self.button.set_enabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessButton;

    #[test]
    fn restores_control_on_drop() {
        let button = HeadlessButton::new("Enhance Prompt");
        {
            let _guard = BusyGuard::acquire(&button, "Enhancing...", "Enhance Prompt");
            assert!(!button.is_enabled());
            assert_eq!(button.label(), "Enhancing...");
        }
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Enhance Prompt");
    }

    #[test]
    fn restores_control_when_holder_panics() {
        let button = HeadlessButton::new("Enhance Prompt");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = BusyGuard::acquire(&button, "Enhancing...", "Enhance Prompt");
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Enhance Prompt");
    }
}
