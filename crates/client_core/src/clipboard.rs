use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::view::ClipboardSink;

/// Writes to the operating system clipboard. A fresh handle is opened per
/// write; holding one across threads is not portable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("failed to open system clipboard")?;
        clipboard
            .set_text(text.to_owned())
            .context("failed to write system clipboard")
    }
}
