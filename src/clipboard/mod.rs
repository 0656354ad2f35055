// src/clipboard/mod.rs
use anyhow::Result;

// Best-effort clipboard access; there is no confirmed-delivery contract.
pub trait ClipboardWriter {
    fn write_text(&mut self, value: &str) -> Result<()>;
}

// System clipboard via arboard. The clipboard handle is opened per write so
// a headless environment fails the single write instead of the whole session.
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, value: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(value.to_owned())?;
        Ok(())
    }
}
