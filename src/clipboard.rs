//! System clipboard retrieval.

use anyhow::{bail, Context, Result};

/// Text currently on the system clipboard.
pub fn clipboard_text() -> Result<String> {
    let mut clipboard = arboard::Clipboard::new().context("failed to open the system clipboard")?;
    let text = clipboard
        .get_text()
        .context("failed to read text from the clipboard")?;
    if text.trim().is_empty() {
        bail!("the clipboard has no text to read");
    }
    Ok(text)
}
