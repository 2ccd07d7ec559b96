/// Copy `text` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
  let mut cb = arboard::Clipboard::new().map_err(|e| anyhow::anyhow!("clipboard unavailable: {e}"))?;
  cb.set_text(text.to_string()).map_err(|e| anyhow::anyhow!("failed to copy text: {e}"))?;
  tracing::debug!("copied {} bytes to clipboard", text.len());
  Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> anyhow::Result<()> {
  Err(anyhow::anyhow!("clipboard support not enabled"))
}
