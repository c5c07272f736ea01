//! System clipboard access.
//!
//! Write-only: the converter copies values out, never reads anything
//! in. Copies are dispatched fire-and-forget from the TUI via an
//! injected [`CopyOp`] closure, so tests can substitute a recording
//! stub and the widget itself never blocks on the platform clipboard.

use std::sync::Arc;

use thiserror::Error;

/// Errors from the platform clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Could not open the system clipboard.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The write itself failed.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Injected clipboard operation for the TUI (`Cmd::task` requires
/// `Send + 'static`).
pub type CopyOp = Arc<dyn Fn(String) -> Result<(), String> + Send + Sync>;

/// Write text to the system clipboard.
///
/// Clipboard access needs a display server / pasteboard daemon, so the
/// handle is opened per call rather than held for the program lifetime.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    tracing::debug!(target: "clipboard", len = text.len(), "Clipboard write ok");
    Ok(())
}

/// The default [`CopyOp`] backed by the real system clipboard.
pub fn system_copy_op() -> CopyOp {
    Arc::new(|text: String| copy_to_clipboard(&text).map_err(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = ClipboardError::Unavailable("no display".into());
        assert_eq!(err.to_string(), "clipboard unavailable: no display");

        let err = ClipboardError::WriteFailed("denied".into());
        assert_eq!(err.to_string(), "clipboard write failed: denied");
    }

    // Note: real clipboard tests require a display server / pasteboard
    // daemon, so integration coverage uses an injected CopyOp stub
    // (see tests/tui_workflows.rs). arboard handles the
    // platform-specific access.
    #[test]
    fn system_copy_op_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let op = system_copy_op();
        assert_send_sync(&op);
    }
}
