//! Desktop bindings for the share, clipboard, and notification
//! services the controller delegates to.

use std::time::Duration;

use arboard::Clipboard;
use scene_core::{NativeShare, SharePayload, SharePlatform};
use tracing::{debug, warn};

/// One notification queued for the toast layer.
pub struct Toast {
    pub message: String,
    pub visible_for: Duration,
}

pub struct DesktopPlatform {
    /// Probed once at startup; `None` means the share flow skips
    /// straight to the manual-copy fallback.
    clipboard: Option<Clipboard>,
    pending_toasts: Vec<Toast>,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!(error = %err, "clipboard unavailable; share will ask for a manual copy");
                None
            }
        };
        Self {
            clipboard,
            pending_toasts: Vec::new(),
        }
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending_toasts)
    }
}

impl SharePlatform for DesktopPlatform {
    fn share_native(&mut self, _payload: &SharePayload) -> NativeShare {
        // No desktop counterpart of the browser share sheet.
        NativeShare::Unavailable
    }

    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return false;
        };
        match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                false
            }
        }
    }

    fn show_notification(&mut self, message: &str, visible_for: Duration) {
        debug!(message, "queueing toast");
        self.pending_toasts.push(Toast {
            message: message.to_string(),
            visible_for,
        });
    }
}
