//! Share delegation: native share sheet when the platform has one,
//! clipboard + toast otherwise, manual copy as the last resort.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::effects::NOTIFICATION_VISIBLE;

/// Toast text shown after the page link lands on the clipboard.
pub const LINK_COPIED_MESSAGE: &str = "Link kopyalandı!";

/// Fixed title/text/url handed to the share capability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Result of asking the platform's native share capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeShare {
    Completed,
    Unavailable,
}

/// Platform services the share flow delegates to. Missing capabilities
/// are reported through return values, never as errors.
pub trait SharePlatform {
    fn share_native(&mut self, payload: &SharePayload) -> NativeShare;

    /// `false` when there is no clipboard capability or the write failed.
    fn copy_to_clipboard(&mut self, text: &str) -> bool;

    fn show_notification(&mut self, message: &str, visible_for: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    SharedNatively,
    CopiedToClipboard,
    /// No clipboard either; the caller should present the url as
    /// selectable text for manual copying.
    ManualCopyRequired(String),
}

pub fn share_page(platform: &mut dyn SharePlatform, payload: &SharePayload) -> ShareOutcome {
    if platform.share_native(payload) == NativeShare::Completed {
        return ShareOutcome::SharedNatively;
    }

    if platform.copy_to_clipboard(&payload.url) {
        platform.show_notification(LINK_COPIED_MESSAGE, NOTIFICATION_VISIBLE);
        return ShareOutcome::CopiedToClipboard;
    }

    debug!("no clipboard capability; falling back to manual copy");
    ShareOutcome::ManualCopyRequired(payload.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedPlatform {
        native_available: bool,
        clipboard_available: bool,
        native_calls: Vec<SharePayload>,
        clipboard: Option<String>,
        notifications: Vec<(String, Duration)>,
    }

    impl ScriptedPlatform {
        fn new(native_available: bool, clipboard_available: bool) -> Self {
            Self {
                native_available,
                clipboard_available,
                native_calls: Vec::new(),
                clipboard: None,
                notifications: Vec::new(),
            }
        }
    }

    impl SharePlatform for ScriptedPlatform {
        fn share_native(&mut self, payload: &SharePayload) -> NativeShare {
            if self.native_available {
                self.native_calls.push(payload.clone());
                NativeShare::Completed
            } else {
                NativeShare::Unavailable
            }
        }

        fn copy_to_clipboard(&mut self, text: &str) -> bool {
            if self.clipboard_available {
                self.clipboard = Some(text.to_string());
            }
            self.clipboard_available
        }

        fn show_notification(&mut self, message: &str, visible_for: Duration) {
            self.notifications.push((message.to_string(), visible_for));
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Web Comic - Bölüm 1".to_string(),
            text: "Bu macera dolu hikayeyi keşfedin!".to_string(),
            url: "https://example.com/1.bolum".to_string(),
        }
    }

    #[test]
    fn native_share_skips_clipboard_and_notification() {
        let mut platform = ScriptedPlatform::new(true, true);
        let outcome = share_page(&mut platform, &payload());

        assert_eq!(outcome, ShareOutcome::SharedNatively);
        assert_eq!(platform.native_calls, vec![payload()]);
        assert!(platform.clipboard.is_none());
        assert!(platform.notifications.is_empty());
    }

    #[test]
    fn clipboard_fallback_copies_url_and_notifies() {
        let mut platform = ScriptedPlatform::new(false, true);
        let outcome = share_page(&mut platform, &payload());

        assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
        assert_eq!(platform.clipboard.as_deref(), Some(payload().url.as_str()));
        assert_eq!(
            platform.notifications,
            vec![(LINK_COPIED_MESSAGE.to_string(), NOTIFICATION_VISIBLE)]
        );
    }

    #[test]
    fn missing_clipboard_requests_manual_copy() {
        let mut platform = ScriptedPlatform::new(false, false);
        let outcome = share_page(&mut platform, &payload());

        assert_eq!(outcome, ShareOutcome::ManualCopyRequired(payload().url));
        assert!(platform.notifications.is_empty());
    }
}
