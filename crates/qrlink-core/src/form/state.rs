//! Explicit form state: what the page would otherwise keep in its DOM.

use crate::provision::DownloadControl;
use crate::qr_link::OutputFormat;

pub const MSG_EMPTY: &str = "Please enter a URL.";
pub const MSG_INVALID: &str = "Please enter a valid URL (e.g. https://example.com)";
pub const MSG_VALID: &str = "URL format valid \u{2713}";

/// Feedback when the TLD looks like a typo. The QR code still uses the input as entered.
pub fn tld_hint_message(suggestion: &str) -> String {
    format!(
        "URL format valid. Did you mean .{suggestion} instead? (QR will use what you entered.)"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackKind {
    #[default]
    Info,
    Error,
}

/// Text shown under the URL field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FeedbackKind::Error
    }
}

/// The displayed QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: String,
    /// Accessible description; names the submitted URL.
    pub alt: String,
}

#[derive(Debug, Default)]
pub struct FormState {
    /// Raw contents of the URL field.
    pub input: String,
    /// Selected output format.
    pub format: OutputFormat,
    pub feedback: Feedback,
    pub image: Option<ImagePreview>,
    pub download: DownloadControl,
    /// Whether the result area (image + download control) is shown.
    pub result_visible: bool,
    /// Times the result area was asked to scroll into view.
    pub scroll_requests: u32,
}
