//! Suggested filename for a downloaded QR image.

use super::sanitize::sanitize_filename;
use crate::qr_link::OutputFormat;

/// Builds `qrcode-<host>.<ext>` with dots in the host replaced by dashes.
///
/// `https://example.com` + SVG gives `qrcode-example-com.svg`. URLs without a host
/// fall back to `qrcode.<ext>`.
pub fn download_filename(url: &str, format: OutputFormat) -> String {
    let ext = format.extension();
    let host = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.replace('.', "-")))
        .filter(|h| !h.is_empty());

    let raw = match host {
        Some(h) => format!("qrcode-{h}.{ext}"),
        None => return format!("qrcode.{ext}"),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() {
        format!("qrcode.{ext}")
    } else {
        sanitized
    }
}
