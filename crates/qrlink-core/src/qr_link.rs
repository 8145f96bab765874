//! Request URLs for the remote QR image service.
//!
//! Building a link is pure: no network access happens here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default host of the QR image service.
pub const DEFAULT_SERVICE_HOST: &str = "api.qrserver.com";

/// Default PNG edge length in pixels.
pub const DEFAULT_PNG_SIZE: u32 = 300;

const CREATE_PATH: &str = "/v1/create-qr-code/";

/// Image format requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Uppercase name shown on the download control.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Svg => "SVG",
        }
    }

    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised format tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format {0:?} (expected png or svg)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Builds service links for a configured host and PNG size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrLinkBuilder {
    host: String,
    png_size: u32,
}

impl Default for QrLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_HOST, DEFAULT_PNG_SIZE)
    }
}

impl QrLinkBuilder {
    pub fn new(host: impl Into<String>, png_size: u32) -> Self {
        Self {
            host: host.into(),
            png_size,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Request URL for an image of `target` in `format`.
    ///
    /// PNG carries `size=WxH`; SVG omits the size and carries `format=svg`.
    pub fn build(&self, target: &str, format: OutputFormat) -> String {
        let encoded = urlencoding::encode(target);
        let size = match format {
            OutputFormat::Png => format!("size={0}x{0}", self.png_size),
            OutputFormat::Svg => String::new(),
        };
        let format_param = match format {
            OutputFormat::Svg => "format=svg",
            OutputFormat::Png => "",
        };
        let params = [size.as_str(), format_param]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("&");
        format!(
            "https://{}{}?{}&data={}",
            self.host, CREATE_PATH, params, encoded
        )
    }
}

/// Builds a link against `host` with the default PNG size.
pub fn build_qr_image_url(host: &str, target: &str, format: OutputFormat) -> String {
    QrLinkBuilder::new(host, DEFAULT_PNG_SIZE).build(target, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_link_has_size_and_no_format() {
        let link = build_qr_image_url(
            DEFAULT_SERVICE_HOST,
            "https://example.com",
            OutputFormat::Png,
        );
        assert_eq!(
            link,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https%3A%2F%2Fexample.com"
        );
        assert!(!link.contains("format=svg"));
    }

    #[test]
    fn svg_link_has_format_and_no_size() {
        let link = build_qr_image_url(
            DEFAULT_SERVICE_HOST,
            "https://example.com",
            OutputFormat::Svg,
        );
        assert_eq!(
            link,
            "https://api.qrserver.com/v1/create-qr-code/?format=svg&data=https%3A%2F%2Fexample.com"
        );
        assert!(!link.contains("size="));
    }

    #[test]
    fn build_is_deterministic() {
        let b = QrLinkBuilder::default();
        let url = "https://example.com/a b?x=1&y=ä";
        assert_eq!(b.build(url, OutputFormat::Png), b.build(url, OutputFormat::Png));
        assert_eq!(b.build(url, OutputFormat::Svg), b.build(url, OutputFormat::Svg));
    }

    #[test]
    fn query_characters_are_encoded() {
        let link = QrLinkBuilder::default().build("http://example.vom/?a=1&b=2", OutputFormat::Png);
        assert!(link.ends_with("&data=http%3A%2F%2Fexample.vom%2F%3Fa%3D1%26b%3D2"));
    }

    #[test]
    fn sub_delims_are_percent_encoded() {
        // Only alphanumerics and -_.~ stay literal; !'()* are escaped too.
        let link = QrLinkBuilder::default().build("https://a.io/(x)!*'", OutputFormat::Svg);
        assert!(link.ends_with("&data=https%3A%2F%2Fa.io%2F%28x%29%21%2A%27"));
        let link = QrLinkBuilder::default().build("https://a.io/-_.~", OutputFormat::Svg);
        assert!(link.ends_with("&data=https%3A%2F%2Fa.io%2F-_.~"));
    }

    #[test]
    fn custom_host_and_size() {
        let b = QrLinkBuilder::new("qr.internal.test", 512);
        assert_eq!(
            b.build("http://a.io", OutputFormat::Png),
            "https://qr.internal.test/v1/create-qr-code/?size=512x512&data=http%3A%2F%2Fa.io"
        );
    }

    #[test]
    fn parse_format_tags() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!(" SVG ".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert!("gif".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::Svg.label(), "SVG");
    }
}
