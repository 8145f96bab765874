//! Binary GET of generated QR images.
//!
//! Uses the curl crate (libcurl). The fetcher sits behind [`ImageFetcher`] so the
//! provisioner and form controller can run against a stub in tests.

mod error;

pub use error::FetchError;

use std::str;
use std::time::Duration;

use crate::config::FetchConfig;

/// Fetches an image as raw bytes. Blocking; the provisioner calls it from `spawn_blocking`.
pub trait ImageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// libcurl-backed fetcher: single GET, follows redirects, no retries.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
        }
    }
}

impl ImageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut content_type: Option<String> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    if let Some((name, value)) = line.split_once(':') {
                        if name.trim().eq_ignore_ascii_case("content-type") {
                            content_type = Some(value.trim().to_string());
                        }
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        tracing::debug!(
            url,
            bytes = body.len(),
            content_type = content_type.as_deref().unwrap_or("-"),
            "fetched QR image"
        );
        Ok(body)
    }
}
