use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::qr_link::{OutputFormat, DEFAULT_PNG_SIZE, DEFAULT_SERVICE_HOST};

/// Image fetch parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds for the image GET.
    pub connect_timeout_secs: u64,
    /// Total timeout in seconds for the image GET.
    pub timeout_secs: u64,
    /// Delay in milliseconds between activating a download and releasing its transient object.
    pub release_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            release_delay_ms: 100,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn release_delay(&self) -> Duration {
        Duration::from_millis(self.release_delay_ms)
    }
}

/// Global configuration loaded from `~/.config/qrlink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrlinkConfig {
    /// Host of the remote QR image service.
    pub service_host: String,
    /// Edge length in pixels requested for PNG output.
    pub png_size: u32,
    /// Format selected when a session starts.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Fetch timeouts and release delay; built-in defaults if missing.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Where activated downloads are saved (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for QrlinkConfig {
    fn default() -> Self {
        Self {
            service_host: DEFAULT_SERVICE_HOST.to_string(),
            png_size: DEFAULT_PNG_SIZE,
            default_format: OutputFormat::default(),
            fetch: FetchConfig::default(),
            download_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QrlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QrlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: QrlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = QrlinkConfig::default();
        assert_eq!(cfg.service_host, "api.qrserver.com");
        assert_eq!(cfg.png_size, 300);
        assert_eq!(cfg.default_format, OutputFormat::Png);
        assert_eq!(cfg.fetch.release_delay_ms, 100);
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = QrlinkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: QrlinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.service_host, cfg.service_host);
        assert_eq!(parsed.png_size, cfg.png_size);
        assert_eq!(parsed.fetch.timeout_secs, cfg.fetch.timeout_secs);
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let toml = r#"
            service_host = "qr.internal.test"
            png_size = 512
        "#;
        let cfg: QrlinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.service_host, "qr.internal.test");
        assert_eq!(cfg.png_size, 512);
        assert_eq!(cfg.default_format, OutputFormat::Png);
        assert_eq!(cfg.fetch.connect_timeout_secs, 15);
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn config_toml_format_and_fetch_section() {
        let toml = r#"
            service_host = "api.qrserver.com"
            png_size = 300
            default_format = "svg"
            download_dir = "/tmp/qr"

            [fetch]
            connect_timeout_secs = 5
            timeout_secs = 10
            release_delay_ms = 250
        "#;
        let cfg: QrlinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_format, OutputFormat::Svg);
        assert_eq!(cfg.download_dir.as_deref(), Some(std::path::Path::new("/tmp/qr")));
        assert_eq!(cfg.fetch.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.fetch.release_delay(), Duration::from_millis(250));
    }
}
