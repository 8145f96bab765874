//! `qrlink link <url>` – print the service link; nothing is fetched.

use qrlink_core::config::QrlinkConfig;
use qrlink_core::qr_link::{OutputFormat, QrLinkBuilder};

pub fn run_link(cfg: &QrlinkConfig, url: &str, format: OutputFormat) {
    let links = QrLinkBuilder::new(cfg.service_host.clone(), cfg.png_size);
    println!("{}", links.build(url.trim(), format));
}
