//! `qrlink interactive` – the form as a line-based session on stdin.

use anyhow::Result;
use qrlink_core::config::QrlinkConfig;
use qrlink_core::fetch::CurlFetcher;
use qrlink_core::form::FormController;
use qrlink_core::qr_link::OutputFormat;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::render;

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionInput {
    Submit(String),
    Format(OutputFormat),
    Save,
    Quit,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> SessionInput {
    let trimmed = line.trim();
    match trimmed.strip_prefix(':') {
        Some(cmd) => match cmd.trim().to_ascii_lowercase().as_str() {
            "save" => SessionInput::Save,
            "quit" | "q" => SessionInput::Quit,
            other => other
                .parse::<OutputFormat>()
                .map(SessionInput::Format)
                .unwrap_or_else(|_| SessionInput::Unknown(trimmed.to_string())),
        },
        None => SessionInput::Submit(line.to_string()),
    }
}

pub async fn run_interactive(cfg: &QrlinkConfig, out_dir: &Path) -> Result<()> {
    let mut form = FormController::from_config(cfg, CurlFetcher::from_config(&cfg.fetch));
    println!(
        "Enter a URL to generate its QR code ({}). Commands: :png, :svg, :save, :quit",
        form.state().format.label()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            SessionInput::Submit(input) => {
                form.on_submit(&input).await;
                render::print_feedback(form.state());
                render::print_result(form.state());
            }
            SessionInput::Format(format) => {
                if form.on_format_change(format).await {
                    render::print_result(form.state());
                } else {
                    println!("Format set to {}.", format.label());
                }
            }
            SessionInput::Save => match form.download_mut().activate(out_dir).await {
                Ok(activation) => render::print_activation(&activation),
                Err(e) => {
                    tracing::warn!(error = %e, "download activation failed");
                    eprintln!("{e}");
                }
            },
            SessionInput::Quit => break,
            SessionInput::Unknown(cmd) => eprintln!("Unknown command {cmd}"),
        }
    }
    Ok(())
}
