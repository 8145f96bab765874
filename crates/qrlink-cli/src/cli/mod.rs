//! CLI for QRLINK.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qrlink_core::config;
use qrlink_core::qr_link::OutputFormat;
use std::path::PathBuf;

use commands::{run_check, run_generate, run_interactive, run_link, GenerateOptions};

/// Top-level CLI for QRLINK.
#[derive(Debug, Parser)]
#[command(name = "qrlink")]
#[command(about = "QRLINK: check a website URL and get a QR code image for it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a URL and report any likely TLD typo.
    Check {
        /// URL to check.
        url: String,
    },

    /// Print the QR image service link for a URL (no network access).
    Link {
        /// URL to encode.
        url: String,
        /// Image format: png or svg (default from config).
        #[arg(long, short)]
        format: Option<OutputFormat>,
    },

    /// Submit a URL: show feedback, the QR image link, and prepare its download.
    Generate {
        /// URL to encode.
        url: String,
        /// Image format: png or svg (default from config).
        #[arg(long, short)]
        format: Option<OutputFormat>,
        /// Save the image after preparing the download.
        #[arg(long)]
        save: bool,
        /// Directory the image is saved into (default: config, then current dir).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Also draw the QR code in the terminal.
        #[arg(long)]
        preview: bool,
    },

    /// Line-based session: a URL submits, ":png"/":svg" switch format, ":save" downloads.
    Interactive {
        /// Initially selected format (default from config).
        #[arg(long, short)]
        format: Option<OutputFormat>,
        /// Directory images are saved into (default: config, then current dir).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Link { url, format } => {
                run_link(&cfg, &url, format.unwrap_or(cfg.default_format))
            }
            CliCommand::Generate {
                url,
                format,
                save,
                out_dir,
                preview,
            } => {
                if let Some(f) = format {
                    cfg.default_format = f;
                }
                let opts = GenerateOptions {
                    save,
                    out_dir: resolve_out_dir(out_dir, &cfg)?,
                    preview,
                };
                run_generate(&cfg, &url, &opts).await?;
            }
            CliCommand::Interactive { format, out_dir } => {
                if let Some(f) = format {
                    cfg.default_format = f;
                }
                let out_dir = resolve_out_dir(out_dir, &cfg)?;
                run_interactive(&cfg, &out_dir).await?;
            }
        }

        Ok(())
    }
}

/// `--out-dir`, else `download_dir` from config, else the current directory.
fn resolve_out_dir(flag: Option<PathBuf>, cfg: &config::QrlinkConfig) -> Result<PathBuf> {
    match flag.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
