//! `qrlink generate <url>` – one form submission.

use anyhow::{Context, Result};
use qrlink_core::config::QrlinkConfig;
use qrlink_core::fetch::CurlFetcher;
use qrlink_core::form::{FormController, SubmitOutcome};
use std::path::PathBuf;

use crate::cli::render;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub save: bool,
    pub out_dir: PathBuf,
    pub preview: bool,
}

pub async fn run_generate(cfg: &QrlinkConfig, url: &str, opts: &GenerateOptions) -> Result<()> {
    let mut form = FormController::from_config(cfg, CurlFetcher::from_config(&cfg.fetch));
    let outcome = form.on_submit(url).await;
    render::print_feedback(form.state());

    let target = match outcome {
        SubmitOutcome::Rejected(_) => anyhow::bail!("no QR code generated"),
        SubmitOutcome::Shown { url, .. } => url,
    };

    render::print_result(form.state());
    if opts.preview {
        render::print_qr_preview(&target);
    }

    if opts.save {
        let activation = form
            .download_mut()
            .activate(&opts.out_dir)
            .await
            .context("save QR image")?;
        render::print_activation(&activation);
        if let qrlink_core::provision::Activation::Saved { release, .. } = activation {
            let _ = release.await;
        }
    }
    Ok(())
}
