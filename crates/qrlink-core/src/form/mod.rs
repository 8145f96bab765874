//! Form controller: the two transitions a QR form goes through.
//!
//! `on_submit` validates the field and shows a fresh QR image; `on_format_change`
//! regenerates an already visible result in the newly selected format. Neither
//! returns an error: every failure ends up as feedback or as the direct-link
//! download fallback.

mod state;

pub use state::{
    tld_hint_message, Feedback, FeedbackKind, FormState, ImagePreview, MSG_EMPTY, MSG_INVALID,
    MSG_VALID,
};

use std::sync::Arc;

use crate::config::QrlinkConfig;
use crate::fetch::ImageFetcher;
use crate::provision::{provision_download, DownloadControl};
use crate::qr_link::{OutputFormat, QrLinkBuilder};
use crate::url_model::{download_filename, is_valid_url, tld_suggestion};

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Shown {
        url: String,
        qr_url: String,
        suggestion: Option<&'static str>,
    },
}

pub struct FormController<F: ImageFetcher> {
    state: FormState,
    links: QrLinkBuilder,
    fetcher: Arc<F>,
}

impl<F: ImageFetcher> FormController<F> {
    pub fn new(
        links: QrLinkBuilder,
        fetcher: F,
        format: OutputFormat,
        control: DownloadControl,
    ) -> Self {
        Self {
            state: FormState {
                format,
                download: control,
                ..FormState::default()
            },
            links,
            fetcher: Arc::new(fetcher),
        }
    }

    pub fn from_config(cfg: &QrlinkConfig, fetcher: F) -> Self {
        Self::new(
            QrLinkBuilder::new(cfg.service_host.clone(), cfg.png_size),
            fetcher,
            cfg.default_format,
            DownloadControl::new(cfg.fetch.release_delay()),
        )
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn download_mut(&mut self) -> &mut DownloadControl {
        &mut self.state.download
    }

    /// Handles a submission of `input` in the currently selected format.
    pub async fn on_submit(&mut self, input: &str) -> SubmitOutcome {
        self.state.input = input.to_string();
        let url = input.trim().to_string();

        if url.is_empty() {
            self.state.feedback = Feedback::error(MSG_EMPTY);
            return SubmitOutcome::Rejected(Rejection::Empty);
        }
        if !is_valid_url(&url) {
            tracing::debug!(input = %url, "rejected invalid URL");
            self.state.feedback = Feedback::error(MSG_INVALID);
            return SubmitOutcome::Rejected(Rejection::Invalid);
        }

        let suggestion = tld_suggestion(&url);
        self.state.feedback = match suggestion {
            Some(tld) => Feedback::info(tld_hint_message(tld)),
            None => Feedback::info(MSG_VALID),
        };

        let format = self.state.format;
        let qr_url = self.links.build(&url, format);
        self.state.image = Some(ImagePreview {
            src: qr_url.clone(),
            alt: format!("QR code for {url}"),
        });

        self.rewire_download(&url, &qr_url, format).await;

        self.state.result_visible = true;
        self.state.scroll_requests += 1;
        tracing::info!(url = %url, format = %format, "QR code shown");

        SubmitOutcome::Shown {
            url,
            qr_url,
            suggestion,
        }
    }

    /// Selects `format`; regenerates the visible result if there is one.
    ///
    /// Returns true if the image and download were rebuilt.
    pub async fn on_format_change(&mut self, format: OutputFormat) -> bool {
        self.state.format = format;
        if !self.state.result_visible {
            return false;
        }

        let url = self.state.input.trim().to_string();
        if url.is_empty() || !is_valid_url(&url) {
            return false;
        }

        let qr_url = self.links.build(&url, format);
        if let Some(image) = self.state.image.as_mut() {
            image.src = qr_url.clone();
        }
        self.rewire_download(&url, &qr_url, format).await;
        tracing::info!(url = %url, format = %format, "QR code regenerated");
        true
    }

    async fn rewire_download(&mut self, url: &str, qr_url: &str, format: OutputFormat) {
        let filename = download_filename(url, format);
        self.state.download.reset();
        let target = provision_download(&self.fetcher, qr_url, &filename).await;
        self.state.download.bind(target);
        self.state.download.set_label(format);
    }
}
