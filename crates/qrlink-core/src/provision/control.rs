//! The download control: one binding, always replaced as a whole.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{DownloadTarget, ProvisionError, TransientObject};
use crate::qr_link::OutputFormat;

/// Outcome of activating the control.
#[derive(Debug)]
pub enum Activation {
    /// Saved from the local object; `release` resolves once the object is gone.
    Saved {
        path: PathBuf,
        release: JoinHandle<()>,
    },
    /// Bound to the remote link; the caller has to present it.
    OpenRemote { url: String, filename: String },
    /// Nothing bound yet.
    Unbound,
}

/// Runs on activation of a local binding: hands the object to a delayed release.
#[derive(Debug)]
struct ReleaseOnActivate {
    object: Option<TransientObject>,
    delay: Duration,
}

#[derive(Debug, Default)]
pub struct DownloadControl {
    href: Option<String>,
    filename: Option<String>,
    open_in_new_tab: bool,
    on_activate: Option<ReleaseOnActivate>,
    label: String,
    release_delay: Duration,
}

impl DownloadControl {
    pub fn new(release_delay: Duration) -> Self {
        Self {
            release_delay,
            ..Self::default()
        }
    }

    /// Clears the activation handler and the new-tab flag. Dropping the handler
    /// releases any object from a previous cycle.
    pub fn reset(&mut self) {
        self.on_activate = None;
        self.open_in_new_tab = false;
    }

    /// Binds to `target`, replacing every part of the previous binding.
    pub fn bind(&mut self, target: DownloadTarget) {
        match target {
            DownloadTarget::Local { object, filename } => {
                self.href = Some(object.reference().to_string());
                self.filename = Some(filename);
                self.open_in_new_tab = false;
                self.on_activate = Some(ReleaseOnActivate {
                    object: Some(object),
                    delay: self.release_delay,
                });
            }
            DownloadTarget::Remote { url, filename } => {
                self.href = Some(url);
                self.filename = Some(filename);
                self.open_in_new_tab = true;
                self.on_activate = None;
            }
        }
    }

    pub fn set_label(&mut self, format: OutputFormat) {
        self.label = format!("Download {}", format.label());
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// True if bound to a local transient object that has not been released yet.
    pub fn is_local(&self) -> bool {
        self.on_activate
            .as_ref()
            .is_some_and(|h| h.object.is_some())
    }

    /// True once a local binding has handed its object to release.
    pub fn is_released(&self) -> bool {
        self.on_activate
            .as_ref()
            .is_some_and(|h| h.object.is_none())
    }

    /// True when activation will link out (remote fallback) rather than save.
    pub fn opens_new_context(&self) -> bool {
        self.open_in_new_tab
    }

    /// Saves the bound image into `dest_dir`.
    ///
    /// A local binding copies its object and schedules the object's release after
    /// the configured delay; a second activation of the same binding then fails
    /// with [`ProvisionError::Released`]. A failed copy keeps the object bound.
    pub async fn activate(&mut self, dest_dir: &Path) -> Result<Activation, ProvisionError> {
        let (href, filename) = match (&self.href, &self.filename) {
            (Some(h), Some(f)) => (h.clone(), f.clone()),
            _ => return Ok(Activation::Unbound),
        };

        let handler = match self.on_activate.as_mut() {
            Some(h) => h,
            None => {
                return Ok(Activation::OpenRemote {
                    url: href,
                    filename,
                })
            }
        };

        let object = handler.object.take().ok_or(ProvisionError::Released)?;
        let dest = dest_dir.join(&filename);
        if let Err(source) = tokio::fs::copy(object.path(), &dest).await {
            handler.object = Some(object);
            return Err(ProvisionError::Save { path: dest, source });
        }

        let delay = handler.delay;
        let release = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(object = %object.reference(), "released transient object");
            drop(object);
        });

        tracing::info!(path = %dest.display(), "saved QR image");
        Ok(Activation::Saved {
            path: dest,
            release,
        })
    }
}
