//! Download provisioning: fetch the generated image and bind the download control.
//!
//! On fetch success the bytes become a local transient object; on any failure the
//! control is bound straight to the remote image URL with the same filename. In
//! that fallback the save may turn into opening the image, depending on how the
//! service and the opener handle cross-origin downloads.

mod control;
mod error;
mod target;

pub use control::{Activation, DownloadControl};
pub use error::ProvisionError;
pub use target::{DownloadTarget, TransientObject};

use std::sync::Arc;

use crate::fetch::{FetchError, ImageFetcher};

/// Fetches `qr_url` and returns what the control should be bound to.
///
/// Never fails: fetch errors (and a failure to store the bytes) fall back to
/// [`DownloadTarget::Remote`]. Not cancellable; a caller that has since moved on
/// simply binds the newer result over it.
pub async fn provision_download<F: ImageFetcher>(
    fetcher: &Arc<F>,
    qr_url: &str,
    filename: &str,
) -> DownloadTarget {
    let remote = || DownloadTarget::Remote {
        url: qr_url.to_string(),
        filename: filename.to_string(),
    };

    let fetcher = Arc::clone(fetcher);
    let url = qr_url.to_string();
    let fetched = tokio::task::spawn_blocking(move || fetcher.fetch(&url))
        .await
        .unwrap_or_else(|e| Err(FetchError::Task(e.to_string())));

    let bytes = match fetched {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(url = qr_url, error = %e, "image fetch failed; binding direct link");
            return remote();
        }
    };

    match TransientObject::from_bytes(&bytes) {
        Ok(object) => {
            tracing::debug!(
                object = %object.reference(),
                bytes = object.len(),
                "bound transient object"
            );
            DownloadTarget::Local {
                object,
                filename: filename.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not store fetched image; binding direct link");
            remote()
        }
    }
}
