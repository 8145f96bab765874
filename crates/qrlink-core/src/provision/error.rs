//! Errors raised while activating a download binding.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Writing the fetched bytes to a transient object failed.
    #[error("create transient object: {0}")]
    Transient(#[source] std::io::Error),
    /// Copying the transient object to its destination failed.
    #[error("save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The transient object was already released by an earlier activation.
    #[error("download already released; generate the QR code again")]
    Released,
}
