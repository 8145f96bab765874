//! Two-branch result of provisioning: a local transient object or the remote link.

use std::io::Write;
use std::path::Path;

use super::ProvisionError;

/// Fetched image bytes held in a process-local temp file.
///
/// The file is removed when the object is dropped, which is how a binding releases it.
#[derive(Debug)]
pub struct TransientObject {
    file: tempfile::NamedTempFile,
    reference: String,
    len: u64,
}

impl TransientObject {
    /// Writes `bytes` to a new temp file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProvisionError> {
        let mut file = tempfile::Builder::new()
            .prefix("qrlink-")
            .suffix(".obj")
            .tempfile()
            .map_err(ProvisionError::Transient)?;
        file.write_all(bytes).map_err(ProvisionError::Transient)?;
        file.flush().map_err(ProvisionError::Transient)?;
        let reference = url::Url::from_file_path(file.path())
            .map(|u| u.to_string())
            .unwrap_or_else(|_| file.path().display().to_string());
        Ok(Self {
            file,
            reference,
            len: bytes.len() as u64,
        })
    }

    /// `file://` address of the object.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// What the download control gets bound to.
#[derive(Debug)]
pub enum DownloadTarget {
    /// Fetch succeeded: save from the local object.
    Local {
        object: TransientObject,
        filename: String,
    },
    /// Fetch failed: link straight to the service. The save may degrade to
    /// opening the image instead.
    Remote { url: String, filename: String },
}

impl DownloadTarget {
    pub fn filename(&self) -> &str {
        match self {
            DownloadTarget::Local { filename, .. } | DownloadTarget::Remote { filename, .. } => {
                filename
            }
        }
    }

    pub fn href(&self) -> &str {
        match self {
            DownloadTarget::Local { object, .. } => object.reference(),
            DownloadTarget::Remote { url, .. } => url,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DownloadTarget::Local { .. })
    }
}
