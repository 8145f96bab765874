//! URL modeling: validation, TLD typo hints, and download filename derivation.

mod filename;
mod sanitize;
mod tld;
mod validate;

pub use filename::download_filename;
pub use sanitize::sanitize_filename;
pub use tld::{tld_suggestion, COMMON_TLDS, TLD_TYPOS};
pub use validate::is_valid_url;
