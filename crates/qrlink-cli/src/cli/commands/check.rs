//! `qrlink check <url>` – validate a URL and hint at TLD typos.

use anyhow::Result;
use qrlink_core::form::{tld_hint_message, Feedback, MSG_EMPTY, MSG_INVALID, MSG_VALID};
use qrlink_core::url_model::{is_valid_url, tld_suggestion};

/// Same feedback the form gives on submit, without building a link.
pub(crate) fn check_feedback(url: &str) -> Feedback {
    let url = url.trim();
    if url.is_empty() {
        return Feedback::error(MSG_EMPTY);
    }
    if !is_valid_url(url) {
        return Feedback::error(MSG_INVALID);
    }
    match tld_suggestion(url) {
        Some(tld) => Feedback::info(tld_hint_message(tld)),
        None => Feedback::info(MSG_VALID),
    }
}

pub fn run_check(url: &str) -> Result<()> {
    let feedback = check_feedback(url);
    if feedback.is_error() {
        eprintln!("{}", feedback.message);
        anyhow::bail!("URL rejected");
    }
    println!("{}", feedback.message);
    Ok(())
}
