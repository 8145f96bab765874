//! Top-level-domain typo hints.
//!
//! Advisory only: a suggestion never changes the URL that gets encoded.

/// TLDs that never get a suggestion.
pub const COMMON_TLDS: &[&str] = &[
    "com", "org", "net", "io", "co", "uk", "edu", "gov", "info", "biz", "me", "app", "dev",
];

/// Likely typo -> intended TLD.
pub const TLD_TYPOS: &[(&str, &str)] = &[
    ("vom", "com"),
    ("ocm", "com"),
    ("con", "com"),
    ("comn", "com"),
    ("oc", "com"),
    ("cpm", "com"),
    ("or", "org"),
    ("orgr", "org"),
    ("ogr", "org"),
    ("netw", "net"),
    ("nte", "net"),
    ("oi", "io"),
    ("coo", "co"),
];

/// Suggests a corrected TLD when the URL's last host label looks like a typo.
///
/// Returns `None` for recognised TLDs, unknown labels, and URLs without a host.
pub fn tld_suggestion(url: &str) -> Option<&'static str> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let tld = host.rsplit('.').next()?;

    if COMMON_TLDS.contains(&tld) {
        return None;
    }

    TLD_TYPOS
        .iter()
        .find(|(typo, _)| *typo == tld)
        .map(|(_, correction)| *correction)
}
