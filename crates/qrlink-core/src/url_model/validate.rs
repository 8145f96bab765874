//! http(s) URL validation.

/// Returns true if `input` parses as an absolute URL whose scheme is exactly `http` or `https`.
///
/// Parse failure is a negative result, never an error.
pub fn is_valid_url(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
