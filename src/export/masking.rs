//! Masking of sensitive request headers

use std::collections::BTreeMap;

/// Placeholder written over every sensitive header value
pub const MASKED_VALUE: &str = "<masked>";

/// Header-name fragments that mark a header as sensitive (matched
/// case-insensitively as substrings)
pub const SENSITIVE_HEADER_PATTERNS: &[&str] = &[
    "authorization",
    "api-key",
    "api_key",
    "apikey",
    "x-api-key",
    "x-auth-token",
    "token",
    "secret",
    "password",
    "bearer",
];

/// Check whether a header name looks like it carries a credential
pub fn is_sensitive_header(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SENSITIVE_HEADER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Replace the value of every sensitive header with [`MASKED_VALUE`].
///
/// The decision depends only on the header name, so applying the mask twice
/// gives the same result as applying it once.
pub fn mask_sensitive_headers(headers: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if is_sensitive_header(name) {
                MASKED_VALUE.to_string()
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}
