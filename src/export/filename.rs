//! Download filename derivation

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of the URL slug
pub const MAX_SLUG_LENGTH: usize = 50;

static PROTOCOL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Turn a URL into a filename-safe slug: protocol stripped, every
/// non-alphanumeric character replaced by `-`, cut to 50 characters.
pub fn url_slug(url: &str) -> String {
    let without_protocol = PROTOCOL_PATTERN.replace(url, "");
    let mut slug = NON_ALPHANUMERIC
        .replace_all(&without_protocol, "-")
        .into_owned();
    // Only ASCII remains, so byte truncation is char-safe.
    slug.truncate(MAX_SLUG_LENGTH);
    slug
}

/// Filename for an import generated on `date`:
/// `tooljet-<slug>-<YYYY-MM-DD>.json`
pub fn generate_filename_on(url: &str, date: NaiveDate) -> String {
    format!("tooljet-{}-{}.json", url_slug(url), date.format("%Y-%m-%d"))
}

/// Filename for an import generated today (local time)
pub fn generate_filename(url: &str) -> String {
    generate_filename_on(url, chrono::Local::now().date_naive())
}
