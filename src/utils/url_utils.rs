//! URL manipulation utilities.
//!
//! Helpers for turning site-relative wiki hrefs into absolute URLs and for
//! decoding the page names embedded in them.

use anyhow::Result;
use url::Url;

/// Resolve a site-relative href (`/wiki/...`) against the configured origin
pub fn resolve_against_origin(origin: &str, href: &str) -> Result<String> {
    let base = Url::parse(origin).map_err(|e| anyhow::anyhow!("Invalid origin '{origin}': {e}"))?;
    let resolved = base
        .join(href)
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{href}' against '{origin}': {e}"))?;
    Ok(resolved.to_string())
}

/// Decode a wiki page name taken from an href
///
/// Percent escapes are decoded and underscores become spaces, matching how
/// the wiki itself displays titles. Invalid escapes leave the name as-is.
#[must_use]
pub fn decode_page_name(raw: &str) -> String {
    let decoded = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };
    decoded.replace('_', " ")
}

/// Check if an href is an absolute http(s) URL
#[must_use]
pub fn is_absolute_http(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
