//! Font URL modeling and local filename derivation.
//!
//! Local font files are named after the last `/`-separated segment of the
//! remote URL, query-like suffix included, and referenced from the rewritten
//! stylesheet with forward slashes only.

mod path;
mod sanitize;

pub use path::{file_name_from_url, local_reference, validate_remote_url};
pub use sanitize::sanitize_file_name;

/// Derives the on-disk name for a font URL.
///
/// Returns `None` when the URL ends in `/`, `.` or `..`, or sanitizes to
/// nothing usable.
///
/// # Examples
///
/// - `derive_file_name("https://fonts.gstatic.com/s/abc/v1/font.woff2")` → `Some("font.woff2")`
/// - `derive_file_name("https://fonts.gstatic.com/s/abc/")` → `None`
pub fn derive_file_name(url: &str) -> Option<String> {
    let raw = file_name_from_url(url)?;
    let sanitized = sanitize_file_name(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        None
    } else {
        Some(sanitized)
    }
}
