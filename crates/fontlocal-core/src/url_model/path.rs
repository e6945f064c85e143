//! Filename extraction from font URLs and local path references.

use anyhow::Result;
use std::path::Path;

/// Extracts the text after the last `/` of `url`.
///
/// Unlike a parsed URL path, the query string stays attached, so
/// `.../font.ttf?v=3` yields `font.ttf?v=3`. Returns `None` for an empty
/// segment or a `.`/`..` segment.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let segment = url.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Builds the reference written into the stylesheet for a font saved under `dir`.
///
/// Always uses `/` as separator, whatever the host convention.
pub fn local_reference(dir: &Path, file_name: &str) -> String {
    dir.join(file_name).to_string_lossy().replace('\\', "/")
}

/// Checks that `url` is an absolute http(s) URL with a host before a request is made.
pub fn validate_remote_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("unsupported scheme: {}", other),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        anyhow::bail!("missing host");
    }
    Ok(parsed)
}
