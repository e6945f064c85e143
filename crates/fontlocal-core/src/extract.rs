//! Extraction of remote font URLs from `url(...)` declarations.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

use crate::config::DEFAULT_URL_PREFIX;

/// Compiled `url(<prefix>...)` matcher. Capture group 1 is the bare URL.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    re: Regex,
}

impl UrlPattern {
    /// Compiles a matcher for URLs starting with `prefix` (itself a regex fragment).
    ///
    /// The URL runs up to the first `)`, so quoted forms like `url("...")` are
    /// not captured.
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!(r"url\(({}[^)]+)\)", prefix);
        let re = Regex::new(&source).with_context(|| format!("invalid url pattern: {}", prefix))?;
        Ok(Self { re })
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }
}

impl Default for UrlPattern {
    fn default() -> Self {
        static DEFAULT: OnceLock<Regex> = OnceLock::new();
        let re = DEFAULT.get_or_init(|| {
            Regex::new(&format!(r"url\(({}[^)]+)\)", DEFAULT_URL_PREFIX)).expect("valid regex")
        });
        Self { re: re.clone() }
    }
}

/// Returns every matching URL in document order, duplicates included.
pub fn extract_font_urls(css: &str, pattern: &UrlPattern) -> Vec<String> {
    pattern
        .re
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
