//! `fontlocal list` – show the font URLs a stylesheet references.

use anyhow::{Context, Result};
use fontlocal_core::config::LocalizerConfig;
use fontlocal_core::extract::{extract_font_urls, UrlPattern};
use fontlocal_core::url_model::derive_file_name;
use std::fs;
use std::path::Path;

/// Prints `<file name>\t<url>` per match, in document order. No network, no writes.
pub fn run_list(cfg: &LocalizerConfig, input: Option<&Path>, pattern: Option<&str>) -> Result<()> {
    let input = input.unwrap_or(cfg.input.as_path());
    let pattern = UrlPattern::new(pattern.unwrap_or(cfg.url_prefix.as_str()))?;
    let css = fs::read_to_string(input)
        .with_context(|| format!("failed to read stylesheet: {}", input.display()))?;

    let urls = extract_font_urls(&css, &pattern);
    if urls.is_empty() {
        println!(
            "No font URLs matching {} found in {}.",
            pattern.as_str(),
            input.display()
        );
        return Ok(());
    }
    for url in urls {
        let name = derive_file_name(&url).unwrap_or_else(|| "-".to_string());
        println!("{}\t{}", name, url);
    }
    Ok(())
}
