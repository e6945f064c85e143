//! `fontlocal config` – show where configuration lives and what is in effect.

use anyhow::Result;
use fontlocal_core::config::LocalizerConfig;
use std::path::Path;

pub fn run_config(cfg: &LocalizerConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
