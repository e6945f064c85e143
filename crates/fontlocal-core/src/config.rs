use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Remote font origin captured inside `url(...)` by default.
pub const DEFAULT_URL_PREFIX: &str = r"https://fonts\.gstatic\.com/s/";

/// HTTP timeouts (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole font GET, body included.
    pub timeout_secs: u64,
    /// User-Agent sent with each request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 120,
            user_agent: concat!("fontlocal/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Zero is rejected: libcurl reads a zero timeout as "no limit".
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("http.connect_timeout_secs must be at least 1");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("http.timeout_secs must be at least 1");
        }
        Ok(())
    }
}

/// Configuration loaded from `~/.config/fontlocal/config.toml`.
///
/// Every field has a default, so a partial file (or none at all) is valid.
/// Relative paths resolve against the working directory of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizerConfig {
    /// Stylesheet to read.
    pub input: PathBuf,
    /// Stylesheet to write (overwritten).
    pub output: PathBuf,
    /// Directory receiving downloaded fonts; also the prefix of rewritten references.
    pub fonts_dir: PathBuf,
    /// Prefix for rewritten references when it differs from `fonts_dir`
    /// (e.g. fonts saved to `public/fonts`, stylesheet served next to `fonts/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_dir: Option<PathBuf>,
    /// Regex for the URL prefix that must follow `url(` to be localized.
    pub url_prefix: String,
    pub http: HttpConfig,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("fonts-orginal.css"),
            output: PathBuf::from("fonts.css"),
            fonts_dir: PathBuf::from("fonts"),
            reference_dir: None,
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fontlocal")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LocalizerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LocalizerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<LocalizerConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LocalizerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
