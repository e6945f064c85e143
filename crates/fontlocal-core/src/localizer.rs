//! Font localizer: downloads every remote font a stylesheet references and
//! rewrites the stylesheet to point at the local copies.
//!
//! Flow is strictly linear: load → extract → fetch-and-store each URL in order
//! → replace in memory → save. A font that can't be downloaded is reported
//! and its URL left untouched; I/O failures on our side abort the run.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::LocalizerConfig;
use crate::extract::{extract_font_urls, UrlPattern};
use crate::fetch::{CurlFetcher, FontFetcher};
use crate::rewrite::replace_literal;
use crate::storage::{write_stylesheet, FontStore};
use crate::url_model::derive_file_name;

/// Why a font was left remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Server answered with something other than 200.
    Status(u32),
    /// No HTTP status at all (DNS, TLS, timeout, bad URL).
    Transport(String),
    /// URL has no usable last segment to name the file after.
    NoFileName,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "HTTP {}", code),
            FailureReason::Transport(msg) => write!(f, "{}", msg),
            FailureReason::NoFileName => write!(f, "no file name in URL"),
        }
    }
}

/// Result of fetch-and-store for one extracted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOutcome {
    Downloaded {
        url: String,
        file_name: String,
        /// Forward-slash path substituted into the stylesheet.
        local_ref: String,
        path: PathBuf,
        bytes: usize,
    },
    Failed {
        url: String,
        file_name: Option<String>,
        reason: FailureReason,
    },
}

impl FontOutcome {
    pub fn url(&self) -> &str {
        match self {
            FontOutcome::Downloaded { url, .. } | FontOutcome::Failed { url, .. } => url,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, FontOutcome::Downloaded { .. })
    }
}

/// Console diagnostic line: `Downloaded: <name>` or `Failed to download <name>`.
impl fmt::Display for FontOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOutcome::Downloaded { file_name, .. } => write!(f, "Downloaded: {}", file_name),
            FontOutcome::Failed { url, file_name, .. } => {
                write!(f, "Failed to download {}", file_name.as_deref().unwrap_or(url))
            }
        }
    }
}

/// Summary of a whole run, outcomes in extraction order.
#[derive(Debug, Clone)]
pub struct LocalizeReport {
    pub outcomes: Vec<FontOutcome>,
    pub output: PathBuf,
}

impl LocalizeReport {
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_downloaded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }
}

pub struct Localizer<F> {
    pattern: UrlPattern,
    store: FontStore,
    fetcher: F,
}

impl Localizer<CurlFetcher> {
    /// Builds a libcurl-backed localizer from configuration.
    pub fn from_config(cfg: &LocalizerConfig) -> Result<Self> {
        Self::with_fetcher(cfg, CurlFetcher::new(&cfg.http))
    }
}

impl<F: FontFetcher> Localizer<F> {
    pub fn new(pattern: UrlPattern, store: FontStore, fetcher: F) -> Self {
        Self {
            pattern,
            store,
            fetcher,
        }
    }

    pub fn with_fetcher(cfg: &LocalizerConfig, fetcher: F) -> Result<Self> {
        cfg.http.validate()?;
        let pattern = UrlPattern::new(&cfg.url_prefix)?;
        let mut store = FontStore::new(&cfg.fonts_dir);
        if let Some(base) = &cfg.reference_dir {
            store = store.with_reference_base(base);
        }
        Ok(Self::new(pattern, store, fetcher))
    }

    /// Reads `cfg.input`, localizes it and writes `cfg.output`.
    ///
    /// `on_outcome` sees each URL's outcome as soon as it is known.
    pub fn run(
        &self,
        cfg: &LocalizerConfig,
        on_outcome: &mut dyn FnMut(&FontOutcome),
    ) -> Result<LocalizeReport> {
        let css = fs::read_to_string(&cfg.input)
            .with_context(|| format!("failed to read stylesheet: {}", cfg.input.display()))?;
        tracing::info!(
            input = %cfg.input.display(),
            fonts_dir = %self.store.dir().display(),
            bytes = css.len(),
            "loaded stylesheet"
        );

        let (css, outcomes) = self.localize_text(&css, on_outcome)?;

        write_stylesheet(&cfg.output, &css)?;
        tracing::info!(output = %cfg.output.display(), "wrote stylesheet");

        Ok(LocalizeReport {
            outcomes,
            output: cfg.output.clone(),
        })
    }

    /// Localizes stylesheet text in memory; fonts are still written to the store.
    pub fn localize_text(
        &self,
        css: &str,
        on_outcome: &mut dyn FnMut(&FontOutcome),
    ) -> Result<(String, Vec<FontOutcome>)> {
        let urls = extract_font_urls(css, &self.pattern);
        tracing::debug!(count = urls.len(), "extracted font urls");

        let mut text = css.to_string();
        let mut outcomes = Vec::with_capacity(urls.len());
        for url in urls {
            let outcome = self.fetch_and_store(&url)?;
            on_outcome(&outcome);
            if let FontOutcome::Downloaded { local_ref, .. } = &outcome {
                let replaced = replace_literal(&mut text, outcome.url(), local_ref);
                tracing::debug!(url = %outcome.url(), local_ref = %local_ref, replaced, "rewrote url");
            }
            outcomes.push(outcome);
        }
        Ok((text, outcomes))
    }

    /// Downloads one font into the store.
    ///
    /// Download problems come back as [`FontOutcome::Failed`]; only local I/O
    /// errors are returned as `Err`.
    pub fn fetch_and_store(&self, url: &str) -> Result<FontOutcome> {
        self.store.ensure_dir()?;

        let file_name = match derive_file_name(url) {
            Some(name) => name,
            None => {
                tracing::warn!(url, "no file name derivable from url");
                return Ok(FontOutcome::Failed {
                    url: url.to_string(),
                    file_name: None,
                    reason: FailureReason::NoFileName,
                });
            }
        };

        let response = match self.fetcher.fetch(url) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(url, "GET failed: {}", e);
                return Ok(FontOutcome::Failed {
                    url: url.to_string(),
                    file_name: Some(file_name),
                    reason: FailureReason::Transport(e.to_string()),
                });
            }
        };

        if !response.is_ok() {
            tracing::warn!(url, status = response.status, "GET returned non-200");
            return Ok(FontOutcome::Failed {
                url: url.to_string(),
                file_name: Some(file_name),
                reason: FailureReason::Status(response.status),
            });
        }

        let path = self.store.save(&file_name, &response.body)?;
        tracing::info!(url, path = %path.display(), bytes = response.body.len(), "font saved");
        Ok(FontOutcome::Downloaded {
            url: url.to_string(),
            local_ref: self.store.local_reference(&file_name),
            file_name,
            path,
            bytes: response.body.len(),
        })
    }
}
