//! CLI for fontlocal.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fontlocal_core::config::{self, LocalizerConfig};
use std::path::PathBuf;

use commands::{run_config, run_list, run_localize};

/// Top-level CLI for fontlocal.
#[derive(Debug, Parser)]
#[command(name = "fontlocal")]
#[command(
    about = "Download the web fonts a stylesheet references and rewrite it to use local copies",
    long_about = None
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/fontlocal/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to `run` with no overrides.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download fonts and write the rewritten stylesheet.
    Run(RunArgs),

    /// List the font URLs a stylesheet references, without downloading.
    List {
        /// Stylesheet to scan.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Regex for the URL prefix to match inside url(...).
        #[arg(long, value_name = "REGEX")]
        pattern: Option<String>,
    },

    /// Show the config file location and effective configuration.
    Config,
}

/// Per-run overrides of the configuration file.
#[derive(Debug, Default, Clone, Args)]
pub struct RunArgs {
    /// Stylesheet to read.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Stylesheet to write (overwritten).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Directory to save fonts into.
    #[arg(long, value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,
    /// Prefix used in rewritten url(...) references (default: the fonts dir).
    #[arg(long, value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,
    /// Regex for the URL prefix to match inside url(...).
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,
    /// Seconds allowed per font download.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Seconds allowed to connect.
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,
}

impl RunArgs {
    /// Overlay the flags that were given onto `cfg`.
    pub fn apply(&self, cfg: &mut LocalizerConfig) {
        if let Some(p) = &self.input {
            cfg.input = p.clone();
        }
        if let Some(p) = &self.output {
            cfg.output = p.clone();
        }
        if let Some(d) = &self.fonts_dir {
            cfg.fonts_dir = d.clone();
        }
        if let Some(d) = &self.reference_dir {
            cfg.reference_dir = Some(d.clone());
        }
        if let Some(re) = &self.pattern {
            cfg.url_prefix = re.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.http.timeout_secs = secs;
        }
        if let Some(secs) = self.connect_timeout {
            cfg.http.connect_timeout_secs = secs;
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let (cfg, cfg_path) = match &cli.config {
            Some(path) => (config::load_from_path(path)?, path.clone()),
            None => (config::load_or_init()?, config::config_path()?),
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_else(|| CliCommand::Run(RunArgs::default())) {
            CliCommand::Run(args) => run_localize(cfg, &args)?,
            CliCommand::List { input, pattern } => {
                run_list(&cfg, input.as_deref(), pattern.as_deref())?
            }
            CliCommand::Config => run_config(&cfg, &cfg_path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
