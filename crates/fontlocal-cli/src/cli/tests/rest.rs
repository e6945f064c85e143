//! Tests for list, config and global flags.

use super::parse_cli;
use clap::Parser;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_list() {
    match parse_cli(&["fontlocal", "list"]).command {
        Some(CliCommand::List { input, pattern }) => {
            assert!(input.is_none());
            assert!(pattern.is_none());
        }
        other => panic!("expected List, got {:?}", other),
    }
}

#[test]
fn cli_parse_list_input() {
    match parse_cli(&["fontlocal", "list", "--input", "theme.css"]).command {
        Some(CliCommand::List { input, .. }) => {
            assert_eq!(input.as_deref(), Some(Path::new("theme.css")));
        }
        other => panic!("expected List, got {:?}", other),
    }
}

#[test]
fn cli_parse_config() {
    match parse_cli(&["fontlocal", "config"]).command {
        Some(CliCommand::Config) => {}
        other => panic!("expected Config, got {:?}", other),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = parse_cli(&["fontlocal", "run", "--config", "/etc/fontlocal.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/fontlocal.toml")));
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(super::Cli::try_parse_from(["fontlocal", "download"]).is_err());
}
