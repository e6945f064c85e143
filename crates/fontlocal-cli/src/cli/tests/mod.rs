//! CLI parse tests.

use super::{Cli, CliCommand, RunArgs};
use clap::Parser;

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse_run(args: &[&str]) -> RunArgs {
    match parse_cli(args).command {
        Some(CliCommand::Run(run)) => run,
        other => panic!("expected Run, got {:?}", other),
    }
}

mod rest;
