//! `fontlocal run` – download fonts and write the rewritten stylesheet.

use anyhow::Result;
use fontlocal_core::config::LocalizerConfig;
use fontlocal_core::localizer::Localizer;

use crate::cli::RunArgs;

pub fn run_localize(mut cfg: LocalizerConfig, args: &RunArgs) -> Result<()> {
    args.apply(&mut cfg);
    tracing::info!(
        input = %cfg.input.display(),
        output = %cfg.output.display(),
        fonts_dir = %cfg.fonts_dir.display(),
        "localizing fonts"
    );

    let localizer = Localizer::from_config(&cfg)?;
    let report = localizer.run(&cfg, &mut |outcome| println!("{}", outcome))?;

    println!(
        "{} downloaded, {} failed; wrote {}",
        report.downloaded(),
        report.failed(),
        report.output.display()
    );
    tracing::info!(
        downloaded = report.downloaded(),
        failed = report.failed(),
        "run completed"
    );
    Ok(())
}
