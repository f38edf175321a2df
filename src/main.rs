use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use bayesel::ui::cli::args::Cli;
use bayesel::ui::cli::commands;
use bayesel::ui::cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut out).context("bayesel failed")?;
    out.flush().context("failed to flush output")?;

    Ok(())
}
