// src/bin/cli.rs
use std::process::ExitCode;

use cert_lookup::{cli, log};
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    log::init(log::Sink::Stderr);

    let verdict = cli::run().map_err(|e| eyre!("{e}"))?;
    Ok(ExitCode::from(verdict.exit_code()))
}
