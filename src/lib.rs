pub mod cli;
pub mod counter;
pub mod error;
pub mod model;
pub mod writer;

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::Cli;
use crate::model::{BuildNumber, Config};

/// Outcome of a successful run, for the caller to report.
#[derive(Debug)]
pub struct Emitted {
    pub path: PathBuf,
    pub build_no: BuildNumber,
}

pub fn run(cli: Cli) -> anyhow::Result<Emitted> {
    // 1. ── Validate configuration ─────────────────────────────────────
    let config = Config::from_cli(cli)?;

    // 2. ── Select dialect ─────────────────────────────────────────────
    // Selection is pure and runs before counter resolution; an unsupported
    // type must leave the counter file untouched.
    let spec = writer::select(&config.requested_type)?;

    // 3. ── Resolve counter ────────────────────────────────────────────
    let build_no = counter::resolve(&config.output_dir, config.explicit_start)
        .context("Resolving build counter")?;

    // 4. ── Emit artifact ──────────────────────────────────────────────
    let path = writer::emit(&spec, build_no, &config.output_dir)
        .context("Writing generated source")?;

    Ok(Emitted { path, build_no })
}
