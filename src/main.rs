use std::process::ExitCode;

use buildno::cli::Cli;
use buildno::error::Error;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging; everything diagnostic goes to stderr so stdout stays
    // machine-consumable for the build pipeline.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match buildno::run(cli) {
        Ok(emitted) => {
            println!(
                "Build number {} written to {}",
                emitted.build_no,
                emitted.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}
