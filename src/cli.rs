use clap::Parser;
use std::path::PathBuf;

/// Maintain a per-project build counter and render it as a C, C++ or C#
/// source artifact.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the counter file and receiving the generated source
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: PathBuf,

    /// Output dialect: C, C++ or C#
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub output_type: String,

    /// Explicit build number for this run, bypassing the persisted counter
    #[arg(short = 's', long = "start", value_name = "N")]
    pub start: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
