use std::fmt;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Error;

/// Everything one invocation needs, validated once and then immutable.
///
/// The pipeline stages only ever borrow this; nothing downstream mutates
/// configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Existing directory that holds `build_no.dat` and receives the artifact.
    pub output_dir: PathBuf,
    /// Raw `-t` token; mapped onto a [`Dialect`] at selection time.
    pub requested_type: String,
    /// Caller-supplied override for the counter, already leniently parsed.
    pub explicit_start: Option<u32>,
}

impl Config {
    /// Validate the parsed arguments.
    ///
    /// The output directory must exist before any counter or emission I/O is
    /// attempted. A `-s` value that does not parse as a non-negative integer
    /// is treated as absent, not as an error.
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        if !cli.path.is_dir() {
            return Err(Error::MissingOutputDir { path: cli.path });
        }

        let explicit_start = cli.start.as_deref().and_then(|s| s.parse::<u32>().ok());

        Ok(Self {
            output_dir: cli.path,
            requested_type: cli.output_type,
            explicit_start,
        })
    }
}

/// Resolved counter value, always within `[START, MAX]` once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildNumber(u32);

impl BuildNumber {
    /// First value of the sequence, also the reset target.
    pub const START: u32 = 1;
    /// Largest representable build number.
    pub const MAX: u32 = 99_999;

    /// Fold a raw candidate into the legal range.
    ///
    /// Zero and anything past `MAX` restart the sequence at `START`.
    pub fn bounded(raw: u32) -> Self {
        if raw == 0 || raw > Self::MAX {
            Self(Self::START)
        } else {
            Self(raw)
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of output dialects the emitter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    C,
    CPlusPlus,
    CSharp,
}

impl Dialect {
    /// Map a `-t` token onto a dialect.
    ///
    /// Matching is case-sensitive; anything but the three literals is
    /// unsupported and reported by the selector.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "C" => Some(Self::C),
            "C++" => Some(Self::CPlusPlus),
            "C#" => Some(Self::CSharp),
            _ => None,
        }
    }

    /// Artifact file name: the shared `build_no.` base plus the dialect's
    /// extension.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::C => "build_no.h",
            Self::CPlusPlus => "build_no.hpp",
            Self::CSharp => "build_no.cs",
        }
    }
}

/// Dialect plus the artifact name it maps to, handed to the emitter.
#[derive(Debug, Clone, Copy)]
pub struct OutputSpec {
    pub dialect: Dialect,
    pub file_name: &'static str,
}
