//! Persisted build-counter lifecycle: read, bound, increment, write.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::BuildNumber;

/// Single-line counter file kept next to the generated source.
pub const COUNTER_FILE: &str = "build_no.dat";

/// Resolve the build number for this invocation.
///
/// An explicit start value wins outright and leaves the counter file alone.
/// Otherwise the persisted value is incremented and written back; a missing
/// counter file or one that does not parse as an integer restarts the
/// sequence at [`BuildNumber::START`]. Any real read or write fault aborts
/// resolution so emission never runs against a counter in an unknown state.
pub fn resolve(dir: &Path, explicit: Option<u32>) -> Result<BuildNumber> {
    if let Some(value) = explicit {
        let no = BuildNumber::bounded(value);
        debug!(build_no = no.get(), "explicit start, counter file untouched");
        return Ok(no);
    }

    let path = dir.join(COUNTER_FILE);
    let raw = match fs::read_to_string(&path) {
        Ok(text) => match text.trim().parse::<u32>() {
            // An increment past u32 lands in the bound reset below.
            Ok(previous) => previous.checked_add(1).unwrap_or(0),
            Err(_) => BuildNumber::START,
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => BuildNumber::START,
        Err(source) => return Err(Error::CounterRead { path, source }),
    };

    let no = BuildNumber::bounded(raw);
    if let Err(source) = fs::write(&path, no.to_string()) {
        return Err(Error::CounterWrite { path, source });
    }
    debug!(build_no = no.get(), path = %path.display(), "counter persisted");

    Ok(no)
}
