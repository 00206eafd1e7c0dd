//! Dialect selection and artifact emission.

pub mod c;
pub mod cpp;
pub mod csharp;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{BuildNumber, Dialect, OutputSpec};

/// Map the requested type token onto an output spec.
///
/// Pure; unsupported tokens fail here so nothing is written for them, not
/// even the counter file.
pub fn select(token: &str) -> Result<OutputSpec> {
    let dialect = Dialect::from_token(token)
        .ok_or_else(|| Error::UnsupportedType(token.to_string()))?;
    Ok(OutputSpec {
        dialect,
        file_name: dialect.file_name(),
    })
}

/// Replace `<out_dir>/<file_name>` with the rendered artifact.
///
/// The previous build's artifact is removed first; a missing one is not an
/// error. Exactly one file is written per invocation.
pub fn emit(spec: &OutputSpec, no: BuildNumber, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(spec.file_name);

    match fs::remove_file(&path) {
        Ok(()) => debug!(path = %path.display(), "removed previous artifact"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(Error::Emit { path, source }),
    }

    let render = match spec.dialect {
        Dialect::C => c::emit,
        Dialect::CPlusPlus => cpp::emit,
        Dialect::CSharp => csharp::emit,
    };
    if let Err(source) = render(no, &path) {
        return Err(Error::Emit { path, source });
    }
    debug!(path = %path.display(), build_no = no.get(), "artifact written");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn select_maps_the_three_legal_tokens() {
        assert_eq!(select("C").unwrap().file_name, "build_no.h");
        assert_eq!(select("C++").unwrap().file_name, "build_no.hpp");
        assert_eq!(select("C#").unwrap().file_name, "build_no.cs");
    }

    #[test]
    fn select_rejects_anything_else() {
        for token in ["Java", "c", "C--", ""] {
            assert!(matches!(select(token), Err(Error::UnsupportedType(_))));
        }
    }

    #[test]
    fn c_header_contains_both_macros() {
        let dir = tempdir().unwrap();
        let path = emit(&select("C").unwrap(), BuildNumber::bounded(42), dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("#ifndef BUILD_NO_H"));
        assert!(text.contains("#define BUILD_NO     42"));
        assert!(text.contains("#define BUILD_NO_STR \"42\""));
        assert!(text.contains("#endif"));
    }

    #[test]
    fn cpp_header_uses_fixed_width_constants() {
        let dir = tempdir().unwrap();
        let path = emit(&select("C++").unwrap(), BuildNumber::bounded(42), dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("#include <cstdint>"));
        assert!(text.contains("constexpr std::uint32_t BUILD_NO = 42;"));
        assert!(text.contains("constexpr char BUILD_NO_STR[] = \"42\";"));
    }

    #[test]
    fn csharp_module_exposes_a_static_container() {
        let dir = tempdir().unwrap();
        let path = emit(&select("C#").unwrap(), BuildNumber::bounded(42), dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("namespace BuildInfo"));
        assert!(text.contains("public static class BuildNo"));
        assert!(text.contains("public const uint BUILD_NO = 42;"));
        assert!(text.contains("public const string BUILD_NO_STR = \"42\";"));
    }

    #[test]
    fn emission_replaces_the_previous_artifact() {
        let dir = tempdir().unwrap();
        let spec = select("C").unwrap();
        fs::write(dir.path().join(spec.file_name), "stale contents").unwrap();

        let path = emit(&spec, BuildNumber::bounded(7), dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale contents"));
        assert!(text.contains("#define BUILD_NO     7"));
    }

    #[test]
    fn reruns_are_idempotent() {
        let dir = tempdir().unwrap();
        let spec = select("C++").unwrap();

        let first = emit(&spec, BuildNumber::bounded(9), dir.path()).unwrap();
        let once = fs::read_to_string(&first).unwrap();
        let second = emit(&spec, BuildNumber::bounded(9), dir.path()).unwrap();
        let twice = fs::read_to_string(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(once, twice);
    }
}
