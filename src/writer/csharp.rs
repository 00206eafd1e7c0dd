//! Emit the C# static-class flavour of the build stamp.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::BuildNumber;

pub fn emit(no: BuildNumber, path: &Path) -> io::Result<()> {
    let mut f = File::create(path)?;

    writeln!(f, "// Auto-generated – DO NOT EDIT")?;
    writeln!(f, "namespace BuildInfo")?;
    writeln!(f, "{{")?;
    writeln!(f, "    public static class BuildNo")?;
    writeln!(f, "    {{")?;
    writeln!(f, "        public const uint BUILD_NO = {};", no)?;
    writeln!(f, "        public const string BUILD_NO_STR = \"{}\";", no)?;
    writeln!(f, "    }}")?;
    writeln!(f, "}}")?;
    f.flush()?;

    Ok(())
}
