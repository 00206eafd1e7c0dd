//! Emit the C++ header flavour of the build stamp.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::BuildNumber;

pub fn emit(no: BuildNumber, path: &Path) -> io::Result<()> {
    let mut h = File::create(path)?;

    writeln!(h, "// Auto-generated – DO NOT EDIT")?;
    writeln!(h, "#ifndef BUILD_NO_HPP")?;
    writeln!(h, "#define BUILD_NO_HPP\n")?;

    writeln!(h, "#include <cstdint>\n")?;

    writeln!(h, "constexpr std::uint32_t BUILD_NO = {};", no)?;
    writeln!(h, "constexpr char BUILD_NO_STR[] = \"{}\";\n", no)?;

    writeln!(h, "#endif /* BUILD_NO_HPP */")?;
    h.flush()?;

    Ok(())
}
