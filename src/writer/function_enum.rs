//! `function_enum.h`: one `FunctionId` enumerant per function.

use std::io::Write;

use super::BANNER;
use crate::error::Result;
use crate::model::{ENUM_PREFIX, FunctionTable};

pub const FILE_NAME: &str = "function_enum.h";

/// Sentinel used by the dispatcher for ids outside the table.
pub const NULL_ENUMERANT: &str = "NULL";

pub fn write<W: Write>(table: &FunctionTable, out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "enum FunctionId {{")?;
    for f in table {
        writeln!(out, "\t{},", f.enumerant())?;
    }
    writeln!(out, "\t{ENUM_PREFIX}{NULL_ENUMERANT}")?;
    writeln!(out, "}};")?;
    Ok(())
}
