//! `function_static.cpp`: the runtime mirror of the function table.
//!
//! Types are written exactly as they appear in the metadata, so the client
//! can describe calls in the remote API's own vocabulary.

use std::io::Write;

use super::{BANNER, c_string};
use crate::error::Result;
use crate::model::FunctionTable;

pub const FILE_NAME: &str = "function_static.cpp";

pub fn write<W: Write>(table: &FunctionTable, out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(
        out,
        "const QList<Function> Function::knownFunctions = QList<Function>()"
    )?;
    for f in table {
        writeln!(
            out,
            "<< Function({}, {},",
            c_string(&f.return_type),
            c_string(&f.name)
        )?;
        writeln!(out, "\tQList<QString>()")?;
        for p in &f.parameters {
            writeln!(out, "\t\t<< QString({})", c_string(&p.ty))?;
        }
        writeln!(out, "\t, {})", f.can_fail)?;
    }
    writeln!(out, "\t;")?;
    Ok(())
}
