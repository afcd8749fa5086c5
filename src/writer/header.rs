//! `neovim.h`: the `Neovim` QObject declaration.
//!
//! Every function gets a slot that issues the request and a matching
//! `on_<name>` signal that carries the decoded response.

use std::io::Write;

use super::{BANNER, param_list, signal_payload};
use crate::error::Result;
use crate::model::FunctionTable;

pub const FILE_NAME: &str = "neovim.h";

const PREAMBLE: &str = "\
#ifndef NEOVIM_QT_NEOVIMOBJ
#define NEOVIM_QT_NEOVIMOBJ
#include \"function.h\"
#include <msgpack.h>
namespace NeovimQt {
class NeovimConnector;
class Neovim: public QObject
{

\tQ_OBJECT
public:
\tNeovim(NeovimConnector *);
protected slots:
\tvoid handleResponse(uint32_t id, Function::FunctionId fun, const msgpack_object&);
\tvoid handleResponseError(uint32_t id, Function::FunctionId fun, const QString& msg, const msgpack_object&);
signals:
\tvoid error(const QString& errmsg);
private:
\tNeovimConnector *m_c;
";

pub fn write<W: Write>(table: &FunctionTable, out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    write!(out, "{PREAMBLE}")?;

    writeln!(out, "public slots:")?;
    for f in table {
        writeln!(out, "\tvoid {}({});", f.name, param_list(f)?)?;
    }

    writeln!(out, "\nsignals:")?;
    for f in table {
        let payload = signal_payload(f)?.unwrap_or_default();
        writeln!(out, "\tvoid on_{}({});", f.name, payload)?;
    }

    writeln!(out, "}};")?;
    writeln!(out, "}} // namespace")?;
    writeln!(out, "#endif")?;
    Ok(())
}
