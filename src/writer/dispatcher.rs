//! `neovim.cpp`: request bodies and the response dispatcher.
//!
//! Responses are routed by `Function::FunctionId`. A payload that fails to
//! unpack is logged and its signal is not emitted; the client keeps running.

use std::io::Write;

use super::{BANNER, c_string, param_list, signal_payload};
use crate::error::Result;
use crate::model::{Function, FunctionTable};

pub const FILE_NAME: &str = "neovim.cpp";

const PREAMBLE: &str = "\
#include \"neovim.h\"
#include \"neovimconnector.h\"
namespace NeovimQt {
Neovim::Neovim(NeovimConnector *c)
:m_c(c)
{
}

";

const ERROR_HANDLER: &str = "\
void Neovim::handleResponseError(uint32_t msgid, Function::FunctionId fun, const QString& msg, const msgpack_object& res)
{
\temit error(msg);
\tqDebug() << msg;
}

";

pub fn write<W: Write>(table: &FunctionTable, out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    write!(out, "{PREAMBLE}")?;

    for f in table {
        write_call(f, out)?;
    }

    write!(out, "{ERROR_HANDLER}")?;

    writeln!(
        out,
        "void Neovim::handleResponse(uint32_t msgid, Function::FunctionId fun, const msgpack_object& res)"
    )?;
    writeln!(out, "{{")?;
    writeln!(out, "\tbool convfail=true;")?;
    writeln!(out, "\tswitch(fun) {{")?;
    for f in table {
        write_case(f, out)?;
    }
    writeln!(out, "\tdefault:")?;
    writeln!(out, "\t\tqWarning() << \"Received unexpected response\";")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    writeln!(out, "}} // namespace")?;
    Ok(())
}

fn write_call<W: Write>(f: &Function, out: &mut W) -> Result<()> {
    writeln!(out, "void Neovim::{}({})", f.name, param_list(f)?)?;
    writeln!(out, "{{")?;
    writeln!(
        out,
        "\tNeovimRequest *r = m_c->startRequestUnchecked({}, {});",
        c_string(&f.name),
        f.parameters.len()
    )?;
    writeln!(out, "\tr->setFunction(Function::{});", f.enumerant())?;
    writeln!(
        out,
        "\tconnect(r, &NeovimRequest::finished, this, &Neovim::handleResponse);"
    )?;
    writeln!(
        out,
        "\tconnect(r, &NeovimRequest::error, this, &Neovim::handleResponseError);"
    )?;
    for p in &f.parameters {
        writeln!(out, "\tm_c->send({});", p.name)?;
    }
    writeln!(out, "}}\n")?;
    Ok(())
}

fn write_case<W: Write>(f: &Function, out: &mut W) -> Result<()> {
    writeln!(out, "\tcase Function::{}:", f.enumerant())?;
    writeln!(out, "\t\t{{")?;
    match signal_payload(f)? {
        Some(ty) => {
            writeln!(out, "\t\t\t{ty} data = m_c->to_{ty}(res, &convfail);")?;
            writeln!(out, "\t\t\tif (convfail) {{")?;
            writeln!(
                out,
                "\t\t\t\tqWarning() << \"Error unpacking data for signal {}\";",
                f.name
            )?;
            writeln!(out, "\t\t\t}} else {{")?;
            writeln!(out, "\t\t\t\tqDebug() << \"{} ->\" << data;", f.name)?;
            writeln!(out, "\t\t\t\temit on_{}(data);", f.name)?;
            writeln!(out, "\t\t\t}}")?;
        }
        None => {
            writeln!(out, "\t\t\tqDebug() << \"on_{}\";", f.name)?;
            writeln!(out, "\t\t\temit on_{}();", f.name)?;
        }
    }
    writeln!(out, "\t\t}}")?;
    writeln!(out, "\t\tbreak;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Param;
    use crate::writer::tests::sample_table;
    use pretty_assertions::assert_eq;

    fn render(table: &FunctionTable) -> String {
        let mut buf = Vec::new();
        write(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_call_bodies() {
        let text = render(&sample_table());

        let expected = "\
void Neovim::nvim_strwidth(String text)
{
\tNeovimRequest *r = m_c->startRequestUnchecked(\"nvim_strwidth\", 1);
\tr->setFunction(Function::NEOVIM_FN_NVIM_STRWIDTH);
\tconnect(r, &NeovimRequest::finished, this, &Neovim::handleResponse);
\tconnect(r, &NeovimRequest::error, this, &Neovim::handleResponseError);
\tm_c->send(text);
}

void Neovim::nvim_list_bufs()
{
\tNeovimRequest *r = m_c->startRequestUnchecked(\"nvim_list_bufs\", 0);
\tr->setFunction(Function::NEOVIM_FN_NVIM_LIST_BUFS);
\tconnect(r, &NeovimRequest::finished, this, &Neovim::handleResponse);
\tconnect(r, &NeovimRequest::error, this, &Neovim::handleResponseError);
}

";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn test_dispatch_switch() {
        let text = render(&sample_table());
        let switch = text.split_once("\tswitch(fun) {\n").map(|(_, s)| s).unwrap();

        let expected = "\
\tcase Function::NEOVIM_FN_NVIM_STRWIDTH:
\t\t{
\t\t\tInteger data = m_c->to_Integer(res, &convfail);
\t\t\tif (convfail) {
\t\t\t\tqWarning() << \"Error unpacking data for signal nvim_strwidth\";
\t\t\t} else {
\t\t\t\tqDebug() << \"nvim_strwidth ->\" << data;
\t\t\t\temit on_nvim_strwidth(data);
\t\t\t}
\t\t}
\t\tbreak;
\tcase Function::NEOVIM_FN_NVIM_LIST_BUFS:
\t\t{
\t\t\tBufferArray data = m_c->to_BufferArray(res, &convfail);
\t\t\tif (convfail) {
\t\t\t\tqWarning() << \"Error unpacking data for signal nvim_list_bufs\";
\t\t\t} else {
\t\t\t\tqDebug() << \"nvim_list_bufs ->\" << data;
\t\t\t\temit on_nvim_list_bufs(data);
\t\t\t}
\t\t}
\t\tbreak;
\tdefault:
\t\tqWarning() << \"Received unexpected response\";
\t}
}
} // namespace
";
        assert_eq!(switch, expected);
    }

    #[test]
    fn test_void_arm_skips_unpacking() {
        let table = FunctionTable::new(vec![Function::new(
            "nvim_command",
            "void",
            vec![Param::new("String", "command")],
            true,
        )])
        .unwrap();
        let text = render(&table);
        assert!(text.contains(
            "\tcase Function::NEOVIM_FN_NVIM_COMMAND:\n\t\t{\n\t\t\tqDebug() << \"on_nvim_command\";\n\t\t\temit on_nvim_command();\n\t\t}\n\t\tbreak;\n"
        ));
        assert!(!text.contains("to_void"));
    }

    #[test]
    fn test_error_handler_is_generic() {
        let text = render(&sample_table());
        assert_eq!(text.matches("emit error(msg);").count(), 1);
        assert!(text.contains(ERROR_HANDLER));
    }
}
