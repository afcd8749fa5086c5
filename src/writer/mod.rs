//! Emit the Qt client bindings for a function table.
//!
//! Four artifacts are produced and they only make sense as a set: the
//! enum, the descriptor table, the `Neovim` header and its implementation.
pub mod dispatcher;
pub mod function_enum;
pub mod function_static;
pub mod header;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GenError, Result};
use crate::model::{Function, FunctionTable};
use crate::processor::types::normalize;

/// First line of every generated file. No timestamp, so regenerating from
/// the same metadata reproduces the same bytes.
pub const BANNER: &str = "// Auto generated, do not edit";

pub type Render = fn(&FunctionTable, &mut Vec<u8>) -> Result<()>;

/// Artifacts in the order they are written.
pub const ARTIFACTS: [(&str, Render); 4] = [
    (function_enum::FILE_NAME, function_enum::write),
    (function_static::FILE_NAME, function_static::write),
    (header::FILE_NAME, header::write),
    (dispatcher::FILE_NAME, dispatcher::write),
];

/// Generate all bindings into `out_dir`, creating it if needed.
///
/// Every artifact is rendered before the filesystem is touched, so a type
/// the normalizer rejects leaves the directory as it was. Writing stops at
/// the first file that cannot be created. Returns the number of functions
/// bound.
pub fn generate(table: &FunctionTable, out_dir: &Path) -> Result<usize> {
    let mut rendered = Vec::with_capacity(ARTIFACTS.len());
    for (file, render) in ARTIFACTS {
        let mut buf = Vec::new();
        render(table, &mut buf)?;
        rendered.push((file, buf));
    }

    fs::create_dir_all(out_dir).map_err(|source| GenError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for (file, buf) in rendered {
        let path = out_dir.join(file);
        fs::write(&path, &buf).map_err(|source| GenError::WriteArtifact {
            file: file.to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = buf.len(), "wrote artifact");
    }

    info!(
        functions = table.len(),
        dir = %out_dir.display(),
        "bindings generated"
    );
    Ok(table.len())
}

/// `Type name, Type name` with every type normalized.
fn param_list(f: &Function) -> Result<String> {
    let params = f
        .parameters
        .iter()
        .map(|p| Ok(format!("{} {}", normalize(&p.ty)?, p.name)))
        .collect::<Result<Vec<_>>>()?;
    Ok(params.join(", "))
}

/// Normalized type carried by `on_<name>`, `None` for `void`.
fn signal_payload(f: &Function) -> Result<Option<String>> {
    if f.returns_void() {
        return Ok(None);
    }
    normalize(&f.return_type).map(Some)
}

/// Quote `s` as a C string literal. Control characters become 3-digit
/// octal escapes, which cannot swallow a following character.
fn c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
