//! Builds the function table out of the raw `functions` array.
//!
//! Validation is all-or-nothing: the generated enum and dispatcher must
//! cover every function the remote side knows about, so a single bad entry
//! fails the whole table.
pub mod types;

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use rmpv::Value;
use serde::Deserialize;
use tracing::debug;

use crate::error::{GenError, Result};
use crate::model::{Function, FunctionTable, Param};

/// Self-describing calls that are left out of the bindings on purpose.
pub const EXCLUDED_FUNCTIONS: &[&str] = &["vim_get_api_info", "nvim_get_api_info"];

lazy_static! {
    static ref IDENT: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Wire shape of one `functions` entry. Attributes we don't use
/// (`since`, `method`, `deprecated_since`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawFunction {
    name: String,
    return_type: String,
    #[serde(default)]
    parameters: Vec<(String, String)>,
    #[serde(default)]
    can_fail: bool,
}

/// Turn every entry of the metadata `functions` array into a [`Function`].
pub fn build_table(entries: &[Value]) -> Result<FunctionTable> {
    let mut functions = Vec::<Function>::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let f = parse_function(entry)
            .map_err(|reason| GenError::InvalidFunction { index, reason })?;

        if EXCLUDED_FUNCTIONS.contains(&f.name.as_str()) {
            debug!(name = %f.name, "skipping bootstrap function");
            continue;
        }
        functions.push(f);
    }

    debug!(count = functions.len(), "function table built");
    FunctionTable::new(functions)
}

fn parse_function(entry: &Value) -> std::result::Result<Function, String> {
    if !entry.is_map() {
        return Err("entry is not a map".to_string());
    }

    let raw: RawFunction = rmpv::ext::from_value(entry.clone()).map_err(|e| e.to_string())?;

    if !IDENT.is_match(&raw.name) {
        return Err(format!("`{}` is not a valid function name", raw.name));
    }
    if raw.return_type.trim().is_empty() {
        return Err(format!("function `{}` has an empty return type", raw.name));
    }

    // Parameter names are emitted verbatim as C++ identifiers.
    let mut parameters = Vec::<Param>::with_capacity(raw.parameters.len());
    let mut seen = HashSet::with_capacity(raw.parameters.len());
    for (i, (ty, name)) in raw.parameters.into_iter().enumerate() {
        if ty.trim().is_empty() || name.trim().is_empty() {
            return Err(format!("function `{}` parameter {} is incomplete", raw.name, i));
        }
        if !IDENT.is_match(&name) {
            return Err(format!(
                "function `{}` parameter {} has invalid name `{}`",
                raw.name, i, name
            ));
        }
        if !seen.insert(name.clone()) {
            return Err(format!(
                "function `{}` has duplicate parameter `{}`",
                raw.name, name
            ));
        }
        parameters.push(Param::new(ty, name));
    }

    Ok(Function {
        name: raw.name,
        return_type: raw.return_type,
        parameters,
        can_fail: raw.can_fail,
    })
}
