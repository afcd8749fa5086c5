use rmpv::Value;
use tracing::debug;

use crate::error::{GenError, Result};
use crate::model::FunctionTable;
use crate::processor;

/// Decode the API metadata and build the function table in one go.
pub fn load(bytes: &[u8]) -> Result<FunctionTable> {
    let functions = decode_functions(bytes)?;
    processor::build_table(&functions)
}

/// Decode one MessagePack value from `bytes` and return the contents of its
/// `functions` entry.
///
/// The document is expected to be a map keyed by strings. Keys other than
/// `functions` (`version`, `types`, `error_types`, `ui_events`, ...) are
/// skipped. Anything after the first value is ignored.
pub fn decode_functions(bytes: &[u8]) -> Result<Vec<Value>> {
    debug!(size = bytes.len(), "decoding metadata");
    let mut rd = bytes;
    let root = rmpv::decode::read_value(&mut rd)?;

    let entries = match root {
        Value::Map(entries) => entries,
        other => {
            return Err(GenError::MalformedDocument(format!(
                "expected a map at the top level, found {}",
                kind(&other)
            )));
        }
    };

    let mut functions = None;
    for (key, val) in entries {
        let key = text(&key).map_err(GenError::MalformedDocument)?;

        if key != "functions" {
            debug!(key, "ignoring metadata entry");
            continue;
        }
        if functions.is_some() {
            return Err(GenError::MalformedDocument(
                "`functions` appears more than once".to_string(),
            ));
        }

        match val {
            Value::Array(items) => functions = Some(items),
            other => {
                return Err(GenError::MalformedDocument(format!(
                    "`functions` is a {}, expected an array",
                    kind(&other)
                )));
            }
        }
    }

    functions.ok_or_else(|| GenError::MalformedDocument("no `functions` entry".to_string()))
}

/// Textual view of a key. Older encoders send strings as `bin` ("raw").
fn text(v: &Value) -> std::result::Result<&str, String> {
    let not_utf8 = || "metadata key is not valid UTF-8".to_string();
    match v {
        Value::String(s) => s.as_str().ok_or_else(not_utf8),
        Value::Binary(b) => std::str::from_utf8(b).map_err(|_| not_utf8()),
        other => Err(format!("metadata key is a {}", kind(other))),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Nil => "nil",
        Value::Boolean(_) => "boolean",
        Value::Integer(_) => "integer",
        Value::F32(_) | Value::F64(_) => "float",
        Value::String(_) => "string",
        Value::Binary(_) => "binary",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        Value::Ext(..) => "extension",
    }
}
