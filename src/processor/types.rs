//! Maps Neovim API type names onto the type names used by the generated
//! Qt client.
//!
//! Simple types (`Integer`, `String`, `Object`, `Buffer`, ...) are typedef'd
//! by hand in the client and pass through untouched. Only the `ArrayOf(...)`
//! constructs are rewritten here.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{GenError, Result};

/// Fixed-size arrays that have a dedicated named type in the client:
/// (element type, length, generated type).
pub const FIXED_ARRAYS: &[(&str, usize, &str)] = &[("Integer", 2, "Position")];

lazy_static! {
    // ArrayOf(String)
    static ref ARRAY_OF: Regex = Regex::new(r"^ArrayOf\(\s*(\w+)\s*\)$").unwrap();
    // ArrayOf(Integer, 2)
    static ref FIXED_ARRAY_OF: Regex =
        Regex::new(r"^ArrayOf\(\s*(\w+)\s*,\s*(\d+)\s*\)$").unwrap();
}

/// Convert a raw API type into the generated type name.
///
/// Any compound type that is not recognised is an error: passing it through
/// would produce code naming a type that does not exist.
pub fn normalize(raw: &str) -> Result<String> {
    let ty = raw.trim();

    if let Some(caps) = ARRAY_OF.captures(ty) {
        return Ok(format!("{}Array", &caps[1]));
    }

    if let Some(caps) = FIXED_ARRAY_OF.captures(ty) {
        let elem = &caps[1];
        let len: usize = caps[2]
            .parse()
            .map_err(|_| GenError::UnsupportedType(ty.to_string()))?;
        return FIXED_ARRAYS
            .iter()
            .find(|(e, n, _)| *e == elem && *n == len)
            .map(|(_, _, named)| named.to_string())
            .ok_or_else(|| GenError::UnsupportedType(ty.to_string()));
    }

    if ty.contains('(') {
        return Err(GenError::UnsupportedType(ty.to_string()));
    }

    Ok(ty.to_string())
}
