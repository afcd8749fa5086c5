use std::collections::HashSet;
use std::fmt;

use crate::error::{GenError, Result};

/// Prefix shared by every generated `FunctionId` enumerant.
pub const ENUM_PREFIX: &str = "NEOVIM_FN_";

/// One positional parameter of a remote function, 1-to-1 with the wire pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A remote-callable function as described by the API metadata.
///
/// Types are kept exactly as they came off the wire; emitters normalize
/// them on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Param>,
    pub can_fail: bool,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: Vec<Param>,
        can_fail: bool,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters,
            can_fail,
        }
    }

    /// `void` is the wire sentinel for "no return value".
    pub fn returns_void(&self) -> bool {
        self.return_type.trim() == "void"
    }

    /// Identifier of this function in the generated `FunctionId` enum.
    pub fn enumerant(&self) -> String {
        format!("{ENUM_PREFIX}{}", self.name.to_uppercase())
    }

    /// Human readable signature, e.g. `Integer nvim_strwidth(String) !fails`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.parameters.iter().map(|p| p.ty.as_str()).collect();
        let notes = if self.can_fail { " !fails" } else { "" };
        format!(
            "{} {}({}){}",
            self.return_type,
            self.name,
            types.join(", "),
            notes
        )
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// The complete, ordered set of functions for one generator run.
///
/// Order is the wire order and becomes the order of the generated enum,
/// descriptor table and dispatch switch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionTable {
    functions: Vec<Function>,
}

impl FunctionTable {
    /// Wrap `functions`, rejecting names that would map onto the same
    /// generated identifier.
    pub fn new(functions: Vec<Function>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(functions.len());
        for f in &functions {
            let enumerant = f.enumerant();
            if !seen.insert(enumerant.clone()) {
                return Err(GenError::DuplicateFunction {
                    name: f.name.clone(),
                    enumerant,
                });
            }
        }
        Ok(Self { functions })
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<'a> IntoIterator for &'a FunctionTable {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
