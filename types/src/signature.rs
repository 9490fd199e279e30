//! Method signatures: a name plus declared argument and return labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::label::{TypeLabel, join_labels};

/// One required method of an interface.
///
/// Signatures are metadata. Nothing checks the labels against the candidate's
/// actual method; only the name takes part in conformance checking.
///
/// # Serde
///
/// Uses `methodName` / `argTypes` / `retType` keys. Manifests may use the
/// shorter `name` / `args` / `returns` aliases, and `argTypes` may be omitted
/// for a method that takes no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    #[serde(rename = "methodName", alias = "name")]
    method_name: String,
    #[serde(rename = "argTypes", alias = "args", default)]
    arg_types: Vec<TypeLabel>,
    #[serde(rename = "retType", alias = "returns")]
    ret_type: TypeLabel,
}

impl MethodSignature {
    pub fn new<I, L>(method_name: impl Into<String>, arg_types: I, ret_type: impl Into<TypeLabel>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<TypeLabel>,
    {
        Self {
            method_name: method_name.into(),
            arg_types: arg_types.into_iter().map(Into::into).collect(),
            ret_type: ret_type.into(),
        }
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[must_use]
    pub fn arg_types(&self) -> &[TypeLabel] {
        &self.arg_types
    }

    #[must_use]
    pub fn ret_type(&self) -> &TypeLabel {
        &self.ret_type
    }
}

/// Renders as `name(a, b) => ret`.
impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) => {}",
            self.method_name,
            join_labels(&self.arg_types),
            self.ret_type
        )
    }
}
