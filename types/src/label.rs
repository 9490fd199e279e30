//! Descriptive type tags attached to method signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque type tag such as `"number"`, `"function"` or `"void"`.
///
/// Labels document a signature and show up in error messages. They are never
/// resolved against a real type system, so any string is accepted, including
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeLabel(String);

impl TypeLabel {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for TypeLabel {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl AsRef<str> for TypeLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for TypeLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Render labels the way they appear inside a parameter list: `a, b, c`.
#[must_use]
pub fn join_labels(labels: &[TypeLabel]) -> String {
    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(label.as_str());
    }
    out
}
