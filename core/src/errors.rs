//! Conformance failures and their formatting.
//!
//! A failure names the candidate, the interface, the method and its declared
//! signature:
//!
//! ```text
//! Class "Square" must implement method Shape.edges() => number
//! ```

use std::fmt::{self, Write};

use thiserror::Error;

use conform_types::{MethodSignature, TypeLabel, TypeName, join_labels};

const GENERIC_CANDIDATE_LABEL: &str = "Class";

/// Why a required method was not satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnmetReason {
    /// No level of the ancestor chain declares the name.
    Missing,
    /// The nearest level declaring the name has a non-callable member.
    NotCallable,
    /// The walk hit the hop limit before reaching the end of the chain.
    DepthExceeded { limit: usize },
}

impl UnmetReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotCallable => "not callable",
            Self::DepthExceeded { .. } => "ancestor chain too deep",
        }
    }
}

/// A required method the candidate does not implement.
///
/// The message only states the requirement; [`reason`](Self::reason) tells
/// callers which way the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnimplementedMethodError {
    candidate: Option<String>,
    interface: String,
    method: String,
    arg_types: Vec<TypeLabel>,
    ret_type: TypeLabel,
    reason: UnmetReason,
}

impl UnimplementedMethodError {
    #[must_use]
    pub fn new(
        candidate: Option<&str>,
        interface: &str,
        signature: &MethodSignature,
        reason: UnmetReason,
    ) -> Self {
        Self {
            candidate: candidate.map(ToString::to_string),
            interface: interface.to_string(),
            method: signature.method_name().to_string(),
            arg_types: signature.arg_types().to_vec(),
            ret_type: signature.ret_type().clone(),
            reason,
        }
    }

    #[must_use]
    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    #[must_use]
    pub fn interface(&self) -> &str {
        &self.interface
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn arg_types(&self) -> &[TypeLabel] {
        &self.arg_types
    }

    #[must_use]
    pub fn ret_type(&self) -> &TypeLabel {
        &self.ret_type
    }

    #[must_use]
    pub fn reason(&self) -> UnmetReason {
        self.reason
    }
}

impl fmt::Display for UnimplementedMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must implement method {}.{}({}) => {}",
            candidate_label(self.candidate.as_deref()),
            self.interface,
            self.method,
            join_labels(&self.arg_types),
            self.ret_type
        )
    }
}

impl std::error::Error for UnimplementedMethodError {}

/// Every unmet requirement found by a collecting run, in check order.
///
/// Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceReport {
    violations: Vec<UnimplementedMethodError>,
}

impl ConformanceReport {
    pub(crate) fn new(violations: Vec<UnimplementedMethodError>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    #[must_use]
    pub fn violations(&self) -> &[UnimplementedMethodError] {
        &self.violations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<UnimplementedMethodError> {
        self.violations
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        let _ = write!(out, "{} unimplemented method", self.violations.len());
        if self.violations.len() != 1 {
            out.push('s');
        }
        out.push(':');
        for violation in &self.violations {
            out.push_str("\n- ");
            let _ = write!(out, "{violation}");
        }
        f.write_str(&out)
    }
}

impl std::error::Error for ConformanceReport {}

/// Result of a mode-dispatched check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformanceError {
    #[error(transparent)]
    Unimplemented(#[from] UnimplementedMethodError),
    #[error(transparent)]
    Report(#[from] ConformanceReport),
}

impl ConformanceError {
    /// The violations carried by either variant.
    #[must_use]
    pub fn violations(&self) -> &[UnimplementedMethodError] {
        match self {
            Self::Unimplemented(err) => std::slice::from_ref(err),
            Self::Report(report) => report.violations(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("type {0} is already registered")]
    Duplicate(TypeName),
    #[error("type {name} cannot extend {parent}: the ancestor chain would loop")]
    Cycle { name: TypeName, parent: TypeName },
    #[error("type {name} was not registered: {source}")]
    Conformance {
        name: TypeName,
        #[source]
        source: ConformanceError,
    },
}

pub(crate) fn candidate_label(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{GENERIC_CANDIDATE_LABEL} \"{name}\""),
        _ => GENERIC_CANDIDATE_LABEL.to_string(),
    }
}
