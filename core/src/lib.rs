//! Runtime conformance checking for conform.
//!
//! Candidates are anything implementing [`Candidate`]: the in-memory
//! [`ClassDescriptor`], classes registered in a [`TypeRegistry`], or a
//! host-specific reflection adapter. [`ConformanceChecker`] walks a
//! candidate's ancestor chain and fails on the first required method it
//! cannot find, or collects them all with [`ConformanceChecker::verify_all`].

mod candidate;
mod checker;
mod class;
mod errors;
mod registry;

pub use candidate::Candidate;
pub use checker::{
    ConformanceChecker, DEFAULT_MAX_DEPTH, Resolution, VerifyMode, VerifyOptions, verify,
    verify_all,
};
pub use class::{ClassDescriptor, MemberTable};
pub use errors::{
    ConformanceError, ConformanceReport, RegistryError, UnimplementedMethodError, UnmetReason,
};
pub use registry::{ClassRecord, RegisteredType, TypeRegistry};

pub use conform_types::{InterfaceDefinition, MemberKind, MethodSignature, TypeLabel, TypeName};
