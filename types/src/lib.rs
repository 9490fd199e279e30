//! Core domain types for conform.
//!
//! Interface definitions and the small value types they are built from. No IO,
//! no reflection; the conformance checker lives in `conform-core`.

mod ids;
mod interface;
mod label;
mod member;
mod signature;

pub use ids::TypeName;
pub use interface::InterfaceDefinition;
pub use label::{TypeLabel, join_labels};
pub use member::MemberKind;
pub use signature::MethodSignature;
