//! In-memory class descriptions.

use std::collections::BTreeMap;
use std::sync::Arc;

use conform_types::MemberKind;

use crate::candidate::Candidate;

/// Own members of one class level, keyed by name.
///
/// Declaring a name twice keeps the later kind, like reassigning a property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTable {
    members: BTreeMap<String, MemberKind>,
}

impl MemberTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, kind: MemberKind) {
        self.members.insert(name.into(), kind);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<MemberKind> {
        self.members.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MemberKind)> {
        self.members.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A class built in code: optional name, own members, optional parent.
///
/// Parents are shared through `Arc` and fixed at construction, so a chain of
/// descriptors can never loop back on itself.
///
/// ```
/// use std::sync::Arc;
/// use conform_core::ClassDescriptor;
///
/// let base = Arc::new(ClassDescriptor::named("EventEmitter").with_method("on"));
/// let server = ClassDescriptor::named("HttpServer")
///     .with_method("listen")
///     .extends(base);
/// assert_eq!(server.parent_descriptor().and_then(|p| p.name()), Some("EventEmitter"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassDescriptor {
    name: Option<String>,
    members: MemberTable,
    parent: Option<Arc<ClassDescriptor>>,
}

impl ClassDescriptor {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A class without a display name; failures refer to it generically.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.members.declare(name, MemberKind::Method);
        self
    }

    /// Declare a non-callable member. It shadows same-named ancestor methods.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.members.declare(name, MemberKind::Field);
        self
    }

    #[must_use]
    pub fn extends(mut self, parent: Arc<ClassDescriptor>) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn members(&self) -> &MemberTable {
        &self.members
    }

    #[must_use]
    pub fn parent_descriptor(&self) -> Option<&ClassDescriptor> {
        self.parent.as_deref()
    }
}

impl<'a> Candidate for &'a ClassDescriptor {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn own_member(&self, name: &str) -> Option<MemberKind> {
        self.members.get(name)
    }

    fn parent(&self) -> Option<Self> {
        let this: &'a ClassDescriptor = *self;
        this.parent.as_deref()
    }
}
