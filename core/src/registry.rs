//! Registry of named classes linked by parent name.
//!
//! This is the runtime alternative to reflection: plugin code registers what
//! each class declares and which class it extends, and the checker walks the
//! registered links.

use std::collections::{HashMap, HashSet};

use conform_types::{InterfaceDefinition, MemberKind, TypeName};

use crate::candidate::Candidate;
use crate::checker::ConformanceChecker;
use crate::class::MemberTable;
use crate::errors::RegistryError;

/// What gets registered for one class.
///
/// The parent is referenced by name and may be registered later. Until it
/// is, the chain ends at this class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    name: TypeName,
    members: MemberTable,
    parent: Option<TypeName>,
}

impl ClassRecord {
    #[must_use]
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            members: MemberTable::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.members.declare(name, MemberKind::Method);
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.members.declare(name, MemberKind::Field);
        self
    }

    #[must_use]
    pub fn extends(mut self, parent: impl Into<TypeName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    #[must_use]
    pub fn members(&self) -> &MemberTable {
        &self.members
    }

    #[must_use]
    pub fn parent(&self) -> Option<&TypeName> {
        self.parent.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<TypeName, ClassRecord>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class.
    ///
    /// Rejects a name that is already taken, and a parent link whose
    /// registered ancestors lead back to the new class.
    pub fn register(&mut self, record: ClassRecord) -> Result<(), RegistryError> {
        if self.types.contains_key(&record.name) {
            return Err(RegistryError::Duplicate(record.name));
        }
        if let Some(parent) = &record.parent
            && self.reaches(parent, &record.name)
        {
            return Err(RegistryError::Cycle {
                name: record.name.clone(),
                parent: parent.clone(),
            });
        }

        tracing::debug!(
            name = %record.name,
            parent = record.parent.as_ref().map(TypeName::as_str),
            members = record.members.len(),
            "Registered class"
        );
        self.types.insert(record.name.clone(), record);
        Ok(())
    }

    /// Register a class and assert that it implements `interfaces`.
    ///
    /// On failure nothing stays registered and the conformance error is
    /// returned inside [`RegistryError::Conformance`].
    pub fn register_implementing(
        &mut self,
        record: ClassRecord,
        interfaces: &[InterfaceDefinition],
        checker: &ConformanceChecker,
    ) -> Result<(), RegistryError> {
        let name = record.name.clone();
        self.register(record)?;

        let outcome = match self.get(name.as_str()) {
            Some(view) => checker.check(view, interfaces),
            None => Ok(()),
        };
        if let Err(source) = outcome {
            self.types.remove(&name);
            return Err(RegistryError::Conformance { name, source });
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<RegisteredType<'_>> {
        self.types.get(name).map(|record| RegisteredType {
            registry: self,
            record,
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.keys()
    }

    /// Whether following registered parent links from `start` arrives at `target`.
    fn reaches(&self, start: &TypeName, target: &TypeName) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(start);
        while let Some(name) = current {
            if name == target {
                return true;
            }
            if !visited.insert(name) {
                return false;
            }
            current = self.types.get(name).and_then(ClassRecord::parent);
        }
        false
    }
}

/// A registered class viewed as a [`Candidate`].
#[derive(Debug, Clone, Copy)]
pub struct RegisteredType<'r> {
    registry: &'r TypeRegistry,
    record: &'r ClassRecord,
}

impl<'r> RegisteredType<'r> {
    #[must_use]
    pub fn name(&self) -> &'r TypeName {
        &self.record.name
    }

    #[must_use]
    pub fn record(&self) -> &'r ClassRecord {
        self.record
    }
}

impl Candidate for RegisteredType<'_> {
    fn display_name(&self) -> Option<&str> {
        Some(self.record.name.as_str())
    }

    fn own_member(&self, name: &str) -> Option<MemberKind> {
        self.record.members.get(name)
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.record.parent.as_ref()?;
        let found = self.registry.get(parent.as_str());
        if found.is_none() {
            tracing::debug!(
                name = %self.record.name,
                parent = %parent,
                "Parent not registered; ancestor chain ends here"
            );
        }
        found
    }
}
