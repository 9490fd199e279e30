//! Named, append-only collections of method signatures.

use serde::{Deserialize, Serialize};

use crate::label::TypeLabel;
use crate::signature::MethodSignature;

#[derive(Deserialize)]
struct RawInterface {
    name: String,
    #[serde(default)]
    methods: Vec<MethodSignature>,
}

/// A contract: an interface name plus the methods a conforming class must expose.
///
/// # Invariants
///
/// - `methods` keeps insertion order and never shrinks. The only mutation is
///   [`define_method`](Self::define_method), which appends.
/// - Duplicate method names are kept as separate entries.
///
/// Neither the interface name nor the method names are validated; they are
/// only used to look members up and to describe failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInterface")]
pub struct InterfaceDefinition {
    name: String,
    methods: Vec<MethodSignature>,
}

impl InterfaceDefinition {
    /// An interface with no methods yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// An interface seeded with `signatures`, appended in order.
    #[must_use]
    pub fn with_methods(
        name: impl Into<String>,
        signatures: impl IntoIterator<Item = MethodSignature>,
    ) -> Self {
        let mut iface = Self::new(name);
        for sig in signatures {
            iface.push(sig);
        }
        iface
    }

    /// Append a required method.
    pub fn define_method<I, L>(
        &mut self,
        method_name: impl Into<String>,
        arg_types: I,
        ret_type: impl Into<TypeLabel>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = L>,
        L: Into<TypeLabel>,
    {
        self.push(MethodSignature::new(method_name, arg_types, ret_type));
        self
    }

    fn push(&mut self, sig: MethodSignature) {
        self.methods.push(sig);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    /// First signature registered under `method_name`.
    #[must_use]
    pub fn method(&self, method_name: &str) -> Option<&MethodSignature> {
        self.methods
            .iter()
            .find(|sig| sig.method_name() == method_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl From<RawInterface> for InterfaceDefinition {
    fn from(raw: RawInterface) -> Self {
        Self::with_methods(raw.name, raw.methods)
    }
}
