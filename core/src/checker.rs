//! Walks a candidate's ancestor chain to check it against interfaces.

use conform_types::{InterfaceDefinition, MemberKind, MethodSignature};

use crate::candidate::Candidate;
use crate::errors::{
    ConformanceError, ConformanceReport, UnimplementedMethodError, UnmetReason, candidate_label,
};

/// Levels visited per lookup before giving up on a chain.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How [`ConformanceChecker::check`] reports violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerifyMode {
    /// Stop at the first unmet requirement.
    #[default]
    FailFast,
    /// Check everything and report every unmet requirement.
    CollectAll,
}

impl VerifyMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailFast => "fail-fast",
            Self::CollectAll => "collect-all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyOptions {
    max_depth: usize,
    mode: VerifyMode,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            mode: VerifyMode::FailFast,
        }
    }
}

impl VerifyOptions {
    /// Limit on levels visited per method, counting the candidate itself.
    /// Clamped to at least 1 so the candidate is always inspected.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: VerifyMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn mode(&self) -> VerifyMode {
        self.mode
    }
}

/// Outcome of looking one method name up a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found a callable member; `depth` 0 is the candidate itself.
    Satisfied { depth: usize },
    Unmet(UnmetReason),
}

impl Resolution {
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }
}

/// Checks candidates against interfaces.
///
/// Holds only its options; every call is an independent read-only walk, so
/// one checker can be shared freely and repeated calls give identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConformanceChecker {
    options: VerifyOptions,
}

impl ConformanceChecker {
    #[must_use]
    pub const fn new(options: VerifyOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &VerifyOptions {
        &self.options
    }

    /// Find the most derived member named `method_name`.
    ///
    /// The nearest level that declares the name decides: a method satisfies the
    /// requirement, anything else fails it even if a further ancestor has a
    /// method of that name.
    pub fn resolve<C: Candidate>(&self, candidate: C, method_name: &str) -> Resolution {
        let limit = self.options.max_depth;
        let mut current = Some(candidate.clone());
        let mut depth = 0;

        while let Some(level) = current {
            if depth == limit {
                tracing::warn!(
                    candidate = %candidate_label(candidate.display_name()),
                    method = method_name,
                    limit,
                    "Ancestor chain exceeded depth limit; treating method as unimplemented"
                );
                return Resolution::Unmet(UnmetReason::DepthExceeded { limit });
            }

            match level.own_member(method_name) {
                Some(MemberKind::Method) => return Resolution::Satisfied { depth },
                Some(MemberKind::Field) => {
                    tracing::trace!(
                        method = method_name,
                        depth,
                        "Member found but not callable"
                    );
                    return Resolution::Unmet(UnmetReason::NotCallable);
                }
                None => {}
            }

            current = level.parent();
            depth += 1;
        }

        Resolution::Unmet(UnmetReason::Missing)
    }

    /// Fail on the first method of the first interface the candidate does not
    /// implement. Interfaces are checked in the given order, methods in
    /// definition order.
    pub fn verify<C: Candidate>(
        &self,
        candidate: C,
        interfaces: &[InterfaceDefinition],
    ) -> Result<(), UnimplementedMethodError> {
        tracing::debug!(
            candidate = %candidate_label(candidate.display_name()),
            interfaces = interfaces.len(),
            "Verifying conformance"
        );

        for iface in interfaces {
            for sig in iface.methods() {
                if let Some(err) = self.unmet(&candidate, iface, sig) {
                    tracing::debug!(%err, "Conformance check failed");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Like [`verify`](Self::verify), but keeps going and reports every unmet
    /// requirement.
    pub fn verify_all<C: Candidate>(
        &self,
        candidate: C,
        interfaces: &[InterfaceDefinition],
    ) -> Result<(), ConformanceReport> {
        let violations: Vec<_> = interfaces
            .iter()
            .flat_map(|iface| iface.methods().iter().map(move |sig| (iface, sig)))
            .filter_map(|(iface, sig)| self.unmet(&candidate, iface, sig))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                candidate = %candidate_label(candidate.display_name()),
                violations = violations.len(),
                "Conformance check failed"
            );
            Err(ConformanceReport::new(violations))
        }
    }

    /// Run [`verify`](Self::verify) or [`verify_all`](Self::verify_all)
    /// depending on the configured mode.
    pub fn check<C: Candidate>(
        &self,
        candidate: C,
        interfaces: &[InterfaceDefinition],
    ) -> Result<(), ConformanceError> {
        match self.options.mode {
            VerifyMode::FailFast => self.verify(candidate, interfaces)?,
            VerifyMode::CollectAll => self.verify_all(candidate, interfaces)?,
        }
        Ok(())
    }

    fn unmet<C: Candidate>(
        &self,
        candidate: &C,
        iface: &InterfaceDefinition,
        sig: &MethodSignature,
    ) -> Option<UnimplementedMethodError> {
        match self.resolve(candidate.clone(), sig.method_name()) {
            Resolution::Satisfied { depth } => {
                tracing::trace!(
                    interface = iface.name(),
                    method = sig.method_name(),
                    depth,
                    "Method satisfied"
                );
                None
            }
            Resolution::Unmet(reason) => Some(UnimplementedMethodError::new(
                candidate.display_name(),
                iface.name(),
                sig,
                reason,
            )),
        }
    }
}

/// [`ConformanceChecker::verify`] with default options.
pub fn verify<C: Candidate>(
    candidate: C,
    interfaces: &[InterfaceDefinition],
) -> Result<(), UnimplementedMethodError> {
    ConformanceChecker::default().verify(candidate, interfaces)
}

/// [`ConformanceChecker::verify_all`] with default options.
pub fn verify_all<C: Candidate>(
    candidate: C,
    interfaces: &[InterfaceDefinition],
) -> Result<(), ConformanceReport> {
    ConformanceChecker::default().verify_all(candidate, interfaces)
}
