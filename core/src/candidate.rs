//! The read-only view the checker needs of a class.

use conform_types::MemberKind;

/// A class whose members and ancestors can be inspected at runtime.
///
/// Implementations answer for one level of the hierarchy at a time:
/// [`own_member`](Self::own_member) must not consult ancestors, the checker
/// walks [`parent`](Self::parent) itself. Handles are expected to be cheap to
/// clone (references or small views), since the walk clones the starting
/// candidate.
pub trait Candidate: Clone {
    /// Name used in failure messages, if the class has one.
    fn display_name(&self) -> Option<&str>;

    /// The member declared directly on this level under `name`.
    fn own_member(&self, name: &str) -> Option<MemberKind>;

    /// The next, less derived, link in the ancestor chain.
    fn parent(&self) -> Option<Self>;
}
