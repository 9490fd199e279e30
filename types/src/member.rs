/// What a class exposes under a given member name.
///
/// Only `Method` satisfies a required method. A `Field` with the same name
/// still counts as "present", which stops the ancestor search at that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Method,
    Field,
}

impl MemberKind {
    #[must_use]
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Method)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Field => "field",
        }
    }
}
