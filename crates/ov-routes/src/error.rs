use thiserror::Error;

/// Reasons a route table is rejected at construction time.
///
/// Dispatch itself never fails: an unmatched path resolves to the
/// catch-all entry, so these errors only surface while building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("route table has no catch-all `*` entry")]
    MissingWildcard,

    #[error("route table has more than one catch-all `*` entry")]
    DuplicateWildcard,

    #[error("catch-all `*` entry is at position {index} but must be the last of {len} entries")]
    WildcardNotLast { index: usize, len: usize },

    #[error("route `{pattern}` is declared more than once")]
    DuplicatePattern { pattern: String },

    #[error("route `{pattern}` can never match because `{shadowed_by}` is declared before it")]
    ShadowedRoute { pattern: String, shadowed_by: String },
}
