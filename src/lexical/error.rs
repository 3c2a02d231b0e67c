/// Represents an error that occurred while building a token specification.
///
/// Matching itself cannot fail: input that no rule matches is silently skipped, and the end
/// of the token sequence is signaled as an absent value, never as an error.
#[allow(missing_docs)]
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPattern),
    #[error(transparent)]
    DuplicateTokenKind(#[from] DuplicateTokenKind),
}

/// A pattern matcher was built from a malformed regular expression.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct InvalidPattern {
    /// The rejected pattern.
    pub pattern: String,

    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// A token kind was defined more than once within one specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token kind `{kind}` is already defined")]
pub struct DuplicateTokenKind {
    /// The duplicated kind, rendered for display.
    pub kind: String,
}
