//! Contains the [`Token`] record produced by the scan engine.

use crate::base::source_text::{Location, Span};

/// Is a labeled, positioned substring recognized by a matcher.
///
/// The value is the exact matched text, not a derived or normalized form. The kind type `K`
/// is caller-defined; string labels and plain enums both work.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<K> {
    /// Is the identifier of the rule that produced this token.
    pub kind: K,

    /// Is the span that makes up the token.
    pub span: Span,
}

impl<K> Token<K> {
    /// Returns the exact matched substring.
    #[must_use]
    pub fn value(&self) -> &str {
        self.span.str()
    }

    /// Returns the 1-based line/column of the first character of the match.
    #[must_use]
    pub fn location(&self) -> Location {
        self.span.start_location()
    }
}
