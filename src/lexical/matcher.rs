//! Contains the [`Matcher`] variants and the ordered [`TokenSpecification`].

use std::{fmt::Debug, sync::Arc};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use regex::Regex;

use super::error::{DuplicateTokenKind, Error, InvalidPattern};

/// Signature of a custom matcher function.
///
/// Given the remaining text from the current scan position, returns the byte length of the
/// matched prefix, or [`None`] if the rule declines. A reported length must lie on a char
/// boundary of the remaining text; zero is permitted, but the engine will still advance the
/// cursor past such a match.
pub type MatchFn = dyn Fn(&str) -> Option<usize> + Send + Sync;

/// Is a single named rule that either recognizes a prefix of the remaining text or declines.
///
/// Matchers are pure and deterministic. They only ever see the text from the current scan
/// position onward and report how much of it they match.
#[derive(Clone, From, EnumAsInner)]
pub enum Matcher {
    /// Matches iff the remaining text starts with the exact string.
    Literal(String),

    /// Matches iff the earliest match of the expression starts exactly at the current
    /// position. A match beginning later in the remaining text does not count.
    Pattern(Regex),

    /// Custom matching logic for rules expressible by neither literal nor pattern.
    Function(Arc<MatchFn>),
}

impl Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(&pattern.as_str()).finish(),
            Self::Function(_) => f.debug_tuple("Function").field(&"..").finish(),
        }
    }
}

impl From<&str> for Matcher {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl Matcher {
    /// Creates a matcher for an exact string.
    pub fn literal(literal: impl Into<String>) -> Self {
        Self::Literal(literal.into())
    }

    /// Compiles the given regular expression into a pattern matcher.
    ///
    /// # Errors
    /// - [`Error::InvalidPattern`]: The pattern is not a valid regular expression. This is
    ///   the only point where a malformed pattern surfaces; scanning never encounters it.
    pub fn pattern(pattern: &str) -> Result<Self, Error> {
        Regex::new(pattern).map(Self::Pattern).map_err(|source| {
            InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
            .into()
        })
    }

    /// Wraps custom matching logic, see [`MatchFn`] for the contract.
    pub fn function(function: impl Fn(&str) -> Option<usize> + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(function))
    }

    /// Attempts this matcher against the remaining text, returning the byte length of the
    /// matched prefix.
    #[must_use]
    pub fn matched_len(&self, remaining: &str) -> Option<usize> {
        match self {
            Self::Literal(literal) => remaining
                .starts_with(literal.as_str())
                .then_some(literal.len()),
            Self::Pattern(pattern) => pattern
                .find(remaining)
                .and_then(|found| (found.start() == 0).then_some(found.end())),
            Self::Function(function) => function(remaining),
        }
    }
}

/// Is an ordered mapping from token kinds to matchers.
///
/// Declaration order is precedence order: at a given position the first entry whose matcher
/// succeeds wins, even if a later entry would match a longer or different span. There is no
/// longest-match rule across entries.
#[derive(Debug, Clone)]
pub struct TokenSpecification<K> {
    entries: Vec<(K, Matcher)>,
}

impl<K> Default for TokenSpecification<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> TokenSpecification<K> {
    /// Creates an empty specification. Scanning with it yields no tokens for any text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, (K, Matcher)> {
        self.entries.iter()
    }

    /// Get the number of rules in the specification.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the specification contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Debug + Eq> TokenSpecification<K> {
    /// Appends a rule for the given token kind.
    ///
    /// # Errors
    /// - [`Error::DuplicateTokenKind`]: The kind is already defined in this specification.
    pub fn define(&mut self, kind: K, matcher: impl Into<Matcher>) -> Result<(), Error> {
        if self.entries.iter().any(|(existing, _)| *existing == kind) {
            return Err(DuplicateTokenKind {
                kind: format!("{kind:?}"),
            }
            .into());
        }

        self.entries.push((kind, matcher.into()));
        Ok(())
    }

    /// Get the matcher defined for the given kind.
    #[must_use]
    pub fn get(&self, kind: &K) -> Option<&Matcher> {
        self.entries
            .iter()
            .find_map(|(existing, matcher)| (existing == kind).then_some(matcher))
    }
}
