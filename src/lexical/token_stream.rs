//! Contains the [`Scanner`] engine and the [`TokenStream`] wrapper built on top of it.

use std::{fmt::Debug, sync::Arc};

use derive_more::Deref;
use getset::CopyGetters;

use crate::base::source_text::{SourceText, Span};

use super::{matcher::TokenSpecification, token::Token};

/// Drives a cursor across the source text, yielding one token per demand.
///
/// At each position the matchers are consulted in declaration order and the first success
/// wins; no token is computed before it is demanded. Input that no rule matches is dropped
/// one character at a time without producing anything — callers that need full coverage must
/// declare a catch-all rule.
#[derive(Debug, Clone, CopyGetters)]
pub struct Scanner<'a, K> {
    source: Arc<SourceText>,
    specification: &'a TokenSpecification<K>,

    /// Get the current byte offset of the scan cursor.
    #[get_copy = "pub"]
    cursor: usize,
}

impl<'a, K> Scanner<'a, K> {
    /// Creates a scanner over the given source, starting at the beginning of the text.
    #[must_use]
    pub fn new(source: &Arc<SourceText>, specification: &'a TokenSpecification<K>) -> Self {
        Self {
            source: Arc::clone(source),
            specification,
            cursor: 0,
        }
    }
}

impl<K: Clone> Iterator for Scanner<'_, K> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.source.content().len() {
            let remaining = &self.source.content()[self.cursor..];

            let matched = self.specification.iter().find_map(|(kind, matcher)| {
                matcher
                    .matched_len(remaining)
                    .map(|length| (kind.clone(), length))
            });

            let Some((kind, length)) = matched else {
                // no rule matched, drop a single character and try again
                tracing::trace!(offset = self.cursor, "skipping unmatched character");
                self.cursor += char_length_at(remaining);
                continue;
            };

            let start = self.cursor;
            let span = Span::new(Arc::clone(&self.source), start, start + length)
                .expect("matcher reported a length outside a char boundary");

            // a zero-length match would stall the cursor, force progress by one character
            self.cursor = start
                + if length == 0 {
                    char_length_at(remaining)
                } else {
                    length
                };

            return Some(Token { kind, span });
        }

        None
    }
}

/// Byte length of the first character of the remaining text.
fn char_length_at(remaining: &str) -> usize {
    remaining.chars().next().map_or(1, char::len_utf8)
}

/// Is a stateful, closeable token source with consumer-side filtering by token kind.
///
/// Two consumption paths exist: [`Self::next_token`] discards caller-ignored kinds, while
/// the [`Iterator`] implementation yields every remaining token unfiltered. Both resume from
/// the current position, forward only, and both permanently yield nothing once the stream is
/// closed. A stream is single-consumer.
#[derive(Debug, CopyGetters)]
pub struct TokenStream<'a, K> {
    scanner: Scanner<'a, K>,

    /// Get whether the stream has been closed.
    #[get_copy = "pub"]
    closed: bool,
}

impl<'a, K> TokenStream<'a, K> {
    /// Binds a fresh scan over the given source. No tokens are produced until demanded.
    #[must_use]
    pub fn new(source: &Arc<SourceText>, specification: &'a TokenSpecification<K>) -> Self {
        Self {
            scanner: Scanner::new(source, specification),
            closed: false,
        }
    }

    /// Closes the stream, terminating the underlying scan early. Every subsequent pull on
    /// either consumption path yields no further tokens.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl<K: Clone + PartialEq> TokenStream<'_, K> {
    /// Produces the next token whose kind is not in `ignored`.
    ///
    /// Tokens with ignored kinds are pulled and discarded; the relative order of the
    /// remaining tokens is preserved. Returns [`None`] once the underlying scan is exhausted
    /// or the stream has been closed, and keeps returning [`None`] on repeated calls. The
    /// ignore set may differ on every call.
    pub fn next_token(&mut self, ignored: &[K]) -> Option<Token<K>> {
        while let Some(token) = self.next() {
            if !ignored.contains(&token.kind) {
                return Some(token);
            }
        }

        None
    }
}

impl<K: Clone> Iterator for TokenStream<'_, K> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }

        self.scanner.next()
    }
}

/// Is the fully materialized, ordered output of a scan.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct Tokens<K> {
    #[deref]
    tokens: Vec<Token<K>>,
}

impl<K: Debug> Debug for Tokens<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<K: Clone> Tokens<K> {
    /// Eagerly drains the full scan output into an ordered sequence of tokens.
    ///
    /// This is a pure convenience composition: the result equals collecting a fresh
    /// [`Scanner`] over the same inputs.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tokenize(source: &Arc<SourceText>, specification: &TokenSpecification<K>) -> Self {
        let tokens: Vec<_> = Scanner::new(source, specification).collect();

        tracing::debug!("tokenized {} tokens", tokens.len());

        Self { tokens }
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token<K>> {
        self.tokens
    }
}

impl<K> IntoIterator for Tokens<K> {
    type Item = Token<K>;
    type IntoIter = std::vec::IntoIter<Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'t, K> IntoIterator for &'t Tokens<K> {
    type Item = &'t Token<K>;
    type IntoIter = std::slice::Iter<'t, Token<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
