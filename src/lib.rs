//! A declarative lexical scanner.
//!
//! Raw text plus an ordered [`TokenSpecification`](lexical::matcher::TokenSpecification) of
//! named matchers produce a lazily evaluated sequence of located tokens. At each position
//! the first rule (in declaration order) whose matcher succeeds wins; input that no rule
//! matches is silently dropped one character at a time.
//!
//! ```
//! use scantok::{
//!     base::source_text::SourceText,
//!     lexical::{
//!         matcher::{Matcher, TokenSpecification},
//!         token_stream::TokenStream,
//!     },
//! };
//!
//! # fn main() -> scantok::base::Result<()> {
//! let mut spec = TokenSpecification::new();
//! spec.define("ws", Matcher::pattern(r"\s+")?)?;
//! spec.define("word", Matcher::pattern("[a-z]+")?)?;
//!
//! let source = SourceText::new("a b");
//! let mut stream = TokenStream::new(&source, &spec);
//!
//! let token = stream.next_token(&["ws"]).unwrap();
//! assert_eq!(token.kind, "word");
//! assert_eq!(token.value(), "a");
//! assert_eq!(stream.next_token(&["ws"]).unwrap().value(), "b");
//! assert!(stream.next_token(&[]).is_none());
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::path::Path;

use base::{source_text::SourceText, Result};
use lexical::{matcher::TokenSpecification, token_stream::Tokens};

/// Converts the given text to tokens, eagerly draining the full scan.
#[must_use]
pub fn tokenize<K: Clone>(text: &str, specification: &TokenSpecification<K>) -> Tokens<K> {
    let source = SourceText::new(text);

    Tokens::tokenize(&source, specification)
}

/// Converts the contents of the given file to tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
pub fn tokenize_file<K: Clone>(
    path: &Path,
    specification: &TokenSpecification<K>,
) -> Result<Tokens<K>> {
    let source = SourceText::load(path)?;

    Ok(Tokens::tokenize(&source, specification))
}
