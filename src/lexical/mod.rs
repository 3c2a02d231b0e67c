//! The lexical module turns raw text and a token specification into a stream of located
//! tokens.

pub mod catalog;

pub mod matcher;

pub mod token;

pub mod token_stream;

mod error;
pub use error::{DuplicateTokenKind, Error, InvalidPattern};
