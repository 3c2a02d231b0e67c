//! Ready-made matchers for common token shapes.
//!
//! These are plain data conforming to the matcher contract; the scan engine gives them no
//! special treatment, and a caller may supply an equivalent or richer catalog of its own.
//! Note that [`BuiltinMatcher::Whitespace`] also consumes newlines, so a specification that
//! wants separate newline tokens must declare [`BuiltinMatcher::Newline`] first.

use std::{
    collections::HashMap,
    iter::Peekable,
    str::{Chars, FromStr},
    sync::OnceLock,
};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::matcher::Matcher;

/// Is an enumeration of the pre-built matchers shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum BuiltinMatcher {
    /// A run of alphabetic characters.
    Word,

    /// A Unicode-aware identifier: an underscore or any non-digit character that is not
    /// control, whitespace or ASCII punctuation, followed by more of the same (digits
    /// allowed after the first character).
    Identifier,

    /// A double-quoted string, aware of backslash-escaped terminators.
    DoubleQuoted,

    /// A single-quoted string, aware of backslash-escaped terminators.
    SingleQuoted,

    /// A numeric literal with optional leading sign, underscore separators and an optional
    /// decimal part.
    Number,

    /// A run of whitespace characters, including newlines.
    Whitespace,

    /// A single `\r\n`, `\n` or `\r`.
    Newline,
}

impl std::fmt::Display for BuiltinMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string names no builtin matcher in the [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of builtin matcher.")]
pub struct BuiltinMatcherParseError;

impl FromStr for BuiltinMatcher {
    type Err = BuiltinMatcherParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_BUILTIN_MAP: OnceLock<HashMap<&'static str, BuiltinMatcher>> =
            OnceLock::new();
        let map = STRING_BUILTIN_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for builtin in Self::iter() {
                map.insert(builtin.as_str(), builtin);
            }

            map
        });

        map.get(s).copied().ok_or(BuiltinMatcherParseError)
    }
}

impl BuiltinMatcher {
    /// Gets the name of the builtin matcher as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Identifier => "identifier",
            Self::DoubleQuoted => "double_quoted",
            Self::SingleQuoted => "single_quoted",
            Self::Number => "number",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
        }
    }

    /// Builds the ready-made [`Matcher`] value.
    #[must_use]
    pub fn matcher(self) -> Matcher {
        match self {
            Self::Word => Matcher::function(match_word),
            Self::Identifier => Matcher::function(match_identifier),
            Self::DoubleQuoted => Matcher::function(|remaining| match_quoted(remaining, '"')),
            Self::SingleQuoted => Matcher::function(|remaining| match_quoted(remaining, '\'')),
            Self::Number => Matcher::function(match_number),
            Self::Whitespace => Matcher::function(match_whitespace),
            Self::Newline => Matcher::function(match_newline),
        }
    }
}

/// Sums the byte length of the leading characters for which the predicate holds.
fn walk_while(remaining: &str, predicate: impl Fn(char) -> bool) -> usize {
    remaining
        .chars()
        .take_while(|&character| predicate(character))
        .map(char::len_utf8)
        .sum()
}

fn match_word(remaining: &str) -> Option<usize> {
    let length = walk_while(remaining, char::is_alphabetic);
    (length > 0).then_some(length)
}

/// Checks if the given character is a valid first character of an identifier.
fn is_first_identifier_character(character: char) -> bool {
    character == '_'
        || (!character.is_control()
            && !character.is_whitespace()
            && !character.is_ascii_punctuation()
            && !character.is_ascii_digit())
}

/// Checks if the given character is a valid character of an identifier.
fn is_identifier_character(character: char) -> bool {
    character == '_'
        || (!character.is_control()
            && !character.is_whitespace()
            && !character.is_ascii_punctuation())
}

fn match_identifier(remaining: &str) -> Option<usize> {
    let first = remaining
        .chars()
        .next()
        .filter(|&character| is_first_identifier_character(character))?;

    let rest = walk_while(&remaining[first.len_utf8()..], is_identifier_character);
    Some(first.len_utf8() + rest)
}

/// Matches a string enclosed in the given quote character.
///
/// A backslash escapes the following character, so an escaped quote does not terminate the
/// string. Unterminated input declines instead of matching to the end of the text.
fn match_quoted(remaining: &str, quote: char) -> Option<usize> {
    let mut characters = remaining.char_indices();
    characters.next().filter(|&(_, character)| character == quote)?;

    let mut is_escaped = false;

    for (index, character) in characters {
        if character == '\\' {
            is_escaped = !is_escaped;
        } else if character == quote && !is_escaped {
            return Some(index + character.len_utf8());
        } else {
            is_escaped = false;
        }
    }

    None
}

fn match_number(remaining: &str) -> Option<usize> {
    let mut characters = remaining.chars().peekable();
    let mut length = 0;

    if let Some('+' | '-') = characters.peek() {
        characters.next();
        length += 1;
    }

    let integral = digit_run(&mut characters);
    if integral == 0 {
        return None;
    }
    length += integral;

    // a decimal point counts only when digits follow it
    if characters.peek() == Some(&'.') {
        let mut after_point = characters.clone();
        after_point.next();

        let fractional = digit_run(&mut after_point);
        if fractional > 0 {
            length += 1 + fractional;
        }
    }

    Some(length)
}

/// Consumes a run of ASCII digits with interior underscore separators, returning its byte
/// length. The run must start with a digit.
fn digit_run(characters: &mut Peekable<Chars<'_>>) -> usize {
    let mut length = 0;

    while let Some(&character) = characters.peek() {
        let valid = character.is_ascii_digit() || (character == '_' && length > 0);
        if !valid {
            break;
        }

        characters.next();
        length += 1;
    }

    length
}

fn match_whitespace(remaining: &str) -> Option<usize> {
    let length = walk_while(remaining, char::is_whitespace);
    (length > 0).then_some(length)
}

fn match_newline(remaining: &str) -> Option<usize> {
    if remaining.starts_with("\r\n") {
        Some(2)
    } else if remaining.starts_with('\n') || remaining.starts_with('\r') {
        Some(1)
    } else {
        None
    }
}
