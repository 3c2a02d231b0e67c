use std::path::Path;

use scantok::{
    base::{
        source_text::{Location, SourceText},
        Error,
    },
    lexical::{
        catalog::BuiltinMatcher,
        matcher::{Matcher, TokenSpecification},
        token::Token,
        token_stream::{Scanner, Tokens},
    },
};

fn location(line: usize, column: usize) -> Location {
    Location { line, column }
}

#[test]
fn declaration_order_beats_later_rules() {
    let mut spec = TokenSpecification::new();
    spec.define("boolean", "true").unwrap();
    spec.define("word", Matcher::pattern(r"\w+").unwrap())
        .unwrap();

    let tokens = scantok::tokenize("true", &spec);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, "boolean");
    assert_eq!(tokens[0].value(), "true");
}

#[test]
fn words_and_whitespace_with_locations() {
    let mut spec = TokenSpecification::new();
    spec.define("ws", Matcher::pattern(r"\s+").unwrap()).unwrap();
    spec.define("word", Matcher::pattern("[a-z]+").unwrap())
        .unwrap();

    let tokens = scantok::tokenize("a b", &spec);

    let described: Vec<_> = tokens
        .iter()
        .map(|token| (token.kind, token.value().to_string(), token.location()))
        .collect();

    assert_eq!(
        described,
        vec![
            ("word", "a".to_string(), location(1, 1)),
            ("ws", " ".to_string(), location(1, 2)),
            ("word", "b".to_string(), location(1, 3)),
        ]
    );
}

#[test]
fn multiline_catch_all_locations() {
    let mut spec = TokenSpecification::new();
    spec.define("any", Matcher::pattern("(?s).").unwrap())
        .unwrap();

    let tokens = scantok::tokenize("a\nb", &spec);

    let locations: Vec<_> = tokens.iter().map(Token::location).collect();
    assert_eq!(
        locations,
        vec![location(1, 1), location(1, 2), location(2, 1)]
    );
    assert_eq!(tokens[1].value(), "\n");
}

#[test]
fn empty_specification_drops_everything() {
    let spec: TokenSpecification<&str> = TokenSpecification::new();

    assert!(scantok::tokenize("anything at all", &spec).is_empty());
    assert!(scantok::tokenize("", &spec).is_empty());
}

#[test]
fn unmatched_characters_are_silently_skipped() {
    let mut spec = TokenSpecification::new();
    spec.define("word", Matcher::pattern("[a-z]+").unwrap())
        .unwrap();

    let tokens = scantok::tokenize("a b!c", &spec);

    let values: Vec<_> = tokens.iter().map(Token::value).collect();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn eager_and_lazy_scans_agree() {
    let mut spec = TokenSpecification::new();
    spec.define("ws", BuiltinMatcher::Whitespace.matcher())
        .unwrap();
    spec.define("number", BuiltinMatcher::Number.matcher())
        .unwrap();
    spec.define("identifier", BuiltinMatcher::Identifier.matcher())
        .unwrap();

    let source = SourceText::new("x 42 y_z");

    let eager = Tokens::tokenize(&source, &spec);
    let lazy: Vec<_> = Scanner::new(&source, &spec).collect();

    assert_eq!(eager.dissolve(), lazy);
}

#[test]
fn zero_length_matches_still_make_progress() {
    let mut spec = TokenSpecification::new();
    spec.define("empty", Matcher::function(|_| Some(0)))
        .unwrap();

    let source = SourceText::new("ab");
    let tokens: Vec<_> = Scanner::new(&source, &spec).collect();

    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|token| token.value().is_empty()));
    assert_eq!(tokens[0].location(), location(1, 1));
    assert_eq!(tokens[1].location(), location(1, 2));
}

#[test]
fn cursor_advances_across_the_whole_text() {
    let mut spec = TokenSpecification::new();
    spec.define("word", Matcher::pattern("[a-z]+").unwrap())
        .unwrap();

    let text = "ab cd!ef";
    let source = SourceText::new(text);
    let mut scanner = Scanner::new(&source, &spec);

    // spans come in strictly increasing cursor order and never overlap
    let mut seen_end = 0;
    for token in scanner.by_ref() {
        assert!(token.span.start() >= seen_end);
        seen_end = token.span.end();
    }

    // every character was either matched or dropped, none was left unvisited
    assert_eq!(scanner.cursor(), text.len());
}

#[test]
fn function_matcher_escape_hatch() {
    // balanced parentheses are expressible by neither literal nor pattern
    let mut spec = TokenSpecification::new();
    spec.define(
        "parens",
        Matcher::function(|remaining| {
            if !remaining.starts_with('(') {
                return None;
            }

            let mut depth = 0usize;
            for (index, character) in remaining.char_indices() {
                match character {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(index + 1);
                        }
                    }
                    _ => {}
                }
            }

            None
        }),
    )
    .unwrap();

    let tokens = scantok::tokenize("((a)b) rest", &spec);

    assert_eq!(tokens[0].value(), "((a)b)");
    assert_eq!(tokens[0].location(), location(1, 1));
}

#[test]
fn catalog_builtins_scan_a_snippet() {
    let mut spec = TokenSpecification::new();
    for builtin in [
        BuiltinMatcher::Newline,
        BuiltinMatcher::Whitespace,
        BuiltinMatcher::DoubleQuoted,
        BuiltinMatcher::Number,
        BuiltinMatcher::Identifier,
    ] {
        spec.define(builtin.as_str(), builtin.matcher()).unwrap();
    }

    let tokens = scantok::tokenize("x = \"a\\\"b\" + -1_5\nnext", &spec);

    let described: Vec<_> = tokens
        .iter()
        .map(|token| (token.kind, token.value()))
        .collect();

    // `=` and `+` match no rule and are silently dropped
    assert_eq!(
        described,
        vec![
            ("identifier", "x"),
            ("whitespace", " "),
            ("whitespace", " "),
            ("double_quoted", "\"a\\\"b\""),
            ("whitespace", " "),
            ("whitespace", " "),
            ("number", "-1_5"),
            ("newline", "\n"),
            ("identifier", "next"),
        ]
    );
}

#[test]
fn tokenizing_a_file() {
    let mut spec = TokenSpecification::new();
    spec.define("ws", BuiltinMatcher::Whitespace.matcher())
        .unwrap();
    spec.define("string", BuiltinMatcher::DoubleQuoted.matcher())
        .unwrap();
    spec.define("number", BuiltinMatcher::Number.matcher())
        .unwrap();
    spec.define("identifier", BuiltinMatcher::Identifier.matcher())
        .unwrap();

    let path = Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/scanning/sample.txt"
    ));
    let tokens = scantok::tokenize_file(path, &spec).expect("Failed to read sample");

    let words: Vec<_> = tokens
        .iter()
        .filter(|token| token.kind != "ws")
        .map(|token| (token.value(), token.location()))
        .collect();

    assert_eq!(
        words,
        vec![
            ("let", location(1, 1)),
            ("x", location(1, 5)),
            ("10", location(1, 9)),
            ("let", location(2, 1)),
            ("y", location(2, 5)),
            ("\"hi\"", location(2, 9)),
        ]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let spec: TokenSpecification<&str> = TokenSpecification::new();

    let err = scantok::tokenize_file(Path::new("no/such/file.txt"), &spec).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}
