use proptest::prelude::*;

use printloop::lexer::{
    formatter::{BasicFormatter, LineFormatter, ToFormatter, TokenFormatter},
    Cursor, Lexer, Span, SpanIndex, SpanLength, TokenKind,
};

fn check(input: &str, expected: &str, test_name: &str) {
    let scanner = Lexer::new(input);
    let formatter: BasicFormatter = scanner.create_formatter();
    let mut buffer = String::new();
    for token in scanner {
        buffer.push_str(&formatter.format(&token));
        buffer.push('\n');
    }
    buffer.push_str(&formatter.format_eof());

    assert_eq!(buffer, expected, "Failed the test {test_name}");
}

#[test]
fn smoke_test() {
    check("", "EOF", "smoke");
}

#[test]
fn test_whitespace_only() {
    check(" \t\n\r\n  ", "EOF", "whitespace");
}

#[test]
fn test_keywords_and_words() {
    check(
        "PROGRAM FOR i FROM 1 TO -3 PRINTLN i END END",
        "KEYWORD PROGRAM\n\
         KEYWORD FOR\n\
         WORD i\n\
         KEYWORD FROM\n\
         WORD 1\n\
         KEYWORD TO\n\
         WORD -3\n\
         KEYWORD PRINTLN\n\
         WORD i\n\
         KEYWORD END\n\
         KEYWORD END\n\
         EOF",
        "keywords",
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    check(
        "program Println end",
        "WORD program\nWORD Println\nWORD end\nEOF",
        "case",
    );
}

#[test]
fn test_punctuation_stays_inside_words() {
    check(
        "start... i-j \"quoted words\"",
        "WORD start...\nWORD i-j\nWORD \"quoted\nWORD words\"\nEOF",
        "punctuation",
    );
}

#[test]
fn test_line_formatter() {
    let input = "PROGRAM\n  PRINTLN hi\nEND\n";
    let scanner = Lexer::new(input);
    let formatter: LineFormatter = scanner.create_formatter();
    let lines: Vec<String> = scanner.map(|token| formatter.format(&token)).collect();
    assert_eq!(
        lines,
        vec![
            "(1) KEYWORD PROGRAM",
            "(2) KEYWORD PRINTLN",
            "(2) WORD hi",
            "(3) KEYWORD END",
        ]
    );
    assert_eq!(formatter.format_eof(), "(4) EOF");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_spans_address_offsets_past_four_gib() {
    let offset = u32::MAX as usize + 10;
    let span = Span {
        start: SpanIndex::from(offset),
        length: SpanLength::from(offset),
    };
    assert_eq!(span.start.to_usize(), offset);
    assert_eq!(usize::from(span.length), offset);
    assert_eq!(span.range(), offset..2 * offset);
    assert_eq!(span.end().to_usize(), 2 * offset);
}

#[test]
fn test_spans_point_into_source() {
    let input = "  PRINTLN\tnaïve  ";
    let mut scanner = Lexer::new(input);
    let first = scanner.next_token().expect("Two tokens in input");
    let second = scanner.next_token().expect("Two tokens in input");
    assert_eq!(scanner.next_token(), None);
    assert_eq!(scanner.get_lexeme(&first.span), Some("PRINTLN"));
    assert_eq!(scanner.get_lexeme(&second.span), Some("naïve"));
    assert_eq!(first.kind, TokenKind::KeywordPrintln);
    assert_eq!(second.kind, TokenKind::Word);
    assert_eq!(scanner.eof_span().range(), input.len()..input.len());
}

#[test]
fn test_cursor_starts_without_current_token() {
    let cursor = Cursor::new("PROGRAM END");
    assert_eq!(cursor.current(), None);
    assert!(!cursor.matches("PROGRAM"));
}

#[test]
fn test_cursor_advances_and_matches() {
    let mut cursor = Cursor::new("PROGRAM Program");

    let first = cursor.advance().expect("First token");
    assert_eq!(cursor.current(), Some(first));
    assert!(cursor.matches("PROGRAM"));
    assert!(cursor.is_at(TokenKind::KeywordProgram));
    assert!(!cursor.matches("PROGRAM "));

    cursor.advance();
    assert_eq!(cursor.current_lexeme(), Some("Program"));
    assert!(!cursor.matches("PROGRAM"));
    assert!(!cursor.is_at(TokenKind::KeywordProgram));
    assert!(!cursor.is_at(TokenKind::Word));

    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.current(), None);
    assert!(!cursor.matches("Program"));

    // Stays exhausted.
    assert_eq!(cursor.advance(), None);
}

fn keyword_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("PROGRAM".to_string()),
        Just("END".to_string()),
        Just("FOR".to_string()),
        Just("FROM".to_string()),
        Just("TO".to_string()),
        Just("PRINTLN".to_string()),
    ]
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.+-]{1,10}".prop_map(|s: String| s)
}

fn separator_strategy() -> impl Strategy<Value = String> {
    "[ \t\n\r]{1,4}".prop_map(|s: String| s)
}

fn token_sequence_strategy() -> impl Strategy<Value = Vec<String>> {
    const MIN_TOKEN_COUNT: usize = 0;
    const MAX_TOKEN_COUNT: usize = 100;
    prop::collection::vec(
        prop_oneof![keyword_strategy(), word_strategy()],
        MIN_TOKEN_COUNT..MAX_TOKEN_COUNT,
    )
}

proptest! {
    #[test]
    fn lexer_yields_one_token_per_word(
        words in token_sequence_strategy(),
        separators in prop::collection::vec(separator_strategy(), 101),
    ) {
        let mut input = separators[0].clone();
        for (word, separator) in words.iter().zip(separators[1..].iter()) {
            input.push_str(word);
            input.push_str(separator);
        }

        let scanner = Lexer::new(&input);
        let lexemes: Vec<&str> = scanner
            .clone()
            .map(|token| scanner.get_lexeme(&token.span).expect("Span is in bounds"))
            .collect();
        prop_assert_eq!(lexemes, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn keywords_are_classified(keyword in keyword_strategy()) {
        let kind = TokenKind::classify(&keyword);
        prop_assert_eq!(kind.keyword(), Some(keyword.as_str()));
    }

    #[test]
    fn words_are_not_keywords(word in "[a-z0-9]{1,10}") {
        prop_assert_eq!(TokenKind::classify(&word), TokenKind::Word);
    }
}
