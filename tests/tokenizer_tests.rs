// ABOUTME: Integration tests for the template tokenizer
// ABOUTME: Tests token classification, round-trip reconstruction, and custom patterns

use dotquery::tokenizer::{Token, Tokenizer};

#[test]
fn test_body_without_placeholders_is_one_literal() {
    let tokenizer = Tokenizer::with_defaults();
    let tokens = tokenizer.tokenize("SELECT * FROM artist");

    assert_eq!(
        tokens,
        vec![Token::Literal("SELECT * FROM artist".to_string())]
    );
}

#[test]
fn test_positional_and_named_classification() {
    let tokenizer = Tokenizer::with_defaults();
    let tokens = tokenizer.tokenize("WHERE id = ${1} AND genre = ${genre}");

    assert_eq!(
        tokens,
        vec![
            Token::Literal("WHERE id = ".to_string()),
            Token::Positional(1),
            Token::Literal(" AND genre = ".to_string()),
            Token::Named("genre".to_string()),
        ]
    );
}

#[test]
fn test_named_count_matches_textual_placeholders() {
    let tokenizer = Tokenizer::with_defaults();
    let body = "INSERT INTO artist (name, genre, country) VALUES (${name}, ${genre}, ${country})";
    let tokens = tokenizer.tokenize(body);

    let named = tokens
        .iter()
        .filter(|t| matches!(t, Token::Named(_)))
        .count();
    assert_eq!(named, 3);
}

#[test]
fn test_adjacent_placeholders() {
    let tokenizer = Tokenizer::with_defaults();
    let tokens = tokenizer.tokenize("${name}${genre}");

    assert_eq!(
        tokens,
        vec![
            Token::Named("name".to_string()),
            Token::Named("genre".to_string()),
        ]
    );
}

#[test]
fn test_round_trip_over_varied_bodies() {
    let tokenizer = Tokenizer::with_defaults();
    let bodies = [
        "SELECT * FROM artist",
        "SELECT * FROM artist WHERE id = ${1}",
        "${name}${genre}",
        "SELECT a,\n       b\nFROM t WHERE x = ${ padded } AND y = ${2}",
        "",
    ];

    for body in bodies {
        let tokens = tokenizer.tokenize(body);
        let rebuilt: String = tokens.iter().map(Token::to_source).collect();
        assert_eq!(rebuilt, body, "round trip failed for body {:?}", body);
    }
}

#[test]
fn test_round_trip_normalizes_carriage_returns() {
    let tokenizer = Tokenizer::with_defaults();
    let tokens = tokenizer.tokenize("SELECT 1\r\nFROM t WHERE a = ${1}");
    let rebuilt: String = tokens.iter().map(Token::to_source).collect();

    assert_eq!(rebuilt, "SELECT 1\nFROM t WHERE a = ${1}");
}

#[test]
fn test_custom_placeholder_pattern() {
    let tokenizer = Tokenizer::new(r"%\((\w+)\)", "\n").unwrap();
    let tokens = tokenizer.tokenize("WHERE genre = %(genre) AND id = %(7)");

    assert_eq!(
        tokens,
        vec![
            Token::Literal("WHERE genre = ".to_string()),
            Token::Named("genre".to_string()),
            Token::Literal(" AND id = ".to_string()),
            Token::Positional(7),
        ]
    );
}

#[test]
fn test_invalid_pattern_is_rejected() {
    assert!(Tokenizer::new(r"(${", "\n").is_err());
}
