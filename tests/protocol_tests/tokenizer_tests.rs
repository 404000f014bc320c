//! Tests for the input tokenizer and array-literal parser
//!
//! These tests verify:
//! - Whitespace splitting and collapsing
//! - Quoted regions kept whole, quotes retained
//! - Bracketed (nested) array literals kept whole
//! - Lenient flushing of unclosed quotes/brackets
//! - Array literal element splitting and trimming

use kvcli::protocol::{parse_array, strip_quotes, tokenize, Token};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Whitespace Tests
// =============================================================================

#[test]
fn test_tokenize_simple_command() {
    assert_eq!(tokenize("set key value"), strings(&["set", "key", "value"]));
}

#[test]
fn test_tokenize_empty_line() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t  ").is_empty());
}

#[test]
fn test_tokenize_collapses_whitespace_runs() {
    assert_eq!(
        tokenize("  get\t\t  key   "),
        strings(&["get", "key"])
    );
}

// =============================================================================
// Quoting Tests
// =============================================================================

#[test]
fn test_tokenize_quoted_string_keeps_quotes() {
    assert_eq!(
        tokenize("set key \"hello world\""),
        strings(&["set", "key", "\"hello world\""])
    );
}

#[test]
fn test_tokenize_empty_quoted_string() {
    let tokens = tokenize("set key \"\"");
    assert_eq!(tokens, strings(&["set", "key", "\"\""]));
    assert_eq!(tokens[2].len(), 2);
}

#[test]
fn test_tokenize_quote_splits_adjacent_text() {
    assert_eq!(tokenize("abc\"d e\"fg"), strings(&["abc", "\"d e\"", "fg"]));
}

#[test]
fn test_tokenize_brackets_inside_quotes_are_text() {
    assert_eq!(tokenize("echo \"[a b]\""), strings(&["echo", "\"[a b]\""]));
}

#[test]
fn test_tokenize_unclosed_quote_is_flushed() {
    assert_eq!(
        tokenize("set key \"unterminated value"),
        strings(&["set", "key", "\"unterminated value"])
    );
}

// =============================================================================
// Array Literal Tests
// =============================================================================

#[test]
fn test_tokenize_array_literal() {
    assert_eq!(
        tokenize("rpush list [1, 2, \"three four\"]"),
        strings(&["rpush", "list", "[1, 2, \"three four\"]"])
    );
}

#[test]
fn test_tokenize_nested_array_literal() {
    assert_eq!(
        tokenize("cmd [a, [b, c], d] tail"),
        strings(&["cmd", "[a, [b, c], d]", "tail"])
    );
}

#[test]
fn test_tokenize_bracket_splits_adjacent_text() {
    assert_eq!(tokenize("x[1,2]y"), strings(&["x", "[1,2]", "y"]));
}

#[test]
fn test_tokenize_quote_then_bracket_not_merged() {
    assert_eq!(tokenize("\"a\"[b]"), strings(&["\"a\"", "[b]"]));
}

#[test]
fn test_tokenize_unclosed_bracket_is_flushed() {
    assert_eq!(tokenize("cmd [1, 2"), strings(&["cmd", "[1, 2"]));
}

#[test]
fn test_tokenize_stray_closing_bracket_is_text() {
    assert_eq!(tokenize("a] b"), strings(&["a]", "b"]));
}

// =============================================================================
// parse_array Tests
// =============================================================================

#[test]
fn test_parse_array_trims_elements() {
    assert_eq!(
        parse_array("[1, 2, \"three\"]"),
        strings(&["1", "2", "\"three\""])
    );
}

#[test]
fn test_parse_array_trims_tabs() {
    assert_eq!(parse_array("[\ta ,\tb\t]"), strings(&["a", "b"]));
}

#[test]
fn test_parse_array_commas_in_quotes_and_nested() {
    assert_eq!(
        parse_array("[\"a, b\", [1, 2], c]"),
        strings(&["\"a, b\"", "[1, 2]", "c"])
    );
}

#[test]
fn test_parse_array_empty_and_non_array() {
    // Both collapse to the same empty result
    assert!(parse_array("[]").is_empty());
    assert!(parse_array("not an array").is_empty());
    assert!(parse_array("[unterminated").is_empty());
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_classify_tokens() {
    assert_eq!(Token::classify("42"), Token::Scalar("42".to_string()));
    assert_eq!(Token::classify("\"a b\""), Token::Quoted("a b".to_string()));
    assert_eq!(
        Token::classify("[x, \"y\", [1]]"),
        Token::Array(vec![
            Token::Scalar("x".to_string()),
            Token::Quoted("y".to_string()),
            Token::Array(vec![Token::Scalar("1".to_string())]),
        ])
    );
}

#[test]
fn test_strip_quotes() {
    assert_eq!(strip_quotes("\"abc\""), Some("abc"));
    assert_eq!(strip_quotes("\"\""), Some(""));
    assert_eq!(strip_quotes("\""), None);
    assert_eq!(strip_quotes("abc"), None);
}
