//! Input tokenizer
//!
//! Splits a raw REPL line into raw tokens in a single left-to-right pass.
//!
//! ## Rules
//! - Whitespace outside quotes and brackets separates tokens
//! - `"..."` is one token; the quotes stay in the raw token text
//! - `[...]` is one token, nesting tracked by depth; commas and
//!   whitespace inside do not split
//! - An unclosed quote or bracket is flushed as the last token

/// A classified raw token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Unquoted text, type-sniffed later (integer, boolean or string)
    Scalar(String),

    /// Contents of a `"..."` literal with the quotes removed
    Quoted(String),

    /// Elements of a `[...]` literal, each classified recursively
    Array(Vec<Token>),
}

impl Token {
    /// Classify a raw token produced by `tokenize` or `parse_array`
    pub fn classify(raw: &str) -> Token {
        if let Some(inner) = strip_quotes(raw) {
            return Token::Quoted(inner.to_string());
        }
        if is_array(raw) {
            let elements = parse_array(raw).iter().map(|e| Token::classify(e)).collect();
            return Token::Array(elements);
        }
        Token::Scalar(raw.to_string())
    }
}

/// Split `input` into raw tokens
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;
    let mut depth = 0usize;

    for c in input.chars() {
        match c {
            '"' if !in_quotes => {
                if depth == 0 {
                    flush(&mut tokens, &mut token);
                }
                in_quotes = true;
                token.push(c);
            }
            '"' => {
                token.push(c);
                in_quotes = false;
                if depth == 0 {
                    flush(&mut tokens, &mut token);
                }
            }
            '[' if !in_quotes => {
                if depth == 0 {
                    flush(&mut tokens, &mut token);
                }
                depth += 1;
                token.push(c);
            }
            ']' if !in_quotes && depth > 0 => {
                token.push(c);
                depth -= 1;
                if depth == 0 {
                    flush(&mut tokens, &mut token);
                }
            }
            c if c.is_whitespace() && !in_quotes && depth == 0 => {
                flush(&mut tokens, &mut token);
            }
            c => token.push(c),
        }
    }

    flush(&mut tokens, &mut token);
    tokens
}

/// Split the body of an array literal into raw element strings.
///
/// Returns an empty vector both for `[]` and for input that is not
/// bracketed at all; callers check `is_array` first when the difference
/// matters.
pub fn parse_array(literal: &str) -> Vec<String> {
    let mut elements = Vec::new();
    if !is_array(literal) {
        return elements;
    }

    let content = &literal[1..literal.len() - 1];
    let mut element = String::new();
    let mut in_quotes = false;
    let mut depth = 0usize;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                element.push(c);
            }
            '[' if !in_quotes => {
                depth += 1;
                element.push(c);
            }
            ']' if !in_quotes && depth > 0 => {
                depth -= 1;
                element.push(c);
            }
            ',' if !in_quotes && depth == 0 => {
                elements.push(trim_horizontal(&element).to_string());
                element.clear();
            }
            c => element.push(c),
        }
    }

    if !element.is_empty() {
        elements.push(trim_horizontal(&element).to_string());
    }

    elements
}

/// True when `token` is wrapped in `[` and `]`
pub fn is_array(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('[') && token.ends_with(']')
}

/// Inner text of a `"..."` token, or `None` if it is not quoted
pub fn strip_quotes(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn flush(tokens: &mut Vec<String>, token: &mut String) {
    if !token.is_empty() {
        tokens.push(std::mem::take(token));
    }
}

// Spaces and tabs only; other whitespace is element content.
fn trim_horizontal(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}
