//! RESP encoder
//!
//! Two paths produce wire bytes:
//! - `encode_command` / `encode_raw_command`: every element is a bulk
//!   string, so dispatch is unambiguous whatever the arguments look like
//! - `encode` / `encode_token`: free-form input with type detection
//!   (integers, booleans, quoted strings, array literals)

use super::tokenizer::{strip_quotes, tokenize, Token};
use super::value::RespValue;

// =============================================================================
// Scalar Encoders
// =============================================================================

/// `$<len>\r\n<data>\r\n`
pub fn encode_bulk_string(s: &str) -> String {
    RespValue::bulk(s).encode()
}

/// `$-1\r\n`
pub fn encode_null_bulk_string() -> String {
    RespValue::BulkString(None).encode()
}

/// `+<text>\r\n`
pub fn encode_simple_string(s: &str) -> String {
    RespValue::SimpleString(s.to_string()).encode()
}

/// `-<text>\r\n`
pub fn encode_error(s: &str) -> String {
    RespValue::Error(s.to_string()).encode()
}

/// `:<decimal>\r\n`
pub fn encode_integer(n: i64) -> String {
    RespValue::Integer(n).encode()
}

/// `#t\r\n` or `#f\r\n`
pub fn encode_boolean(b: bool) -> String {
    RespValue::Boolean(b).encode()
}

/// Array of bulk strings
pub fn encode_array<S: AsRef<str>>(elements: &[S]) -> String {
    let values = elements.iter().map(|e| RespValue::bulk(e.as_ref())).collect();
    RespValue::Array(values).encode()
}

// =============================================================================
// Type Detection
// =============================================================================

/// Optional `+`/`-` followed by one or more ASCII digits
pub fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly `true` or `false`
pub fn is_boolean(s: &str) -> bool {
    s == "true" || s == "false"
}

pub use super::tokenizer::is_array;

/// Encode one raw token with its detected type
pub fn encode_token(token: &str) -> String {
    RespValue::from(Token::classify(token)).encode()
}

/// Encode a free-form line as an array of type-detected tokens
pub fn encode(input: &str) -> String {
    let values = tokenize(input)
        .iter()
        .map(|t| RespValue::from(Token::classify(t)))
        .collect();
    RespValue::Array(values).encode()
}

// =============================================================================
// Command Encoders
// =============================================================================

/// Encode `cmd` and `args` as one array of bulk strings
pub fn encode_command<S: AsRef<str>>(cmd: &str, args: &[S]) -> String {
    let mut values = Vec::with_capacity(args.len() + 1);
    values.push(RespValue::bulk(cmd));
    values.extend(args.iter().map(|a| RespValue::bulk(a.as_ref())));
    RespValue::Array(values).encode()
}

/// Tokenize a raw line and encode it as a command.
///
/// Surrounding quotes are removed from each token; no other type
/// detection happens. Returns an empty string when the line has no
/// tokens; that means "nothing to send", not a zero-argument command.
pub fn encode_raw_command(raw: &str) -> String {
    let raw_tokens = tokenize(raw);
    let tokens: Vec<&str> = raw_tokens
        .iter()
        .map(|t| strip_quotes(t).unwrap_or(t.as_str()))
        .collect();
    match tokens.split_first() {
        Some((cmd, args)) => encode_command(cmd, args),
        None => String::new(),
    }
}
