//! RESP decoder
//!
//! Renders a server reply for display. Decoding is best-effort and never
//! fails: malformed input renders as `(invalid input)`, `(incomplete)` or
//! `(unknown)` after the type tag so the REPL keeps running.
//!
//! ## Rendering
//! ```text
//! +OK\r\n                      (string) OK
//! -ERR bad\r\n                 (error) ERR bad
//! :42\r\n                      (integer) 42
//! $5\r\nhello\r\n              (string) hello
//! $-1\r\n                      (string) null
//! *2\r\n$1\r\na\r\n$-1\r\n     (array) ["a", null]
//! #t\r\n                       (boolean) true
//! ```

use std::borrow::Cow;

const INVALID: &str = "(invalid input)";
const INCOMPLETE: &str = "(incomplete)";
const UNKNOWN: &str = "(unknown)";

/// Render any reply, dispatching on the first byte
pub fn decode(input: &[u8]) -> String {
    let Some(&prefix) = input.first() else {
        return "(null)".to_string();
    };

    match prefix {
        b'+' => decode_simple_string(input),
        b'-' => decode_error(input),
        b':' => decode_integer(input),
        b'$' => decode_bulk_string(input),
        b'*' => decode_array(input),
        b'#' => decode_boolean(input),
        _ => UNKNOWN.to_string(),
    }
}

/// `+<text>\r\n` → `(string) <text>`
pub fn decode_simple_string(input: &[u8]) -> String {
    decode_line("(string)", input)
}

/// `-<text>\r\n` → `(error) <text>`
pub fn decode_error(input: &[u8]) -> String {
    decode_line("(error)", input)
}

/// `:<n>\r\n` → `(integer) <n>`
pub fn decode_integer(input: &[u8]) -> String {
    decode_line("(integer)", input)
}

/// `#t\r\n` / `#f\r\n` → `(boolean) true` / `(boolean) false`
pub fn decode_boolean(input: &[u8]) -> String {
    match input.get(1) {
        Some(b't') => "(boolean) true".to_string(),
        Some(b'f') => "(boolean) false".to_string(),
        _ => format!("(boolean) {}", INVALID),
    }
}

/// `$<len>\r\n<data>\r\n` → `(string) <data>`; `$-1` → `(string) null`
pub fn decode_bulk_string(input: &[u8]) -> String {
    let Some(len_end) = find_crlf(input, 1) else {
        return format!("(string) {}", INVALID);
    };

    match parse_length(&input[1..len_end]) {
        Some(Length::Null) => "(string) null".to_string(),
        Some(Length::Bytes(len)) => {
            match payload(input, len_end + 2, len) {
                Ok(data) => format!("(string) {}", text(data)),
                Err(problem) => format!("(string) {}", problem),
            }
        }
        None => format!("(string) {}", INVALID),
    }
}

/// `*<count>\r\n` followed by bulk strings → `(array) ["a", "b", null]`.
///
/// Only bulk string elements are understood. Any other element type
/// renders `(unknown)` and stops the array there.
pub fn decode_array(input: &[u8]) -> String {
    let Some(count_end) = find_crlf(input, 1) else {
        return format!("(array) {}", INVALID);
    };

    let count = match parse_length(&input[1..count_end]) {
        Some(Length::Bytes(count)) => count,
        Some(Length::Null) => return "(array) null".to_string(),
        None => return format!("(array) {}", INVALID),
    };

    let mut out = String::from("(array) [");
    let mut pos = count_end + 2;

    for i in 0..count {
        if i > 0 {
            out.push_str(", ");
        }

        match input.get(pos) {
            None => {
                out.push_str(INCOMPLETE);
                break;
            }
            Some(b'$') => {}
            Some(_) => {
                out.push_str(UNKNOWN);
                break;
            }
        }

        let Some(len_end) = find_crlf(input, pos + 1) else {
            out.push_str(INVALID);
            break;
        };
        let start = len_end + 2;

        match parse_length(&input[pos + 1..len_end]) {
            Some(Length::Null) => {
                out.push_str("null");
                pos = start;
            }
            Some(Length::Bytes(len)) => match payload(input, start, len) {
                Ok(data) => {
                    out.push('"');
                    out.push_str(&text(data));
                    out.push('"');
                    pos = start + len + 2;
                }
                Err(problem) => {
                    out.push_str(problem);
                    break;
                }
            },
            None => {
                out.push_str(INVALID);
                break;
            }
        }
    }

    out.push(']');
    out
}

// =============================================================================
// Helpers
// =============================================================================

enum Length {
    Null,
    Bytes(usize),
}

/// `-1` is null; other negatives and non-numbers are invalid
fn parse_length(field: &[u8]) -> Option<Length> {
    let n: i64 = std::str::from_utf8(field).ok()?.parse().ok()?;
    match n {
        -1 => Some(Length::Null),
        n if n >= 0 => usize::try_from(n).ok().map(Length::Bytes),
        _ => None,
    }
}

fn decode_line(tag: &str, input: &[u8]) -> String {
    match find_crlf(input, 1) {
        Some(end) => format!("{} {}", tag, text(&input[1..end])),
        None => format!("{} {}", tag, INVALID),
    }
}

/// The `len` bytes at `start`, which must be followed by `\r\n`.
///
/// Missing bytes (including a cut-off terminator) are incomplete; a
/// terminator that is present but wrong is invalid.
fn payload(input: &[u8], start: usize, len: usize) -> Result<&[u8], &'static str> {
    let end = start.checked_add(len).ok_or(INCOMPLETE)?;
    let data = input.get(start..end).ok_or(INCOMPLETE)?;
    let tail = &input[end..];

    if tail.starts_with(b"\r\n") {
        Ok(data)
    } else if tail.len() < 2 && b"\r\n".starts_with(tail) {
        Err(INCOMPLETE)
    } else {
        Err(INVALID)
    }
}

fn find_crlf(input: &[u8], from: usize) -> Option<usize> {
    input
        .get(from..)?
        .windows(2)
        .position(|w| w == b"\r\n")
        .map(|p| p + from)
}

fn text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
