//! RESP value definitions
//!
//! The subset of RESP this client speaks, with wire encoding.

use super::tokenizer::Token;

/// CR-LF line terminator used by every RESP frame
pub const CRLF: &str = "\r\n";

/// A single RESP value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespValue {
    /// `+<text>\r\n`
    SimpleString(String),

    /// `-<text>\r\n`
    Error(String),

    /// `:<decimal>\r\n`
    Integer(i64),

    /// `$<len>\r\n<data>\r\n`, or `$-1\r\n` when `None`
    BulkString(Option<String>),

    /// `#t\r\n` / `#f\r\n`
    Boolean(bool),

    /// `*<count>\r\n` followed by each element
    Array(Vec<RespValue>),
}

impl RespValue {
    /// Bulk string holding `s`
    pub fn bulk(s: impl Into<String>) -> Self {
        RespValue::BulkString(Some(s.into()))
    }

    /// Encode to wire format
    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }

    /// Append the wire format to `out`
    pub fn encode_into(&self, out: &mut String) {
        match self {
            RespValue::SimpleString(s) => {
                out.push('+');
                out.push_str(s);
            }
            RespValue::Error(s) => {
                out.push('-');
                out.push_str(s);
            }
            RespValue::Integer(n) => {
                out.push(':');
                out.push_str(&n.to_string());
            }
            RespValue::BulkString(Some(s)) => {
                out.push_str(&format!("${}{}", s.len(), CRLF));
                out.push_str(s);
            }
            RespValue::BulkString(None) => out.push_str("$-1"),
            RespValue::Boolean(b) => out.push_str(if *b { "#t" } else { "#f" }),
            RespValue::Array(elements) => {
                out.push_str(&format!("*{}{}", elements.len(), CRLF));
                for element in elements {
                    element.encode_into(out);
                }
                // Each element carries its own terminator
                return;
            }
        }
        out.push_str(CRLF);
    }
}

impl From<Token> for RespValue {
    /// Type detection: integers, then `true`/`false`, otherwise bulk strings.
    /// Quoted text is always a bulk string.
    fn from(token: Token) -> Self {
        match token {
            Token::Quoted(s) => RespValue::BulkString(Some(s)),
            Token::Array(elements) => {
                RespValue::Array(elements.into_iter().map(RespValue::from).collect())
            }
            Token::Scalar(s) => {
                if super::encoder::is_integer(&s) {
                    // Out of i64 range falls back to a bulk string
                    if let Ok(n) = s.parse::<i64>() {
                        return RespValue::Integer(n);
                    }
                }
                if super::encoder::is_boolean(&s) {
                    return RespValue::Boolean(s == "true");
                }
                RespValue::BulkString(Some(s))
            }
        }
    }
}
