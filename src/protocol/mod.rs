//! Protocol Module
//!
//! RESP encoding of user input and decoding of server replies.
//!
//! ## Data Flow
//! ```text
//! "set k \"a b\""
//!      │ tokenize
//!      ▼
//! ["set", "k", "\"a b\""]
//!      │ encode_raw_command
//!      ▼
//! *3\r\n$3\r\nset\r\n$1\r\nk\r\n$3\r\na b\r\n   ──► server
//!
//! server ──► +OK\r\n ──► decode ──► "(string) OK"
//! ```
//!
//! ## Wire Types
//! - `+` simple string, `-` error, `:` integer
//! - `$` bulk string (`$-1` is null)
//! - `#` boolean (`#t` / `#f`)
//! - `*` array

mod tokenizer;
mod value;
mod encoder;
mod decoder;

pub use tokenizer::{tokenize, parse_array, strip_quotes, Token};
pub use value::{RespValue, CRLF};
pub use encoder::{
    encode, encode_token, encode_command, encode_raw_command,
    encode_bulk_string, encode_null_bulk_string, encode_simple_string,
    encode_error, encode_integer, encode_boolean, encode_array,
    is_integer, is_boolean, is_array,
};
pub use decoder::{
    decode, decode_simple_string, decode_error, decode_integer,
    decode_bulk_string, decode_array, decode_boolean,
};
