//! Network Module
//!
//! Client-side connection handling.
//!
//! ## Architecture
//! - Single blocking TCP connection per `Session`
//! - One request in flight at a time (send, then receive)
//! - `ConnectionInfo` built from CLI flags or a `kv://` URI

mod info;
mod uri;
mod session;

pub use info::{ConnectionInfo, DEFAULT_HOST, DEFAULT_PORT, URI_SCHEME};
pub use uri::{parse_connection_uri, UriParts};
pub use session::{Session, SessionState};
