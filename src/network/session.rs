//! Client Session
//!
//! Owns the TCP connection to the server together with the connection
//! and authentication state. All wire traffic goes through `send` and
//! `receive`.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;

use bytes::{Bytes, BytesMut};

use crate::config::{Config, DEFAULT_RECEIVE_BUFFER_SIZE};
use crate::error::{KvError, Result};
use crate::logging::Logger;
use crate::protocol::{decode, encode_command, encode_simple_string, strip_quotes, tokenize};
use super::info::ConnectionInfo;

/// Connection lifecycle of a `Session`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No transport (initial and after `disconnect`)
    Disconnected,

    /// Transport open; commands may be sent
    Connected,

    /// Transport open and the server accepted `AUTH`
    Authenticated,
}

/// A blocking client session.
///
/// ## State Machine
/// ```text
/// Disconnected ──connect──► Connected ──AUTH +OK──► Authenticated
///       ▲                       │                        │
///       └──────────disconnect───┴────────────────────────┘
/// ```
///
/// There is no read framing: `receive` returns at most one buffer's
/// worth of bytes, so a reply larger than the buffer is truncated.
/// No timeouts are set on the socket.
pub struct Session {
    /// The only handle to the socket
    stream: Option<TcpStream>,

    state: SessionState,

    /// Current (committed) connection parameters
    info: ConnectionInfo,

    /// `host:port` while connected, empty otherwise
    addr: String,

    receive_buffer_size: usize,

    logger: Arc<dyn Logger>,
}

impl Session {
    /// Create a disconnected session
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            stream: None,
            state: SessionState::Disconnected,
            info: ConnectionInfo::default(),
            addr: String::new(),
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
            logger,
        }
    }

    /// Create a disconnected session using the config's buffer size and
    /// connection parameters
    pub fn from_config(config: &Config, logger: Arc<dyn Logger>) -> Self {
        let mut session = Self::new(logger).with_receive_buffer_size(config.receive_buffer_size);
        session.info = config.connection.clone();
        session
    }

    /// Set the size of the single chunk read by `receive`
    pub fn with_receive_buffer_size(mut self, size: usize) -> Self {
        self.receive_buffer_size = size.max(1);
        self
    }

    // =========================================================================
    // Connection
    // =========================================================================

    /// Open a connection to `info.host:info.port`.
    ///
    /// On failure the session is left exactly as it was, including any
    /// existing connection. On success an existing connection is replaced.
    pub fn connect(&mut self, info: &ConnectionInfo) -> Result<()> {
        let addr = info.addr();
        let stream = match TcpStream::connect(addr.as_str()) {
            Ok(stream) => stream,
            Err(source) => {
                self.logger.error(&format!("Connection to {} failed: {}", addr, source));
                return Err(KvError::Connect { addr, source });
            }
        };

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if self.is_connected() {
            tracing::debug!("Replacing existing connection to {}", self.addr);
            self.disconnect();
        }

        self.stream = Some(stream);
        self.state = SessionState::Connected;
        self.info = info.clone();
        self.logger.info(&format!("Connected to server at {}", addr));
        self.addr = addr;

        Ok(())
    }

    /// Close the connection. Safe to call any number of times.
    pub fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            // The peer may already be gone; the descriptor is closed on drop either way
            let _ = stream.shutdown(Shutdown::Both);
            tracing::debug!("Disconnected from {}", self.addr);
        }
        self.state = SessionState::Disconnected;
        self.addr.clear();
    }

    // =========================================================================
    // I/O
    // =========================================================================

    /// Write all of `bytes` to the server. Not retried on failure.
    pub fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(KvError::NotConnected)?;
        stream.write_all(bytes)?;
        stream.flush()?;
        tracing::trace!("Sent {} bytes to {}", bytes.len(), self.addr);
        Ok(())
    }

    /// Read one chunk (at most the receive buffer size) from the server.
    ///
    /// An empty result means the server closed the connection.
    pub fn receive(&mut self) -> Result<Bytes> {
        let stream = self.stream.as_mut().ok_or(KvError::NotConnected)?;
        let mut buf = BytesMut::zeroed(self.receive_buffer_size);
        let n = stream.read(&mut buf)?;
        buf.truncate(n);

        if n == 0 {
            tracing::debug!("Server {} closed the connection", self.addr);
        } else {
            tracing::trace!("Received {} bytes from {}", n, self.addr);
        }

        Ok(buf.freeze())
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Build the pending connection info for a raw `AUTH <user> <password>`
    /// line. Does not touch the network or the committed state.
    pub fn propose_auth(&self, raw_line: &str) -> Result<ConnectionInfo> {
        let tokens = tokenize(raw_line);
        let args: Vec<&str> = tokens
            .iter()
            .map(|t| strip_quotes(t).unwrap_or(t.as_str()))
            .collect();

        match args.as_slice() {
            [cmd, user, password]
                if cmd.eq_ignore_ascii_case("auth") && !user.is_empty() && !password.is_empty() =>
            {
                Ok(self.info.clone().with_credentials(*user, *password))
            }
            _ => Err(KvError::Auth("usage: AUTH <user> <password>".to_string())),
        }
    }

    /// Commit `pending` if `reply` is a positive `+OK`.
    ///
    /// Any other reply leaves the connection info and state untouched.
    pub fn commit_auth(&mut self, pending: ConnectionInfo, reply: &[u8]) -> bool {
        if !self.is_connected() {
            return false;
        }

        if reply != encode_simple_string("OK").as_bytes() {
            self.logger.error(&format!("Authentication failed: {}", decode(reply)));
            return false;
        }

        self.info = pending;
        self.state = SessionState::Authenticated;
        self.logger.success(&format!("Authenticated as {}", self.info.user));
        true
    }

    /// Send `AUTH` for `pending` and commit it on a positive reply.
    ///
    /// Returns `Ok(false)` on a negative reply and an error if the round
    /// trip itself fails; neither commits anything.
    pub fn authenticate(&mut self, pending: ConnectionInfo) -> Result<bool> {
        let command = encode_command("AUTH", &[pending.user.as_str(), pending.password.as_str()]);
        self.send(command.as_bytes())?;
        let reply = self.receive()?;
        Ok(self.commit_auth(pending, &reply))
    }

    /// Force the authenticated flag. Ignored while disconnected.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.state = match (self.state, authenticated) {
            (SessionState::Disconnected, _) => SessionState::Disconnected,
            (_, true) => SessionState::Authenticated,
            (_, false) => SessionState::Connected,
        };
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True when connected, authenticated or not
    pub fn is_connected(&self) -> bool {
        self.state != SessionState::Disconnected
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// `host:port` of the live connection, empty when disconnected
    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn connection_info(&self) -> &ConnectionInfo {
        &self.info
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.disconnect();
    }
}
