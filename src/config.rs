//! Configuration for kvcli
//!
//! Centralized configuration with sensible defaults.

use crate::error::{KvError, Result};
use crate::network::{parse_connection_uri, ConnectionInfo, DEFAULT_HOST, DEFAULT_PORT};

/// Bytes read by a single `Session::receive`
pub const DEFAULT_RECEIVE_BUFFER_SIZE: usize = 1024;

/// Command-line flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &[
    "-h", "--host", "-p", "--port", "-U", "--user", "-P", "--password", "-url", "--url",
    "--buffer-size",
];

/// Rewrite the single-dash `-url` spelling to `--url` so clap accepts it.
///
/// `argv[0]` is passed through untouched. Only arguments in flag position
/// are rewritten: `-url` and `-url=<uri>` become `--url` and `--url=<uri>`,
/// while a `-url` that is the value of another flag (`-P -url`) is kept.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut out: Vec<String> = args.next().into_iter().collect();
    let mut expects_value = false;

    for arg in args {
        if expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }

        expects_value = VALUE_FLAGS.contains(&arg.as_str());
        let rewritten = match arg.strip_prefix("-url") {
            Some("") => Some("--url".to_string()),
            Some(rest) if rest.starts_with('=') => Some(format!("--url{}", rest)),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

/// Main configuration for a client run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Server address and credentials
    pub connection: ConnectionInfo,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Size of the single chunk read per reply; larger replies are truncated
    pub receive_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: ConnectionInfo::default(),
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config.
///
/// A URI, if given, is applied first; explicit host/port/user/password
/// settings then override the matching URI fields.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    uri: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    password: Option<String>,
    receive_buffer_size: usize,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            uri: None,
            host: None,
            port: None,
            user: None,
            password: None,
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
        }
    }
}

impl ConfigBuilder {
    /// Set a `kv://[user:password@]host:port` connection URI
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the AUTH user
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the AUTH password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the receive chunk size (in bytes)
    pub fn receive_buffer_size(mut self, size: usize) -> Self {
        self.receive_buffer_size = size;
        self
    }

    /// Validate and build.
    ///
    /// Fails on an invalid URI, port 0, a zero buffer size, or when only
    /// one of user/password is set.
    pub fn build(self) -> Result<Config> {
        let (mut host, mut port, mut user, mut password) =
            (DEFAULT_HOST.to_string(), DEFAULT_PORT, String::new(), String::new());

        if let Some(uri) = &self.uri {
            let parts = parse_connection_uri(uri)?;
            host = parts.host;
            port = parts.port;
            user = parts.user;
            password = parts.password;
        }

        host = self.host.unwrap_or(host);
        port = self.port.unwrap_or(port);
        user = self.user.unwrap_or(user);
        password = self.password.unwrap_or(password);

        if host.is_empty() {
            return Err(KvError::Config("host must not be empty".to_string()));
        }
        if port == 0 {
            return Err(KvError::Config("port must be between 1 and 65535".to_string()));
        }
        if user.is_empty() != password.is_empty() {
            return Err(KvError::Config(
                "both user and password must be provided".to_string(),
            ));
        }
        if self.receive_buffer_size == 0 {
            return Err(KvError::Config("receive buffer size must be non-zero".to_string()));
        }

        Ok(Config {
            connection: ConnectionInfo::new(host, port).with_credentials(user, password),
            receive_buffer_size: self.receive_buffer_size,
        })
    }
}
