//! Connection parameters
//!
//! Where to connect and which credentials to present.

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 6379;

/// URI scheme used for display and parsing
pub const URI_SCHEME: &str = "kv://";

/// Connection parameters for one server.
///
/// Built once at startup. A confirmed `AUTH` replaces the session's copy
/// with a new value instead of mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Server hostname or IP (`localhost` is stored as `127.0.0.1`)
    pub host: String,

    pub port: u16,

    /// Empty when no credentials were given
    pub user: String,

    pub password: String,

    /// Canonical display form: `kv://[user@]host:port`.
    /// The password is never included.
    pub url: String,

    /// Whether an `AUTH` exchange is required before use
    pub require_auth: bool,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ConnectionInfo {
    /// Create connection info without credentials
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let mut info = Self {
            host: normalize_host(host.into()),
            port,
            user: String::new(),
            password: String::new(),
            url: String::new(),
            require_auth: false,
        };
        info.refresh_url();
        info
    }

    /// Copy of this info carrying `user`/`password`.
    ///
    /// `require_auth` is set when both are non-empty.
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self.require_auth = !self.user.is_empty() && !self.password.is_empty();
        self.refresh_url();
        self
    }

    /// `host:port`, suitable for `TcpStream::connect`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// REPL prompt: `[user@]host:port> `
    pub fn prompt(&self) -> String {
        if self.user.is_empty() {
            format!("{}> ", self.addr())
        } else {
            format!("{}@{}> ", self.user, self.addr())
        }
    }

    fn refresh_url(&mut self) {
        self.url = if self.user.is_empty() {
            format!("{}{}", URI_SCHEME, self.addr())
        } else {
            format!("{}{}@{}", URI_SCHEME, self.user, self.addr())
        };
    }
}

/// Map `localhost` to the IPv4 loopback address
pub fn normalize_host(host: String) -> String {
    if host == "localhost" {
        DEFAULT_HOST.to_string()
    } else {
        host
    }
}
