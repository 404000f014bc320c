//! kv-cli
//!
//! Interactive RESP client.
//!
//! ```text
//! kv-cli -h <host> -p <port> -U <user> -P <password>
//! kv-cli -url kv://<user>:<password>@<host>:<port>
//! ```

use std::io;
use std::process;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use kvcli::config::normalize_args;
use kvcli::{Config, KvError, Repl, Session, TracingLogger};
use tracing_subscriber::{fmt, EnvFilter};

/// kv-cli
#[derive(Parser, Debug)]
#[command(name = "kv-cli")]
#[command(about = "Interactive client for RESP key-value servers")]
#[command(version)]
#[command(disable_help_flag = true, arg_required_else_help = true)]
struct Args {
    /// Server host
    #[arg(short = 'h', long)]
    host: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// AUTH user
    #[arg(short = 'U', long)]
    user: Option<String>,

    /// AUTH password
    #[arg(short = 'P', long)]
    password: Option<String>,

    /// Connection URI: kv://<user>:<password>@<host>:<port>
    #[arg(long)]
    url: Option<String>,

    /// Receive buffer size in bytes
    #[arg(long, default_value_t = kvcli::config::DEFAULT_RECEIVE_BUFFER_SIZE)]
    buffer_size: usize,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn into_config(self) -> kvcli::Result<Config> {
        let mut builder = Config::builder().receive_buffer_size(self.buffer_size);
        if let Some(url) = self.url {
            builder = builder.uri(url);
        }
        if let Some(host) = self.host {
            builder = builder.host(host);
        }
        if let Some(port) = self.port {
            builder = builder.port(port);
        }
        if let Some(user) = self.user {
            builder = builder.user(user);
        }
        if let Some(password) = self.password {
            builder = builder.password(password);
        }
        builder.build()
    }
}

fn main() {
    // Logs go to stderr; stdout carries the prompt and replies
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_from(normalize_args(std::env::args()));
    let logger = TracingLogger::shared();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            logger.error(&e.to_string());
            if matches!(e, KvError::InvalidUri(_)) {
                logger.error("Format: kv://<user>:<password>@<host>:<port>");
            }
            process::exit(1);
        }
    };

    tracing::debug!("kv-cli v{}", kvcli::VERSION);
    logger.info(&format!("Connecting to {}", config.connection.url));

    let mut session = Session::from_config(&config, Arc::clone(&logger));
    if session.connect(&config.connection).is_err() {
        logger.error(&format!("Failed to connect to the server at {}", config.connection.url));
        process::exit(1);
    }

    if config.connection.require_auth {
        match session.authenticate(config.connection.clone()) {
            Ok(true) => {}
            Ok(false) => {
                session.disconnect();
                process::exit(1);
            }
            Err(e) => {
                logger.error(&format!("Failed to send authentication command: {}", e));
                session.disconnect();
                process::exit(1);
            }
        }
    } else {
        logger.warn("Starting an unauthenticated session.");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), Arc::clone(&logger));
    if let Err(e) = repl.run(&mut session) {
        logger.error(&format!("REPL stopped: {}", e));
    }

    logger.warn("Disconnecting from server...");
    session.disconnect();
}
