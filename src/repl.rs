//! Interactive loop
//!
//! Reads one line at a time, sends it as a RESP command and writes the
//! decoded reply. Generic over its input and output so it can be driven
//! by stdin/stdout or by in-memory buffers.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::error::Result;
use crate::logging::Logger;
use crate::network::Session;
use crate::protocol::{decode, encode_raw_command, tokenize};

/// Read-eval-print loop over a `Session`
pub struct Repl<R, W> {
    input: R,
    output: W,
    logger: Arc<dyn Logger>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, logger: Arc<dyn Logger>) -> Self {
        Self { input, output, logger }
    }

    /// Run until `exit`/`quit` or end of input.
    ///
    /// Send and receive failures are reported and the loop continues.
    /// Only failures writing to `output` or reading `input` end it early.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(self.output, "{}", session.connection_info().prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if is_exit_command(input) {
                break;
            }
            if is_auth_command(input) {
                self.reauthenticate(session, input);
                continue;
            }

            let command = encode_raw_command(input);
            if command.is_empty() {
                self.logger.error(&format!("Failed to encode command: {}", input));
                continue;
            }

            match round_trip(session, command.as_bytes()) {
                Ok(reply) => {
                    if reply.is_empty() {
                        self.logger.warn("Server closed the connection");
                    }
                    writeln!(self.output, "{}", decode(&reply))?;
                }
                Err(e) => self.logger.error(&e.to_string()),
            }
        }

        Ok(())
    }

    /// Propose credentials, confirm with the server, commit only on `+OK`
    fn reauthenticate(&mut self, session: &mut Session, input: &str) {
        let pending = match session.propose_auth(input) {
            Ok(pending) => pending,
            Err(e) => {
                self.logger.error(&e.to_string());
                return;
            }
        };

        if let Err(e) = session.authenticate(pending) {
            self.logger.error(&format!("AUTH round trip failed: {}", e));
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

/// `exit` or `quit`, any case, surrounding whitespace ignored
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// First token is `auth`, any case
pub fn is_auth_command(input: &str) -> bool {
    tokenize(input)
        .first()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case("auth"))
}

fn round_trip(session: &mut Session, command: &[u8]) -> Result<bytes::Bytes> {
    session.send(command)?;
    session.receive()
}
