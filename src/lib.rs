//! # kvcli
//!
//! An interactive client for key-value servers speaking RESP:
//! - Quote and array-literal aware command tokenizer
//! - RESP encoder with free-form type detection
//! - Best-effort, non-failing RESP decoder for display
//! - Blocking TCP session with two-phase AUTH handling
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         REPL                                 │
//! │                 (prompt, exit/quit, auth)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ input line
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │          Tokenizer ──► Encoder ──► wire bytes                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ send / receive
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │          (owns the TcpStream, connection + auth state)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ reply bytes
//!                       ▼
//!               ┌───────────────┐
//!               │    Decoder    │──► "(string) value"
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logging;

pub mod protocol;
pub mod network;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use logging::{Logger, TracingLogger};
pub use network::{ConnectionInfo, Session, SessionState};
pub use repl::Repl;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvcli
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
