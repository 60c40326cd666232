//! Error types for the chat client
//!
//! Defines the application-level error enum. Uses thiserror for
//! ergonomic error definitions.
//!
//! Server-reported failures (room exists, room missing, room full) are
//! not errors here; they arrive as ordinary reply values and are shown
//! to the operator. This enum covers the conditions that actually end
//! the process.

use thiserror::Error;

/// Application-level errors
///
/// Every variant is fatal to the current run: connection setup failed,
/// the chat session hit a hard I/O fault, or the server handed back a
/// port the transport cannot use.
#[derive(Debug, Error)]
pub enum AppError {
    /// Could not establish a TCP connection (fatal)
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// IO error on an established connection (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A chat task panicked (fatal - session state is unrecoverable)
    #[error("chat task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// The JOIN reply carried a port outside the TCP range
    #[error("server reported invalid chat port {0}")]
    InvalidPort(u32),
}
