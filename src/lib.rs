//! Chatroom TCP Client Library
//!
//! A learning-oriented chatroom client built with tokio. Room
//! management runs as a synchronous request/reply exchange; a
//! successful JOIN switches to a full-duplex chat session.
//!
//! # Features
//! - CREATE / DELETE / JOIN / LIST room commands
//! - Length-based verb normalization before transmission
//! - Fixed-size wire frames with an explicit reply byte layout
//! - Chat mode multiplexing operator input and inbound messages
//! - Clean return to the command loop when the server ends a session
//!
//! # Architecture
//! Each command gets a fresh connection and exactly one framed
//! request/reply round trip. Chat mode opens a dedicated connection,
//! splits it, and runs a receive task and a send task joined by
//! `select!`; no state is shared between them.
//!
//! # Example
//! ```ignore
//! use chat_client_v1::{connection, exchange, session, Command, ReplyStatus};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut stream = connection::connect("127.0.0.1", 8080).await.unwrap();
//!     let reply = exchange::execute(&mut stream, "join room1").await;
//!     if reply.status == ReplyStatus::Success {
//!         drop(stream);
//!         session::run_chat("127.0.0.1", reply.port as u16).await.unwrap();
//!     }
//! }
//! ```

pub mod command;
pub mod connection;
pub mod error;
pub mod exchange;
pub mod protocol;
pub mod session;
pub mod terminal;

// Re-export main types for convenience
pub use command::Command;
pub use error::AppError;
pub use exchange::execute;
pub use protocol::{Reply, ReplyStatus, MAX_DATA, REPLY_LEN};
pub use session::{run_chat, run_session};
