//! Connection establishment
//!
//! Both phases of the protocol open their sockets here: the command
//! connection before each round trip and the dedicated chat connection
//! after a successful JOIN. Failure to connect is fatal for the whole
//! client; there is no retry.

use tokio::net::TcpStream;
use tracing::info;

use crate::error::AppError;

/// Resolve `host` and open a TCP connection to `host:port`.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, AppError> {
    let stream = TcpStream::connect((host, port))
        .await
        .map_err(|source| AppError::Connect {
            addr: format!("{}:{}", host, port),
            source,
        })?;

    info!("connected to {}:{}", host, port);
    Ok(stream)
}
