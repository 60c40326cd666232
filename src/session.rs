//! Chat session multiplexer
//!
//! After a successful JOIN the client opens a dedicated connection and
//! enters chat mode: inbound frames from the server and operator input
//! are serviced concurrently by a receive task and a send task, joined
//! by `select!`. The session ends when the server closes the connection
//! (the room was torn down) or operator input reaches end-of-file.
//! There is no way back into command mode on the same connection.

use tokio::io::{self, AsyncBufRead, AsyncRead, AsyncWrite, BufReader};
use tracing::{debug, info};

use crate::connection;
use crate::error::AppError;
use crate::protocol::{decode_text, read_frame, write_frame};
use crate::terminal;

/// Open the dedicated chat connection and run the session against the
/// real terminal. Returns when the session ends normally; hard I/O
/// errors propagate and take the process down with them.
pub async fn run_chat(host: &str, port: u16) -> Result<(), AppError> {
    let stream = connection::connect(host, port).await?;
    info!("chat session open on {}:{}", host, port);

    let input = BufReader::new(io::stdin());
    let display = io::stdout();
    run_session(stream, input, display).await
}

/// Run the chat event loop over an already-open stream.
///
/// Generic over the stream, the operator-input source, and the display
/// sink. The stream is split and each half is owned by exactly one
/// task, so neither direction can block the other:
/// - the receive task turns inbound frames into display lines and ends
///   on a clean remote close, re-displaying the banner,
/// - the send task turns operator lines into outbound frames and ends
///   on input end-of-file.
///
/// Whichever task finishes first wins the `select!` and the other is
/// aborted. No interrupt handler is installed; process-default
/// termination remains the abrupt exit path out of chat mode.
pub async fn run_session<S, R, W>(stream: S, input: R, display: W) -> Result<(), AppError>
where
    S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    R: AsyncBufRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let (read_half, write_half) = io::split(stream);

    let mut recv_task = tokio::spawn(recv_loop(read_half, display));
    let mut send_task = tokio::spawn(send_loop(input, write_half));

    let outcome = tokio::select! {
        res = &mut recv_task => {
            debug!("receive task finished, stopping send task");
            send_task.abort();
            res
        }
        res = &mut send_task => {
            debug!("send task finished, stopping receive task");
            recv_task.abort();
            res
        }
    };

    outcome??;
    info!("chat session ended");
    Ok(())
}

/// Receive half: one frame in, one display line out.
async fn recv_loop<R, W>(mut conn: R, mut display: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        match read_frame(&mut conn).await? {
            Some(frame) => {
                terminal::display_message(&mut display, &decode_text(&frame)).await?;
            }
            None => {
                debug!("server closed the chat connection");
                terminal::display_banner(&mut display).await?;
                return Ok(());
            }
        }
    }
}

/// Send half: one operator line in, one frame out.
async fn send_loop<R, W>(mut input: R, mut conn: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        match terminal::read_operator_line(&mut input).await? {
            Some(line) => write_frame(&mut conn, &line).await?,
            None => {
                debug!("operator input closed");
                return Ok(());
            }
        }
    }
}
