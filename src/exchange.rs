//! Command exchange
//!
//! One request/reply round trip on the command connection: normalize
//! the operator line, send it as a single frame, block for exactly one
//! reply block. There is no retry and no timeout; the protocol is
//! strictly synchronous.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, warn};

use crate::command;
use crate::protocol::{read_reply, write_frame, Reply};

/// Send one command line and read its reply.
///
/// The verb is upper-cased before transmission; everything else goes
/// out verbatim, including lines the server will reject. Any transport
/// failure on the way out or back collapses into [`Reply::unknown`];
/// the caller treats that as just another reply.
pub async fn execute<S>(stream: &mut S, command_line: &str) -> Reply
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let wire_line = command::normalize(command_line);
    debug!("sending command frame: {:?}", wire_line);

    if let Err(e) = write_frame(stream, &wire_line).await {
        warn!("command send failed: {}", e);
        return Reply::unknown();
    }

    match read_reply(stream).await {
        Ok(reply) => {
            debug!("reply status: {:?}", reply.status);
            reply
        }
        Err(e) => {
            warn!("reply read failed: {}", e);
            Reply::unknown()
        }
    }
}
