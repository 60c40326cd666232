//! Wire protocol definitions
//!
//! The client and server exchange fixed-size blocks: every command line
//! and chat message travels as one `MAX_DATA`-byte frame, and every
//! command reply travels as one `REPLY_LEN`-byte block with an explicit
//! byte layout (big-endian integers, zero-padded text).

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of every command/message frame on the wire.
///
/// Frames shorter than this are zero-padded; receivers must not assume
/// the padding is meaningful.
pub const MAX_DATA: usize = 256;

/// Size of one encoded [`Reply`] block: three `u32` fields plus the
/// room-list text field.
pub const REPLY_LEN: usize = 12 + MAX_DATA;

/// Outcome code carried in a [`Reply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    /// Command completed
    Success,
    /// CREATE on a room that already exists
    AlreadyExists,
    /// DELETE or JOIN on a room that does not exist
    NotExists,
    /// JOIN on a room at capacity
    Full,
    /// Absent or malformed reply, transport error, or an unrecognized
    /// wire code
    Unknown,
}

impl ReplyStatus {
    /// Decode a wire status code. Anything not recognized maps to
    /// `Unknown` rather than failing the whole reply.
    pub fn from_wire(code: u32) -> Self {
        match code {
            0 => ReplyStatus::Success,
            1 => ReplyStatus::AlreadyExists,
            2 => ReplyStatus::NotExists,
            3 => ReplyStatus::Full,
            _ => ReplyStatus::Unknown,
        }
    }

    /// Wire code for this status.
    pub fn to_wire(self) -> u32 {
        match self {
            ReplyStatus::Success => 0,
            ReplyStatus::AlreadyExists => 1,
            ReplyStatus::NotExists => 2,
            ReplyStatus::Full => 3,
            ReplyStatus::Unknown => 4,
        }
    }
}

/// Structured outcome of one command round trip
///
/// Exactly one of {`member_count` + `port`, `room_list`} is meaningful,
/// depending on the command that produced the reply; the unused fields
/// stay at their zero value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Outcome code
    pub status: ReplyStatus,
    /// Current room membership, set on a successful JOIN
    pub member_count: u32,
    /// Dedicated chat endpoint port, set on a successful JOIN
    pub port: u32,
    /// Comma-terminated room names, set on a successful LIST
    pub room_list: String,
}

impl Reply {
    /// The reply substituted when no usable reply could be read:
    /// `Unknown` status, every other field zero.
    pub fn unknown() -> Self {
        Self {
            status: ReplyStatus::Unknown,
            member_count: 0,
            port: 0,
            room_list: String::new(),
        }
    }

    /// Encode into the fixed wire layout.
    ///
    /// The room list is clipped to the text field size. Mainly useful to
    /// peers and test harnesses that stand in for the server.
    pub fn encode(&self) -> [u8; REPLY_LEN] {
        let mut buf = [0u8; REPLY_LEN];
        buf[0..4].copy_from_slice(&self.status.to_wire().to_be_bytes());
        buf[4..8].copy_from_slice(&self.member_count.to_be_bytes());
        buf[8..12].copy_from_slice(&self.port.to_be_bytes());
        let text = self.room_list.as_bytes();
        let len = text.len().min(MAX_DATA);
        buf[12..12 + len].copy_from_slice(&text[..len]);
        buf
    }

    /// Decode from the fixed wire layout.
    pub fn decode(buf: &[u8; REPLY_LEN]) -> Self {
        let status = ReplyStatus::from_wire(u32::from_be_bytes(buf[0..4].try_into().unwrap()));
        let member_count = u32::from_be_bytes(buf[4..8].try_into().unwrap());
        let port = u32::from_be_bytes(buf[8..12].try_into().unwrap());
        let room_list = decode_text(&buf[12..]);
        Self {
            status,
            member_count,
            port,
            room_list,
        }
    }
}

/// Extract the textual content of a zero-padded field: bytes up to the
/// first NUL (or the whole field), converted lossily to UTF-8.
pub fn decode_text(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

/// Write `text` as a single zero-padded `MAX_DATA` frame.
///
/// Content longer than the frame is rejected; callers clip operator
/// input before framing.
pub async fn write_frame<W>(writer: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let bytes = text.as_bytes();
    if bytes.len() > MAX_DATA {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("frame content exceeds {} bytes", MAX_DATA),
        ));
    }
    let mut frame = [0u8; MAX_DATA];
    frame[..bytes.len()].copy_from_slice(bytes);
    writer.write_all(&frame).await?;
    writer.flush().await
}

/// Read one `MAX_DATA` frame.
///
/// Returns `None` when the peer closed the connection at a frame
/// boundary, the ordinary end-of-session signal. A close in the middle
/// of a frame is an error.
pub async fn read_frame<R>(reader: &mut R) -> io::Result<Option<[u8; MAX_DATA]>>
where
    R: AsyncRead + Unpin,
{
    let mut frame = [0u8; MAX_DATA];
    let mut filled = 0;
    while filled < MAX_DATA {
        let n = reader.read(&mut frame[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed mid-frame",
            ));
        }
        filled += n;
    }
    Ok(Some(frame))
}

/// Read one encoded [`Reply`] block.
///
/// Errors (including a peer close before the full block arrived) are
/// left to the caller; the exchange layer turns them into
/// [`Reply::unknown`].
pub async fn read_reply<R>(reader: &mut R) -> io::Result<Reply>
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; REPLY_LEN];
    reader.read_exact(&mut buf).await?;
    Ok(Reply::decode(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_roundtrip() {
        let reply = Reply {
            status: ReplyStatus::Success,
            member_count: 3,
            port: 5050,
            room_list: String::new(),
        };
        assert_eq!(Reply::decode(&reply.encode()), reply);
    }

    #[test]
    fn test_reply_layout_is_fixed() {
        let reply = Reply {
            status: ReplyStatus::AlreadyExists,
            member_count: 0,
            port: 0,
            room_list: "room1,room2,".to_string(),
        };
        let buf = reply.encode();
        assert_eq!(&buf[0..4], &[0, 0, 0, 1]);
        assert_eq!(&buf[12..24], b"room1,room2,");
        assert_eq!(buf[24], 0);
    }

    #[test]
    fn test_unknown_wire_code() {
        assert_eq!(ReplyStatus::from_wire(4), ReplyStatus::Unknown);
        assert_eq!(ReplyStatus::from_wire(99), ReplyStatus::Unknown);
    }

    #[test]
    fn test_unknown_reply_is_all_zero() {
        let reply = Reply::unknown();
        assert_eq!(reply.status, ReplyStatus::Unknown);
        assert_eq!(reply.member_count, 0);
        assert_eq!(reply.port, 0);
        assert!(reply.room_list.is_empty());
    }

    #[test]
    fn test_decode_text_stops_at_nul() {
        let mut buf = [0u8; 16];
        buf[..5].copy_from_slice(b"hello");
        assert_eq!(decode_text(&buf), "hello");
        assert_eq!(decode_text(b"full-width-field"), "full-width-field");
    }

    #[tokio::test]
    async fn test_frame_roundtrip_pads_to_max_data() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        write_frame(&mut client, "JOIN room1").await.unwrap();

        let frame = read_frame(&mut server).await.unwrap().expect("one frame");
        assert_eq!(&frame[..10], b"JOIN room1");
        assert!(frame[10..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn test_read_frame_none_on_clean_close() {
        let (client, mut server) = tokio::io::duplex(1024);
        drop(client);

        assert!(read_frame(&mut server).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_frame_error_on_mid_frame_close() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        client.write_all(b"partial").await.unwrap();
        drop(client);

        let err = read_frame(&mut server).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_write_frame_rejects_oversized_content() {
        let (mut client, _server) = tokio::io::duplex(1024);
        let text = "x".repeat(MAX_DATA + 1);

        let err = write_frame(&mut client, &text).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
