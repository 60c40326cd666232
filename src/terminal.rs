//! Operator terminal I/O
//!
//! Banner, prompt, line input, and the rendering of replies and inbound
//! chat messages. Everything here writes to a generic sink so the
//! session and exchange layers stay testable without a real terminal.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::Command;
use crate::protocol::{Reply, ReplyStatus, MAX_DATA};

const BANNER: &str = "\n\
    ========== CHAT CLIENT ==========\n\
     CREATE <room>   create a room\n\
     DELETE <room>   delete a room\n\
     JOIN   <room>   enter chat mode\n\
     LIST            list all rooms\n\
    =================================\n";

const PROMPT: &str = "Command> ";

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Print the title block shown at startup and whenever a chat session
/// returns control to the command loop.
pub async fn display_banner<W>(out: &mut W) -> tokio::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(BANNER.as_bytes()).await?;
    out.flush().await
}

/// Print the command prompt without a trailing newline.
pub async fn prompt<W>(out: &mut W) -> tokio::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(PROMPT.as_bytes()).await?;
    out.flush().await
}

/// Read one operator line.
///
/// Line endings are stripped and the result is clipped to the wire
/// frame size at a character boundary. Returns `None` on end-of-file,
/// which callers treat as a clean request to stop.
pub async fn read_operator_line<R>(input: &mut R) -> tokio::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let bytes = input.read_line(&mut line).await?;
    if bytes == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(LINE_ENDINGS);
    Ok(Some(clip_to_frame(trimmed).to_string()))
}

/// Render one inbound chat message.
pub async fn display_message<W>(out: &mut W, text: &str) -> tokio::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Render the reply to one command.
///
/// The original line decides the shape of the output: JOIN shows the
/// member count, LIST prints the room list exactly as the server sent
/// it, and everything else gets a one-line verdict.
pub async fn display_reply<W>(out: &mut W, command_line: &str, reply: &Reply) -> tokio::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let text = render_reply(command_line, reply);
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

fn render_reply(command_line: &str, reply: &Reply) -> String {
    match reply.status {
        ReplyStatus::Success => match Command::parse(command_line) {
            Some(Command::Create(name)) => format!("room '{}' created", name),
            Some(Command::Delete(name)) => format!("room '{}' deleted", name),
            Some(Command::Join(name)) => {
                format!("joined '{}' ({} member(s))", name, reply.member_count)
            }
            Some(Command::List) => format!("rooms: {}", reply.room_list),
            None => "command completed successfully".to_string(),
        },
        ReplyStatus::AlreadyExists => "error: room already exists".to_string(),
        ReplyStatus::NotExists => "error: room does not exist".to_string(),
        ReplyStatus::Full => "error: room is full".to_string(),
        ReplyStatus::Unknown => "error: command failed for an unknown reason".to_string(),
    }
}

/// Clip a line to the frame size without splitting a character.
fn clip_to_frame(line: &str) -> &str {
    if line.len() <= MAX_DATA {
        return line;
    }
    let mut end = MAX_DATA;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_operator_line_strips_endings() {
        let mut input = &b"join room1\r\n"[..];
        let line = read_operator_line(&mut input).await.unwrap();
        assert_eq!(line.as_deref(), Some("join room1"));
    }

    #[tokio::test]
    async fn test_read_operator_line_none_on_eof() {
        let mut input = &b""[..];
        assert!(read_operator_line(&mut input).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_operator_line_clips_to_frame_size() {
        let long = format!("{}\n", "x".repeat(MAX_DATA + 50));
        let mut input = long.as_bytes();
        let line = read_operator_line(&mut input).await.unwrap().unwrap();
        assert_eq!(line.len(), MAX_DATA);
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // 2-byte characters, so the frame limit lands mid-character.
        let line = "é".repeat(MAX_DATA);
        let clipped = clip_to_frame(&line);
        assert!(clipped.len() <= MAX_DATA);
        assert!(line.starts_with(clipped));
    }

    #[test]
    fn test_render_join_reply_shows_member_count() {
        let reply = Reply {
            status: ReplyStatus::Success,
            member_count: 2,
            port: 5050,
            room_list: String::new(),
        };
        assert_eq!(render_reply("join room1", &reply), "joined 'room1' (2 member(s))");
    }

    #[test]
    fn test_render_list_reply_prints_list_verbatim() {
        let reply = Reply {
            status: ReplyStatus::Success,
            member_count: 0,
            port: 0,
            room_list: "room1,room2,".to_string(),
        };
        assert_eq!(render_reply("list", &reply), "rooms: room1,room2,");
    }

    #[test]
    fn test_render_failure_replies() {
        let mut reply = Reply::unknown();
        assert_eq!(
            render_reply("create room1", &reply),
            "error: command failed for an unknown reason"
        );

        reply.status = ReplyStatus::AlreadyExists;
        assert_eq!(render_reply("create room1", &reply), "error: room already exists");

        reply.status = ReplyStatus::Full;
        assert_eq!(render_reply("join room1", &reply), "error: room is full");
    }

    #[tokio::test]
    async fn test_display_message_appends_newline() {
        let mut out = Vec::new();
        display_message(&mut out, "hello there").await.unwrap();
        assert_eq!(out, b"hello there\n");
    }
}
