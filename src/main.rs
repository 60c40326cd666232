//! Chatroom TCP Client - Entry Point
//!
//! Parses the host/port arguments and runs the command loop: one fresh
//! connection and one framed round trip per command, switching into
//! chat mode after a successful JOIN.

use clap::Parser;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_client_v1::{connection, exchange, session, terminal, AppError, Command, ReplyStatus};

/// Chatroom client: room commands over TCP plus a full-duplex chat mode
#[derive(Debug, Parser)]
#[command(name = "chat_client_v1", version)]
struct Args {
    /// Server host address
    host: String,
    /// Server command port
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with environment filter
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=chat_client_v1=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_client_v1=info")),
        )
        .init();

    let args = Args::parse();

    let mut stdout = io::stdout();
    let mut stdin = BufReader::new(io::stdin());

    terminal::display_banner(&mut stdout).await?;

    loop {
        // Fresh command connection per round trip.
        let mut stream = connection::connect(&args.host, args.port).await?;

        terminal::prompt(&mut stdout).await?;
        let Some(line) = terminal::read_operator_line(&mut stdin).await? else {
            break;
        };

        let reply = exchange::execute(&mut stream, &line).await;
        terminal::display_reply(&mut stdout, &line, &reply).await?;

        let joined = matches!(Command::parse(&line), Some(Command::Join(_)))
            && reply.status == ReplyStatus::Success;
        if joined {
            let port =
                u16::try_from(reply.port).map_err(|_| AppError::InvalidPort(reply.port))?;

            terminal::display_message(&mut stdout, "Now you are in the chat mode").await?;

            // The command connection is never reused for chat.
            drop(stream);
            session::run_chat(&args.host, port).await?;
        }
    }

    info!("client exiting");
    Ok(())
}
