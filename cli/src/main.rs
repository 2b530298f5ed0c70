//! Headless whiteboard client for exercising the relay.
//!
//! `listen` tails the board as JSONL, `send` pushes one segment, `line`
//! draws a straight line as a run of segments the way an interactive client
//! would. Useful for smoke-testing a relay without opening a browser.

use std::time::Duration;

use clap::{Parser, Subcommand};
use futures_util::{SinkExt, StreamExt};
use strokes::{StrokeSegment, encode_segment};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket send failed: {0}")]
    WsSend(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),
    #[error("invalid brush size {0}: must be positive")]
    InvalidSize(f64),
    #[error("line needs at least one step")]
    ZeroSteps,
}

#[derive(Parser, Debug)]
#[command(name = "whiteboard-cli", about = "Whiteboard relay CLI")]
struct Cli {
    /// Relay endpoint.
    #[arg(long, env = "WHITEBOARD_URL", default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every segment broadcast by peers, one JSON object per line.
    Listen,
    /// Send a single stroke segment.
    Send {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        #[arg(long, default_value = "#000000")]
        color: String,
        #[arg(long, default_value_t = 4.0)]
        size: f64,
    },
    /// Draw a straight line as a run of segments, paced like a real stroke.
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        #[arg(long, default_value_t = 10)]
        steps: u32,
        #[arg(long, default_value = "#000000")]
        color: String,
        #[arg(long, default_value_t = 4.0)]
        size: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Listen => run_listen(&cli.url).await,
        Command::Send { x0, y0, x1, y1, color, size } => {
            let segment = build_segment(x0, y0, x1, y1, &color, size)?;
            run_send(&cli.url, &[segment], Duration::ZERO).await
        }
        Command::Line { x0, y0, x1, y1, steps, color, size } => {
            let segments = line_segments(x0, y0, x1, y1, steps, &color, size)?;
            run_send(&cli.url, &segments, Duration::from_millis(15)).await
        }
    }
}

fn build_segment(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    color: &str,
    size: f64,
) -> Result<StrokeSegment, CliError> {
    if !strokes::is_hex_color(color) {
        return Err(CliError::InvalidColor(color.to_owned()));
    }
    if size <= 0.0 {
        return Err(CliError::InvalidSize(size));
    }
    Ok(StrokeSegment { x0, y0, x1, y1, color: color.to_owned(), size })
}

/// Interpolate `steps` consecutive segments from (x0, y0) to (x1, y1).
fn line_segments(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    steps: u32,
    color: &str,
    size: f64,
) -> Result<Vec<StrokeSegment>, CliError> {
    if steps == 0 {
        return Err(CliError::ZeroSteps);
    }

    let mut segments = Vec::with_capacity(steps as usize);
    let mut last = (x0, y0);
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        let next = ((x1 - x0).mul_add(t, x0), (y1 - y0).mul_add(t, y0));
        segments.push(build_segment(last.0, last.1, next.0, next.1, color, size)?);
        last = next;
    }
    Ok(segments)
}

async fn run_listen(url: &str) -> Result<(), CliError> {
    let (mut stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    eprintln!("listening on {url}");

    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => match strokes::decode_segment(text.as_str()) {
                Ok(_) => println!("{text}"),
                Err(error) => eprintln!("skipping malformed segment: {error}"),
            },
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }
    Ok(())
}

async fn run_send(url: &str, segments: &[StrokeSegment], pace: Duration) -> Result<(), CliError> {
    let (mut stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;

    for segment in segments {
        stream
            .send(Message::Text(encode_segment(segment).into()))
            .await
            .map_err(|error| CliError::WsSend(Box::new(error)))?;
        if !pace.is_zero() {
            tokio::time::sleep(pace).await;
        }
    }

    stream
        .close(None)
        .await
        .map_err(|error| CliError::WsSend(Box::new(error)))?;
    eprintln!("sent {} segment(s)", segments.len());
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
