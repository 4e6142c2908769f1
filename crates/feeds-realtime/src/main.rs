//! feeds-tail
//!
//! Replays newline-delimited frames (a file or stdin) through a client
//! session and logs every decoded event.
//! - Strict config load + validate
//! - Tracing with `RUST_LOG` filtering
//! - Connect request written to stdout as the first outbound frame

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, EnvFilter};

use feeds_core::error::{FeedsError, Result};
use feeds_core::protocol::connect::ConnectRequest;
use feeds_realtime::dispatch::{Dispatcher, LogHandler};
use feeds_realtime::{config, Frame, Session};

#[derive(Debug, Parser)]
#[command(name = "feeds-tail", version, about = "Decode and log feeds realtime frames")]
struct Args {
    /// YAML client config.
    #[arg(long, env = "FEEDS_CONFIG", default_value = "feeds.yaml")]
    config: PathBuf,

    /// Newline-delimited JSON frames; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, env = "FEEDS_TOKEN")]
    token: String,

    #[arg(long, env = "FEEDS_USER_ID")]
    user_id: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "feeds-tail failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        config: config_path,
        input,
        token,
        user_id,
    } = args;
    let cfg = Arc::new(config::load_from_file(&config_path)?);

    let dispatcher = Arc::new(Dispatcher::new());
    dispatcher.subscribe_all(Arc::new(LogHandler));

    let (in_tx, in_rx) = mpsc::channel::<Frame>(256);
    let (out_tx, mut out_rx) = mpsc::channel::<Frame>(64);

    let reader = tokio::spawn(async move {
        match input {
            Some(path) => {
                let file = tokio::fs::File::open(&path).await.map_err(|e| {
                    FeedsError::Internal(format!("open {} failed: {e}", path.display()))
                })?;
                forward_lines(BufReader::new(file), in_tx).await
            }
            None => forward_lines(BufReader::new(tokio::io::stdin()), in_tx).await,
        }
    });

    let writer = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            match frame {
                Frame::Text(s) => println!("{s}"),
                other => tracing::debug!(?other, "outbound frame"),
            }
        }
    });

    let mut session = Session::new(cfg, dispatcher);
    let connect = ConnectRequest::new(token, user_id);
    let res = session.run(connect, in_rx, out_tx).await;
    tracing::info!(stats = ?session.stats(), "session finished");

    // Session is over; a reader still blocked on stdin must not keep us alive.
    reader.abort();
    match reader.await {
        Ok(read) => read?,
        Err(e) if e.is_cancelled() => {}
        Err(e) => return Err(FeedsError::Internal(format!("reader task failed: {e}"))),
    }
    let _ = writer.await;

    res
}

async fn forward_lines<R>(reader: R, tx: mpsc::Sender<Frame>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| FeedsError::Internal(format!("read input failed: {e}")))?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if tx.send(Frame::text(line)).await.is_err() {
            break;
        }
    }
    Ok(())
}
