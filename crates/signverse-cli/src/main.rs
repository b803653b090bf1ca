//! SignVerse CLI - talk to the translation backend from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start sign detection and print results as they change
//! sv sign
//! sv sign --polls 10 --json
//!
//! # Fetch the latest detection result once
//! sv results
//!
//! # Record a speech session (press Enter to stop)
//! sv speech
//!
//! # Point at another backend
//! sv --backend-url http://10.0.0.2:5000 results
//! SIGNVERSE_BACKEND_URL=http://10.0.0.2:5000 sv results
//! ```

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signverse_core::backend::{HttpBackend, TranslationBackend};
use signverse_core::detection::{DetectionResult, LiveDetection};
use signverse_core::polling::{poll_detection, PollHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SignVerse translation backend client.
///
/// Drives the same `/vtot` and `/stot` endpoints as the SignVerse app.
#[derive(Parser)]
#[command(name = "sv", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL (default: $SIGNVERSE_BACKEND_URL or http://localhost:5000)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Start sign detection and poll for results until Ctrl-C
    Sign {
        /// Stop after this many results have been received
        #[arg(long)]
        polls: Option<usize>,
    },
    /// Fetch the latest detection result once
    Results,
    /// Start a speech session, wait for Enter, then print the transcript
    Speech,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::backend_config(cli.backend_url.as_deref());
    let backend = HttpBackend::new(&config).context("Invalid backend URL")?;
    info!("Using backend at {}", backend.base_url());

    match cli.command {
        Command::Sign { polls } => run_sign(&backend, &config, polls, cli.json).await,
        Command::Results => {
            let result = backend
                .fetch_detection()
                .await
                .context("Failed to fetch detection result")?;
            println!("{}", format_detection(&result, cli.json));
            Ok(())
        }
        Command::Speech => run_speech(&backend, cli.json).await,
    }
}

fn format_detection(result: &DetectionResult, json: bool) -> String {
    if json {
        output::format_detection_json(result)
    } else {
        output::format_detection_human(result)
    }
}

async fn run_sign(
    backend: &HttpBackend,
    config: &signverse_core::config::BackendConfig,
    polls: Option<usize>,
    json: bool,
) -> Result<()> {
    backend
        .start_detection()
        .await
        .context("Failed to initialize camera backend")?;
    eprintln!("Sign detection started. Press Ctrl-C to stop.");

    let handle = PollHandle::new();
    let mut live = LiveDetection::new();
    let mut received = 0usize;

    let polling = poll_detection(backend, config.poll_interval(), handle.token(), |result| {
        received += 1;
        // Only print when something changed, unless the caller wants every poll as JSON.
        if live.apply(&result) || json {
            println!("{}", format_detection(&result, json));
        }
        if polls.is_some_and(|limit| received >= limit) {
            handle.cancel();
        }
    });

    tokio::select! {
        delivered = polling => info!("Polling finished after {} results", delivered),
        _ = tokio::signal::ctrl_c() => {
            handle.cancel();
            eprintln!("Stopped.");
        }
    }

    Ok(())
}

async fn run_speech(backend: &HttpBackend, json: bool) -> Result<()> {
    backend
        .start_speech()
        .await
        .context("Failed to start session")?;
    eprintln!("Listening on the backend. Press Enter to stop.");

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read from stdin")?;

    let text = backend
        .stop_speech()
        .await
        .context("Failed to get transcription")?;

    if json {
        println!("{}", output::format_transcript_json(&text));
    } else {
        println!("{}", output::format_transcript_human(&text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sv", "sign", "--polls", "3", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Sign { polls: Some(3) }));
    }

    #[test]
    fn test_backend_url_flag() {
        let cli =
            Cli::try_parse_from(["sv", "--backend-url", "http://10.0.0.2:5000", "results"]).unwrap();
        assert_eq!(cli.backend_url.as_deref(), Some("http://10.0.0.2:5000"));
        assert!(matches!(cli.command, Command::Results));
    }
}
