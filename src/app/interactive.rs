//! Interactive lookup shell.
//!
//! Reads one command per line: an IP address, `me` for the caller's own
//! address, `history` to list what was looked up so far, or `exit`. End of
//! input also exits.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{error, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::format::{render, OutputFormat};
use crate::lookup::Orchestrator;

use super::ip::validate_ip;

const BANNER: &str = "🚀 ip_lookup Interactive Mode\n\
                      Enter an IP address ('me' for your own, 'history' to list lookups, 'exit' to quit)\n";
const PROMPT: &str = "> ";

/// Runs the shell over `input`, writing results to `output`.
///
/// Returns the lookup history: valid IPs in first-seen order, without repeats.
/// Lookup and formatting failures are logged and the shell keeps going; only
/// I/O errors on `input` or `output` end the session early.
pub async fn run_session<R, W>(
    orchestrator: Arc<Orchestrator>,
    input: R,
    mut output: W,
    format: OutputFormat,
    fields: Option<&str>,
) -> Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut history: Vec<String> = Vec::new();
    let mut lines = input.lines();

    write_out(&mut output, BANNER).await?;
    loop {
        write_out(&mut output, PROMPT).await?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = line.trim();
        match command {
            "" => continue,
            "exit" => break,
            "history" => {
                let mut listing = String::from("\n🔍 Lookup History:\n");
                for ip in &history {
                    listing.push_str(&format!(" - {}\n", ip));
                }
                write_out(&mut output, &listing).await?;
                continue;
            }
            _ => {}
        }

        let ip = if command.eq_ignore_ascii_case("me") {
            String::new()
        } else {
            match validate_ip(command) {
                Ok(_) => command.to_string(),
                Err(_) => {
                    warn!("Invalid IP address: {}", command);
                    continue;
                }
            }
        };

        let label = if ip.is_empty() { "me" } else { ip.as_str() };
        if !history.iter().any(|seen| seen == label) {
            history.push(label.to_string());
        }

        let record = match orchestrator.lookup_ip(&ip).await {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to fetch info: {}", e);
                continue;
            }
        };

        match render(&[Some(record)], format, fields) {
            Ok(rendered) => write_out(&mut output, &format!("{}\n", rendered)).await?,
            Err(e) => error!("Formatting failed: {}", e),
        }
    }

    Ok(history)
}

/// Runs the shell on the process's stdin and stdout.
pub async fn run_interactive(
    orchestrator: Arc<Orchestrator>,
    format: OutputFormat,
    fields: Option<&str>,
) -> Result<Vec<String>> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_session(orchestrator, stdin, tokio::io::stdout(), format, fields).await
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to write output")?;
    Ok(())
}
