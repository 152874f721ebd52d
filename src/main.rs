// ABOUTME: Entry point for the eventkit demo binary.
// ABOUTME: Initializes tracing, exercises the event log and string transforms, and prints results to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use eventkit_core::EventLog;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "eventkit=info,eventkit_core=info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!("eventkit demo starting");

    let mut log = EventLog::new();
    log.append_value(
        "UserLogin",
        json!({"username": "alice", "ip": "192.168.1.100"}),
    )?;
    log.append_value(
        "FileAccess",
        json!({"filename": "document.pdf", "action": "read"}),
    )?;
    log.append_value(
        "UserLogin",
        json!({"username": "bob", "ip": "192.168.1.101"}),
    )?;

    log.print_summary().context("failed to print event summary")?;

    let login_events = log.find_by_name("UserLogin");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "Total login events: {}", login_events.len())?;

    write_text_demo(&mut out, "hello world")?;
    out.flush()?;

    tracing::debug!("eventkit demo finished");
    Ok(())
}

/// Print the string transform section of the demo.
fn write_text_demo<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Original: {}", text)?;
    writeln!(out, "Reversed: {}", eventkit_text::reverse(text))?;
    writeln!(out, "Title: {}", eventkit_text::to_title(text))?;
    writeln!(out, "Capitalized: {}", eventkit_text::capitalize(text))?;
    writeln!(out, "Word count: {}", eventkit_text::count_words(text))?;
    Ok(())
}
