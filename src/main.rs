//! changelist - CLI entry point.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use changelist::changelog::{format_changelog, render};
use changelist::git::fetch_log;
use changelist::input::{SystemClipboard, TextBuffer, collect_options, poll_interval, wait_for_enter};
use changelist::output::publish;
use changelist::Options;

/// Build a numbered changelog from the commit subjects in a version range.
///
/// Without positional arguments the three values are read from the clipboard:
/// copy the repository path, then the from-version, then the to-version.
#[derive(Parser, Debug)]
#[command(name = "changelist")]
#[command(about = "Build a numbered changelog from git commit subjects")]
#[command(version)]
struct Cli {
    /// Repository path (empty string for the current directory)
    #[arg(requires_all = ["from", "to"])]
    repo: Option<String>,

    /// Start of commit range (exclusive)
    from: Option<String>,

    /// End of commit range (inclusive)
    to: Option<String>,

    /// Clipboard poll interval in milliseconds [env: CHANGELIST_POLL_INTERVAL_MS, default: 1000]
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Do not copy the changelog to the clipboard
    #[arg(long)]
    no_copy: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let interval = cli
        .poll_interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(poll_interval);

    // Opened on first use.
    let mut clipboard: Option<SystemClipboard> = None;

    let mut stdout = io::stdout();

    let options = match (cli.repo, cli.from, cli.to) {
        (Some(repo), Some(from), Some(to)) => Options::new(&repo, &from, &to),
        _ => {
            let buffer = open_clipboard(&mut clipboard)?;
            collect_options(buffer, interval, &mut stdout)
                .context("Failed to collect options from clipboard")?
        }
    };

    let logs = fetch_log(&options).context("Failed to run git log")?;
    let changelog = render(&format_changelog(&logs));

    let buffer: Option<&mut dyn TextBuffer> = if cli.no_copy {
        None
    } else {
        match open_clipboard(&mut clipboard) {
            Ok(buffer) => Some(buffer as &mut dyn TextBuffer),
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    };

    publish(&changelog, buffer, &mut stdout).context("Failed to print changelog")?;

    if !cli.no_wait {
        wait_for_enter(&mut io::stdin().lock()).context("Failed to read stdin")?;
    }

    Ok(())
}

/// Open the system clipboard on first use and hand out the shared instance.
fn open_clipboard(slot: &mut Option<SystemClipboard>) -> Result<&mut SystemClipboard> {
    if slot.is_none() {
        *slot = Some(SystemClipboard::new().context("Could not open the system clipboard")?);
    }
    slot.as_mut().context("clipboard slot is empty")
}
