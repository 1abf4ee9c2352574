//! Collection of run options through a shared text buffer.
//!
//! The handshake is: clear the buffer, wait until it holds non-empty text,
//! take that text as the answer. It runs once per option.

pub mod clipboard;

use std::env;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ClipboardError, InputError};
use crate::options::Options;

pub use clipboard::SystemClipboard;

/// Default delay between clipboard polls (1 second).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Environment variable to override the default poll interval.
pub const POLL_INTERVAL_ENV_VAR: &str = "CHANGELIST_POLL_INTERVAL_MS";

/// Prompts shown for each collected value, in order.
pub const PROMPTS: [&str; 3] = ["    Git Repo: ", "From Version: ", "  To Version: "];

/// A shared text buffer that can be cleared, read, and written.
///
/// This abstraction allows replacing the system clipboard in tests.
#[cfg_attr(test, mockall::automock)]
pub trait TextBuffer {
    /// Empty the buffer.
    fn clear(&mut self) -> Result<(), ClipboardError>;

    /// Current contents. An empty buffer yields an empty string.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Get the configured poll interval.
///
/// Reads from CHANGELIST_POLL_INTERVAL_MS if set, otherwise uses 1000 ms.
/// Logs a warning if the variable is set but not a valid number.
pub fn poll_interval() -> Duration {
    match env::var(POLL_INTERVAL_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}ms",
                    POLL_INTERVAL_ENV_VAR, v, DEFAULT_POLL_INTERVAL_MS
                );
                Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
            }
        },
        _ => Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    }
}

/// Clear the buffer, then block until it holds non-empty text.
///
/// Read errors while waiting are treated as an empty buffer. There is no
/// timeout.
pub fn wait_for_text<B>(buffer: &mut B, interval: Duration) -> Result<String, ClipboardError>
where
    B: TextBuffer + ?Sized,
{
    buffer.clear()?;

    loop {
        match buffer.read_text() {
            Ok(text) if !text.is_empty() => return Ok(text),
            Ok(_) => {}
            Err(e) => debug!("Clipboard read failed while waiting: {}", e),
        }
        thread::sleep(interval);
    }
}

/// Collect repository path, from-version and to-version from the buffer.
///
/// Each prompt is written to `out`, the trimmed answer is echoed after it.
/// Values are not validated.
pub fn collect_options<B, W>(
    buffer: &mut B,
    interval: Duration,
    out: &mut W,
) -> Result<Options, InputError>
where
    B: TextBuffer + ?Sized,
    W: Write,
{
    let mut values = Vec::with_capacity(PROMPTS.len());

    for prompt in PROMPTS {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let value = wait_for_text(buffer, interval)?.trim().to_string();
        writeln!(out, "{}", value)?;
        values.push(value);
    }

    Ok(Options::new(&values[0], &values[1], &values[2]))
}

/// Block until one line is read from `reader`. The content is discarded.
pub fn wait_for_enter<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
