//! Commit subject fetching via the system `git` binary.
//!
//! Shells out with `std::process::Command` so the user's git config and
//! repository discovery rules apply unchanged.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::GitError;
use crate::options::Options;

/// Check if git is installed and accessible.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }
    Ok(())
}

/// Arguments passed to `git` for a given range.
pub fn log_args(options: &Options) -> Vec<String> {
    vec![
        "log".to_string(),
        "--pretty=format:%s".to_string(),
        "--reverse".to_string(),
        options.range(),
    ]
}

/// Fetch commit subjects for the options' range, one per line, oldest first.
///
/// Runs in `options.repo` when it is non-empty, otherwise in the process
/// working directory. Fails only when git cannot be started or its output
/// cannot be read. A non-zero exit (unknown revision, not a repository) is
/// logged and whatever git printed on stdout is returned, usually nothing.
pub fn fetch_log(options: &Options) -> Result<String, GitError> {
    check_git_installed()?;

    let args = log_args(options);

    let mut command = Command::new("git");
    command
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = options.working_dir() {
        command.current_dir(dir);
    }

    debug!(?args, dir = ?options.working_dir(), "running git");

    let output = command.output().map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            "git log exited with code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    debug!(bytes = stdout.len(), "git log finished");
    Ok(stdout)
}
