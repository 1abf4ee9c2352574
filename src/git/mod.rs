//! Git operations using the system `git` binary.

pub mod log;

pub use log::{check_git_installed, fetch_log, log_args};
