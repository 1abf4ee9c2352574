//! changelist - A CLI tool that builds a numbered changelog from git commit subjects.
//!
//! # Overview
//!
//! changelist reads a repository path and a version range (from the command
//! line or the clipboard), runs `git log` over that range, pulls the numbered
//! items out of each commit subject, deduplicates and renumbers them, and
//! copies the resulting list back to the clipboard.

pub mod changelog;
pub mod error;
pub mod git;
pub mod input;
pub mod options;
pub mod output;

// Re-export commonly used types
pub use changelog::{ChangelogBuilder, ChangelogEntry, format_changelog};
pub use error::{ClipboardError, GitError, InputError};
pub use input::TextBuffer;
pub use options::Options;
