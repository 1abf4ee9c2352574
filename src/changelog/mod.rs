//! Changelog extraction and rendering.

pub mod format;

pub use format::{
    collect_entries, format_changelog, render, ChangelogBuilder, ChangelogEntry, TEMPORARY_MARKER,
};
