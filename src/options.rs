//! Run options: repository path and version range.

use std::path::Path;

/// The three inputs of a run.
///
/// Values are stored trimmed. An empty `repo` means the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub repo: String,
    pub from_version: String,
    pub to_version: String,
}

impl Options {
    pub fn new(repo: &str, from_version: &str, to_version: &str) -> Self {
        Self {
            repo: repo.trim().to_string(),
            from_version: from_version.trim().to_string(),
            to_version: to_version.trim().to_string(),
        }
    }

    /// Revision range in `git log` syntax (`<from>..<to>`).
    pub fn range(&self) -> String {
        format!("{}..{}", self.from_version, self.to_version)
    }

    /// Directory to run git in, or `None` for the process working directory.
    pub fn working_dir(&self) -> Option<&Path> {
        if self.repo.is_empty() {
            None
        } else {
            Some(Path::new(&self.repo))
        }
    }
}
