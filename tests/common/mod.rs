//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use changelist::Options;

/// A temporary git repository for testing.
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Path of the working tree as a string.
    pub fn path(&self) -> String {
        self.dir
            .path()
            .to_str()
            .expect("temp dir path is valid UTF-8")
            .to_string()
    }

    /// Options for `from..to` in this repository.
    pub fn options(&self, from: &str, to: &str) -> Options {
        Options::new(&self.path(), from, to)
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        // Each commit rewrites the file so the tree changes
        let file_path = self.dir.path().join("notes.txt");
        let count = self.commit_count();
        std::fs::write(&file_path, format!("{}\n{}", count, message))
            .expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(std::path::Path::new("notes.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a lightweight tag pointing to the given OID.
    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag_lightweight(name, &obj, false)
            .expect("Failed to create lightweight tag");
    }

    fn commit_count(&self) -> usize {
        let Ok(mut revwalk) = self.repo.revwalk() else {
            return 0;
        };
        if revwalk.push_head().is_err() {
            return 0;
        }
        revwalk.count()
    }
}
