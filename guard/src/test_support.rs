//! Test-only helpers for building gate inputs and on-disk layouts.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::path::normalize_lexical;
use crate::core::types::{FileTarget, Operation};
use crate::io::config::GateConfig;
use crate::io::paths::PathResolver;

/// Resolver that never touches the filesystem.
pub struct LexicalResolver;

impl PathResolver for LexicalResolver {
    fn resolve(&self, path: &Path) -> PathBuf {
        normalize_lexical(path)
    }
}

/// Build a `Read` operation for `path`.
pub fn read(path: &str) -> Operation {
    Operation::Read(FileTarget {
        file_path: Some(path.to_string()),
    })
}

/// A protected repository with a worktree nested inside it:
///
/// ```text
/// <tmp>/repo/src/a.py
/// <tmp>/repo/wt-123/src/a.py
/// ```
pub struct Sandbox {
    _temp: TempDir,
    /// Canonical path of the protected repository.
    pub repo: PathBuf,
    /// Canonical path of the worktree.
    pub worktree: PathBuf,
}

impl Sandbox {
    pub fn config(&self) -> GateConfig {
        GateConfig::new(self.worktree.clone(), Some(self.repo.clone()))
    }
}

/// Create a fresh [`Sandbox`] in a temporary directory.
pub fn sandbox() -> Sandbox {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = fs::canonicalize(temp.path()).expect("canonicalize tempdir");
    let repo = root.join("repo");
    let worktree = repo.join("wt-123");
    for dir in [repo.join("src"), worktree.join("src")] {
        fs::create_dir_all(&dir).expect("create sandbox dir");
        fs::write(dir.join("a.py"), "print('hi')\n").expect("write sandbox file");
    }
    Sandbox {
        _temp: temp,
        repo,
        worktree,
    }
}
