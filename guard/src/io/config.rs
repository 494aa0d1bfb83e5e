//! Gate configuration resolved once per invocation from the environment.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::io::paths::{FsResolver, PathResolver};

/// Worktree the agent may operate in. Defaults to the current directory.
pub const WORKTREE_ENV: &str = "ORC_WORKTREE_PATH";
/// Protected main repository. Unset or empty disables protected checks.
pub const PROTECTED_ENV: &str = "ORC_MAIN_REPO_PATH";
/// Task owning the worktree, shown in denial messages.
pub const TASK_ID_ENV: &str = "ORC_TASK_ID";

/// Resolved gate configuration.
///
/// Roots are canonical absolute paths. Tests may build this directly with
/// [`GateConfig::new`] instead of going through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub worktree_root: PathBuf,
    pub protected_root: Option<PathBuf>,
    pub task_id: Option<String>,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub worktree: Option<PathBuf>,
    pub protected: Option<PathBuf>,
}

impl GateConfig {
    /// Build a configuration from already-resolved roots.
    pub fn new(worktree_root: impl Into<PathBuf>, protected_root: Option<PathBuf>) -> Self {
        Self {
            worktree_root: worktree_root.into(),
            protected_root,
            task_id: None,
        }
    }

    /// Resolve configuration from process environment variables.
    pub fn from_env(overrides: &ConfigOverrides) -> Result<Self> {
        Self::from_lookup(overrides, |key| env::var(key).ok(), &FsResolver)
    }

    /// Resolve configuration using `lookup` for environment values.
    ///
    /// Missing or empty values fall back to their defaults. Roots that do not
    /// exist on disk are still accepted. The only failure is an unreadable
    /// current directory when one is needed.
    pub fn from_lookup<F, R>(
        overrides: &ConfigOverrides,
        lookup: F,
        resolver: &R,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        R: PathResolver,
    {
        let worktree = overrides
            .worktree
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| non_empty(&lookup, WORKTREE_ENV));
        let worktree = match worktree {
            Some(path) => path,
            None => env::current_dir().context("read current directory for worktree root")?,
        };
        let worktree_root = resolver.resolve(&absolute(&worktree)?);

        let protected_root = match overrides
            .protected
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| non_empty(&lookup, PROTECTED_ENV))
        {
            Some(path) => Some(resolver.resolve(&absolute(&path)?)),
            None => None,
        };

        let task_id = lookup(TASK_ID_ENV).filter(|value| !value.trim().is_empty());

        debug!(
            worktree = %worktree_root.display(),
            protected = ?protected_root,
            task_id = ?task_id,
            "resolved gate config"
        );

        Ok(Self {
            worktree_root,
            protected_root,
            task_id,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("make {} absolute", path.display()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::test_support::{LexicalResolver, sandbox};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_roots_and_task_from_lookup() {
        let cfg = GateConfig::from_lookup(
            &ConfigOverrides::default(),
            lookup_from(&[
                (WORKTREE_ENV, "/repo/wt-123/"),
                (PROTECTED_ENV, "/repo"),
                (TASK_ID_ENV, "TASK-001"),
            ]),
            &LexicalResolver,
        )
        .expect("config");
        assert_eq!(cfg.worktree_root, PathBuf::from("/repo/wt-123"));
        assert_eq!(cfg.protected_root, Some(PathBuf::from("/repo")));
        assert_eq!(cfg.task_id.as_deref(), Some("TASK-001"));
    }

    #[test]
    fn empty_protected_root_disables_protection() {
        let cfg = GateConfig::from_lookup(
            &ConfigOverrides::default(),
            lookup_from(&[(WORKTREE_ENV, "/repo/wt-123"), (PROTECTED_ENV, "")]),
            &LexicalResolver,
        )
        .expect("config");
        assert_eq!(cfg.protected_root, None);
        assert_eq!(cfg.task_id, None);
    }

    #[test]
    fn missing_worktree_defaults_to_current_dir() {
        let cfg =
            GateConfig::from_lookup(&ConfigOverrides::default(), lookup_from(&[]), &FsResolver)
                .expect("config");
        let cwd = env::current_dir().expect("cwd");
        assert_eq!(cfg.worktree_root, FsResolver.resolve(&cwd));
        assert_eq!(cfg.protected_root, None);
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            worktree: Some(PathBuf::from("/other/wt")),
            protected: Some(PathBuf::from("/other")),
        };
        let cfg = GateConfig::from_lookup(
            &overrides,
            lookup_from(&[(WORKTREE_ENV, "/repo/wt-123"), (PROTECTED_ENV, "/repo")]),
            &LexicalResolver,
        )
        .expect("config");
        assert_eq!(cfg.worktree_root, PathBuf::from("/other/wt"));
        assert_eq!(cfg.protected_root, Some(PathBuf::from("/other")));
    }

    #[test]
    fn nonexistent_roots_are_accepted() {
        let sb = sandbox();
        let missing = sb.repo.join("no-such-worktree");
        let cfg = GateConfig::from_lookup(
            &ConfigOverrides::default(),
            lookup_from(&[(WORKTREE_ENV, missing.to_str().expect("utf-8 path"))]),
            &FsResolver,
        )
        .expect("config");
        assert_eq!(cfg.worktree_root, missing);
    }
}
