//! Deterministic classification of resolved paths against the gate roots.

use std::path::Path;

use crate::core::path::is_within;
use crate::core::types::Classification;

/// Classify an already-resolved path.
///
/// - `InsideWorktree` if the path is the worktree root or beneath it.
/// - `ProtectedRepo` if not in the worktree but inside `protected_root`.
/// - `OutsideWorktree` otherwise.
///
/// The worktree check runs first, so a worktree nested inside the protected
/// repository stays accessible.
pub fn classify(
    resolved: &Path,
    worktree_root: &Path,
    protected_root: Option<&Path>,
) -> Classification {
    if is_within(resolved, worktree_root) {
        return Classification::InsideWorktree;
    }
    match protected_root {
        Some(root) if is_within(resolved, root) => Classification::ProtectedRepo,
        _ => Classification::OutsideWorktree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKTREE: &str = "/repo/wt-123";
    const PROTECTED: &str = "/repo";

    fn classify_str(path: &str, protected: Option<&str>) -> Classification {
        classify(Path::new(path), Path::new(WORKTREE), protected.map(Path::new))
    }

    #[test]
    fn worktree_root_is_inside() {
        assert_eq!(
            classify_str(WORKTREE, Some(PROTECTED)),
            Classification::InsideWorktree
        );
    }

    #[test]
    fn nested_worktree_wins_over_protected_root() {
        assert_eq!(
            classify_str("/repo/wt-123/src/deep/a.py", Some(PROTECTED)),
            Classification::InsideWorktree
        );
    }

    #[test]
    fn protected_root_itself_is_protected() {
        assert_eq!(
            classify_str("/repo", Some(PROTECTED)),
            Classification::ProtectedRepo
        );
    }

    #[test]
    fn sibling_worktree_is_protected() {
        assert_eq!(
            classify_str("/repo/wt-1234/a.py", Some(PROTECTED)),
            Classification::ProtectedRepo
        );
    }

    #[test]
    fn outside_both_roots() {
        assert_eq!(
            classify_str("/etc/passwd", Some(PROTECTED)),
            Classification::OutsideWorktree
        );
        assert_eq!(
            classify_str("/repository/a.py", Some(PROTECTED)),
            Classification::OutsideWorktree
        );
    }

    #[test]
    fn without_protected_root_everything_else_is_outside() {
        assert_eq!(
            classify_str("/repo/src/a.py", None),
            Classification::OutsideWorktree
        );
        assert_eq!(
            classify_str("/repo/wt-123/a.py", None),
            Classification::InsideWorktree
        );
    }
}
