//! Lexical path helpers shared by normalization and classification.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// `..` at the root stays at the root. Leading `..` segments of a relative
/// path are kept.
pub fn normalize_lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True iff `path` equals `root` or lies beneath it.
///
/// Comparison is per component, so `/repo/wt` does not contain `/repo/wt2`
/// and trailing separators on either side are irrelevant.
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
