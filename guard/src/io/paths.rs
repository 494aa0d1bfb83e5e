//! Path canonicalization that tolerates paths which do not exist yet.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::core::path::normalize_lexical;

/// Turns an absolute path into the form used for containment checks.
pub trait PathResolver {
    fn resolve(&self, path: &Path) -> PathBuf;
}

/// Resolver backed by the real filesystem.
///
/// Symlinks are resolved for the longest existing prefix of the path,
/// including links whose target does not exist yet; the missing remainder
/// is normalized lexically.
pub struct FsResolver;

impl PathResolver for FsResolver {
    fn resolve(&self, path: &Path) -> PathBuf {
        canonicalize_lenient(path)
    }
}

/// Symlinks followed per resolution before giving up, as in `SYMLOOP_MAX`.
pub const MAX_SYMLINK_HOPS: usize = 40;

/// Canonicalize `path` without requiring it to exist. Never fails.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    let mut hops = 0;
    resolve_with_hops(path, &mut hops)
}

fn resolve_with_hops(path: &Path, hops: &mut usize) -> PathBuf {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        let Ok(rest) = path.strip_prefix(ancestor) else {
            continue;
        };
        match fs::canonicalize(ancestor) {
            Ok(base) => return normalize_lexical(&base.join(rest)),
            Err(err) => {
                if let Some(target) = dangling_link_target(ancestor)
                    && *hops < MAX_SYMLINK_HOPS
                {
                    *hops += 1;
                    trace!(
                        link = %ancestor.display(),
                        target = %target.display(),
                        "following dangling symlink"
                    );
                    return resolve_with_hops(&target.join(rest), hops);
                }
                trace!(path = %ancestor.display(), %err, "prefix not resolvable");
            }
        }
    }
    normalize_lexical(path)
}

/// Target of `path` if it is itself a symlink, made absolute against the
/// link's parent directory.
fn dangling_link_target(path: &Path) -> Option<PathBuf> {
    let meta = fs::symlink_metadata(path).ok()?;
    if !meta.file_type().is_symlink() {
        return None;
    }
    let target = fs::read_link(path).ok()?;
    match path.parent() {
        Some(parent) => Some(parent.join(target)),
        None => Some(target),
    }
}

/// Resolve a declared candidate against the worktree root.
///
/// Relative candidates are joined onto `worktree_root` before resolution.
/// Returns `None` for an empty candidate.
pub fn normalize_candidate<R: PathResolver>(
    resolver: &R,
    candidate: &str,
    worktree_root: &Path,
) -> Option<PathBuf> {
    if candidate.is_empty() {
        return None;
    }
    let path = Path::new(candidate);
    if path.is_absolute() {
        Some(resolver.resolve(path))
    } else {
        Some(resolver.resolve(&worktree_root.join(path)))
    }
}
