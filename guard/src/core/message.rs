//! Human-readable rendering of a denial for the host to display.

use std::path::Path;

use crate::core::types::{Denial, DenyCategory};

/// Longest offending path shown before truncation, in characters.
pub const MAX_DISPLAY_PATH_CHARS: usize = 200;

/// Render the message written to stderr when a request is blocked.
pub fn render_denial(denial: &Denial, worktree_root: &Path, task_id: Option<&str>) -> String {
    let target = match denial.category {
        DenyCategory::ProtectedRepo => "the protected main repository",
        DenyCategory::OutsideWorktree => "a path outside the task worktree",
    };

    let mut msg = format!(
        "BLOCKED ({category}): {kind} targets {target}.\n",
        category = denial.category,
        kind = denial.kind,
    );
    msg.push_str(&format!("  path:     {}\n", truncate_for_display(&denial.path)));
    msg.push_str(&format!("  worktree: {}\n", worktree_root.display()));
    if let Some(task_id) = task_id {
        msg.push_str(&format!("  task:     {task_id}\n"));
    }
    msg.push_str("Only files inside the worktree may be accessed. ");
    msg.push_str("Use paths relative to the worktree root instead.");
    msg
}

/// Shorten `path` to [`MAX_DISPLAY_PATH_CHARS`], keeping the head.
pub fn truncate_for_display(path: &str) -> String {
    if path.chars().count() <= MAX_DISPLAY_PATH_CHARS {
        return path.to_string();
    }
    let head: String = path.chars().take(MAX_DISPLAY_PATH_CHARS - 3).collect();
    format!("{head}...")
}
