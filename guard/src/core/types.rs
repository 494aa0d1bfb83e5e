//! Shared deterministic types for the gate's core logic.
//!
//! These types define stable contracts between core components. They should not
//! depend on external state or I/O and must remain deterministic across runs.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// File-oriented tool kinds the gate applies to.
///
/// Any tool name outside this set is not gated and is always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Read,
    Write,
    Edit,
    MultiEdit,
    Glob,
    Grep,
}

impl OperationKind {
    /// Map a host tool name to a gated kind. Matching is exact.
    pub fn from_tool_name(name: &str) -> Option<Self> {
        match name {
            "Read" => Some(Self::Read),
            "Write" => Some(Self::Write),
            "Edit" => Some(Self::Edit),
            "MultiEdit" => Some(Self::MultiEdit),
            "Glob" => Some(Self::Glob),
            "Grep" => Some(Self::Grep),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Edit => "Edit",
            Self::MultiEdit => "MultiEdit",
            Self::Glob => "Glob",
            Self::Grep => "Grep",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-path payload shared by `Read`, `Write` and `Edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_path: Option<String>,
}

/// `MultiEdit` payload. Hosts send the file once at the top level; older
/// payloads carry a path on each edit entry instead. Both are gated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MultiEditTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_edits")]
    pub edits: Vec<FileTarget>,
}

/// `Glob` payload. An absolute `pattern` is a path candidate of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pattern: Option<String>,
}

/// `Grep` payload. The search pattern is a regex, never a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GrepTarget {
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,
}

/// A path field that is not a string carries no path.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(path) => Some(path),
        _ => None,
    })
}

/// Decode each edit entry on its own so one bad entry cannot hide the others.
fn lenient_edits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<FileTarget>, D::Error> {
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| FileTarget::deserialize(entry).ok())
        .collect())
}

/// A gated operation with its typed, path-bearing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Read(FileTarget),
    Write(FileTarget),
    Edit(FileTarget),
    MultiEdit(MultiEditTarget),
    Glob(GlobTarget),
    Grep(GrepTarget),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Read(_) => OperationKind::Read,
            Self::Write(_) => OperationKind::Write,
            Self::Edit(_) => OperationKind::Edit,
            Self::MultiEdit(_) => OperationKind::MultiEdit,
            Self::Glob(_) => OperationKind::Glob,
            Self::Grep(_) => OperationKind::Grep,
        }
    }
}

/// Where a resolved path sits relative to the configured roots.
///
/// Exactly one variant applies to any path; worktree membership is decided
/// before protected-area membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    InsideWorktree,
    ProtectedRepo,
    OutsideWorktree,
}

impl Classification {
    /// The denial category for this classification, or `None` if allowed.
    pub fn deny_category(self) -> Option<DenyCategory> {
        match self {
            Self::InsideWorktree => None,
            Self::ProtectedRepo => Some(DenyCategory::ProtectedRepo),
            Self::OutsideWorktree => Some(DenyCategory::OutsideWorktree),
        }
    }
}

/// Why a path was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyCategory {
    /// Path is inside the protected repository but not inside the worktree.
    ProtectedRepo,
    /// Path is outside both the worktree and the protected repository.
    OutsideWorktree,
}

impl DenyCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProtectedRepo => "protected-repo",
            Self::OutsideWorktree => "outside-worktree",
        }
    }
}

impl fmt::Display for DenyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first offending candidate of a blocked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// Candidate exactly as the request declared it (before normalization).
    pub path: String,
    pub kind: OperationKind,
    pub category: DenyCategory,
}

/// Final decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(Denial),
}

impl Verdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}
