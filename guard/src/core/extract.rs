//! Candidate path extraction for each gated operation.

use std::path::is_separator;

use crate::core::types::{FileTarget, Operation};

/// Return the declared path candidates of `operation` in evaluation order.
///
/// Missing and empty fields contribute nothing. For `Glob`, the search root
/// comes first and an absolute `pattern` follows it.
pub fn candidate_paths(operation: &Operation) -> Vec<&str> {
    let mut candidates = Vec::new();
    match operation {
        Operation::Read(target) | Operation::Write(target) | Operation::Edit(target) => {
            push_file(&mut candidates, target);
        }
        Operation::MultiEdit(target) => {
            push(&mut candidates, target.file_path.as_deref());
            for edit in &target.edits {
                push_file(&mut candidates, edit);
            }
        }
        Operation::Glob(target) => {
            push(&mut candidates, target.path.as_deref());
            if let Some(pattern) = target.pattern.as_deref()
                && pattern.starts_with(is_separator)
            {
                candidates.push(pattern);
            }
        }
        Operation::Grep(target) => push(&mut candidates, target.path.as_deref()),
    }
    candidates
}

fn push_file<'a>(candidates: &mut Vec<&'a str>, target: &'a FileTarget) {
    push(candidates, target.file_path.as_deref());
}

fn push<'a>(candidates: &mut Vec<&'a str>, value: Option<&'a str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        candidates.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GlobTarget, GrepTarget, MultiEditTarget};

    fn file(path: &str) -> FileTarget {
        FileTarget {
            file_path: Some(path.to_string()),
        }
    }

    #[test]
    fn single_path_kinds_extract_file_path() {
        for op in [
            Operation::Read(file("a.py")),
            Operation::Write(file("a.py")),
            Operation::Edit(file("a.py")),
        ] {
            assert_eq!(candidate_paths(&op), vec!["a.py"]);
        }
    }

    #[test]
    fn missing_and_empty_paths_are_skipped() {
        assert!(candidate_paths(&Operation::Read(FileTarget::default())).is_empty());
        assert!(candidate_paths(&Operation::Write(file(""))).is_empty());
        assert!(candidate_paths(&Operation::Grep(GrepTarget::default())).is_empty());
    }

    #[test]
    fn multi_edit_keeps_request_order() {
        let op = Operation::MultiEdit(MultiEditTarget {
            file_path: None,
            edits: vec![file("ok.py"), FileTarget::default(), file("/repo/secret.py")],
        });
        assert_eq!(candidate_paths(&op), vec!["ok.py", "/repo/secret.py"]);
    }

    #[test]
    fn multi_edit_top_level_path_comes_first() {
        let op = Operation::MultiEdit(MultiEditTarget {
            file_path: Some("main.rs".to_string()),
            edits: vec![file("lib.rs")],
        });
        assert_eq!(candidate_paths(&op), vec!["main.rs", "lib.rs"]);
    }

    #[test]
    fn glob_absolute_pattern_is_a_candidate() {
        let op = Operation::Glob(GlobTarget {
            path: Some("src".to_string()),
            pattern: Some("/repo/**/*.py".to_string()),
        });
        assert_eq!(candidate_paths(&op), vec!["src", "/repo/**/*.py"]);
    }

    #[test]
    fn glob_relative_pattern_is_not_a_candidate() {
        let op = Operation::Glob(GlobTarget {
            path: None,
            pattern: Some("**/*.py".to_string()),
        });
        assert!(candidate_paths(&op).is_empty());
    }

    #[test]
    fn grep_extracts_search_root() {
        let op = Operation::Grep(GrepTarget {
            path: Some("/etc".to_string()),
        });
        assert_eq!(candidate_paths(&op), vec!["/etc"]);
    }
}
