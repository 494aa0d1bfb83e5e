//! Gate orchestration: extract candidates, resolve them, classify, decide.

use tracing::{debug, warn};

use crate::core::classifier::classify;
use crate::core::extract::candidate_paths;
use crate::core::types::{Denial, Operation, Verdict};
use crate::io::config::GateConfig;
use crate::io::hook_input::ParsedInput;
use crate::io::paths::{PathResolver, normalize_candidate};

/// Decide whether `operation` may run under `config`.
///
/// Candidates are checked in request order and the first violation is the
/// verdict; later candidates are not resolved.
pub fn evaluate<R: PathResolver>(
    operation: &Operation,
    config: &GateConfig,
    resolver: &R,
) -> Verdict {
    let kind = operation.kind();
    for candidate in candidate_paths(operation) {
        let Some(resolved) = normalize_candidate(resolver, candidate, &config.worktree_root) else {
            continue;
        };
        let classification = classify(
            &resolved,
            &config.worktree_root,
            config.protected_root.as_deref(),
        );
        debug!(
            %kind,
            candidate,
            resolved = %resolved.display(),
            ?classification,
            "classified candidate"
        );
        if let Some(category) = classification.deny_category() {
            return Verdict::Deny(Denial {
                path: candidate.to_string(),
                kind,
                category,
            });
        }
    }
    Verdict::Allow
}

/// The operation to evaluate, if the payload is gated at all.
///
/// Tools outside the gated set and payloads that could not be parsed yield
/// `None` and are allowed without consulting any configuration.
pub fn gated_operation(input: ParsedInput) -> Option<Operation> {
    match input {
        ParsedInput::Gated(operation) => Some(operation),
        ParsedInput::NotGated { tool_name } => {
            debug!(%tool_name, "tool not gated");
            None
        }
        ParsedInput::Malformed { reason } => {
            warn!(%reason, "allowing unparseable hook input");
            None
        }
    }
}
