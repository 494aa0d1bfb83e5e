//! Worktree isolation gate for agent file operations.
//!
//! A host invokes the gate before each file-oriented tool call. The gate
//! resolves every path the call declares and blocks it unless the path lies
//! inside the task worktree. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (extraction, classification,
//!   messages). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (environment, stdin, symlink
//!   resolution). Isolated behind small seams for tests.
//!
//! [`gate`] coordinates core logic with I/O to produce a verdict.

pub mod core;
pub mod exit_codes;
pub mod gate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
