//! Stable exit codes for the gate binary.

/// Operation allowed, or not subject to the gate.
pub const OK: i32 = 0;
/// Gate could not run (unreadable stdin, bad CLI usage, unreadable cwd).
/// Hosts treat this as a non-blocking error.
pub const INVALID: i32 = 1;
/// Operation blocked by policy. The reason is on stderr.
pub const BLOCKED: i32 = 2;
