//! I/O helpers for the gate: environment, stdin and the filesystem.

pub mod config;
pub mod hook_input;
pub mod paths;
