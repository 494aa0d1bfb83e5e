//! Diagnostic tracing for the gate.
//!
//! Hosts read a block reason from stderr, so diagnostics share that stream
//! and stay at `warn` unless `RUST_LOG` asks for more. The denial message in
//! `core::message` is printed directly and never filtered.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Later calls keep the first subscriber.
///
/// ```bash
/// echo '{"tool_name":"Read","tool_input":{"file_path":"a.rs"}}' \
///     | RUST_LOG=worktree_guard=debug worktree-guard
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_first_subscriber() {
        init();
        init();
        tracing::warn!("still logging after repeated init");
    }
}
