//! Worktree isolation gate.
//!
//! Reads one tool-call payload (`tool_name` + `tool_input` JSON) from stdin
//! and exits with a code from `exit_codes`: `0` to allow, `2` to block with
//! the reason on stderr.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use worktree_guard::core::message::render_denial;
use worktree_guard::core::types::Verdict;
use worktree_guard::exit_codes;
use worktree_guard::gate::{evaluate, gated_operation};
use worktree_guard::io::config::{ConfigOverrides, GateConfig};
use worktree_guard::io::hook_input::{parse_hook_bytes, read_stdin};
use worktree_guard::io::paths::FsResolver;
use worktree_guard::logging;

#[derive(Parser)]
#[command(
    name = "worktree-guard",
    version,
    about = "Block agent file operations that leave the task worktree"
)]
struct Cli {
    /// Worktree root. Overrides `ORC_WORKTREE_PATH`; defaults to the current directory.
    #[arg(long, value_name = "PATH")]
    worktree: Option<PathBuf>,

    /// Protected repository root. Overrides `ORC_MAIN_REPO_PATH`.
    #[arg(long, value_name = "PATH")]
    protected: Option<PathBuf>,
}

fn main() {
    logging::init();

    // clap exits with 2 on usage errors, which hosts would read as a block.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{err}");
            process::exit(exit_codes::INVALID);
        }
        Err(err) => {
            print!("{err}");
            process::exit(exit_codes::OK);
        }
    };

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let raw = read_stdin()?;
    let Some(operation) = gated_operation(parse_hook_bytes(&raw)) else {
        return Ok(exit_codes::OK);
    };
    let config = GateConfig::from_env(&ConfigOverrides {
        worktree: cli.worktree.clone(),
        protected: cli.protected.clone(),
    })?;

    match evaluate(&operation, &config, &FsResolver) {
        Verdict::Allow => {
            debug!("allowed");
            Ok(exit_codes::OK)
        }
        Verdict::Deny(denial) => {
            eprintln!(
                "{}",
                render_denial(&denial, &config.worktree_root, config.task_id.as_deref())
            );
            Ok(exit_codes::BLOCKED)
        }
    }
}
