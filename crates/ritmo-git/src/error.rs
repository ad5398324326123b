use std::process::Output;
use thiserror::Error;

/// Failures surfaced by the `git` CLI.
#[derive(Debug, Error)]
pub enum GitError {
    /// A git subcommand exited non-zero.
    #[error("git {command} failed:\n  {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// Rebase stopped on conflicts; manual resolution is required.
    #[error("rebase stopped on conflicts")]
    RebaseConflict { stderr: String },

    /// The git binary could not be spawned at all.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
}

impl GitError {
    pub(crate) fn command_failed(args: &[&str], output: &Output) -> Self {
        Self::CommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}
