use crate::error::GitError;
use std::{
    path::PathBuf,
    process::{Command, Output},
};

/// Thin wrapper over the `git` CLI in a fixed working directory.
///
/// Captured stdout/stderr and exit codes are the whole contract surface, so
/// behavior matches whatever `git` is on PATH.
pub struct GitClient {
    workdir: PathBuf,
}

impl GitClient {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run a git subcommand, treating a non-zero exit as an error.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] if git cannot be launched and
    /// [`GitError::CommandFailed`] with the captured stderr otherwise.
    pub fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let output = self.run_unchecked(args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(GitError::command_failed(args, &output))
        }
    }

    /// Run a git subcommand where a non-zero exit is meaningful, not fatal.
    fn run_unchecked(&self, args: &[&str]) -> Result<Output, GitError> {
        log::debug!("git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(GitError::Spawn)
    }

    /// Name of the currently checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns an error if `git rev-parse` fails (e.g. not a repository).
    pub fn current_branch(&self) -> Result<String, GitError> {
        let output = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Retrieve updates from `remote`.
    ///
    /// # Errors
    ///
    /// Propagates any git failure; fetch failures are fatal to the sequence.
    pub fn fetch(&self, remote: &str) -> Result<(), GitError> {
        self.run(&["fetch", remote]).map(drop)
    }

    /// Stage every working-tree change.
    ///
    /// # Errors
    ///
    /// Propagates any git failure.
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "."]).map(drop)
    }

    /// Whether anything is staged for commit.
    ///
    /// Probed via the exit code of `git diff --cached --quiet`, which is
    /// non-zero exactly when the index differs from HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error only if git cannot be launched.
    pub fn has_staged_changes(&self) -> Result<bool, GitError> {
        let output = self.run_unchecked(&["diff", "--cached", "--quiet"])?;
        Ok(!output.status.success())
    }

    /// Commit the staged changes with `message`.
    ///
    /// # Errors
    ///
    /// Propagates any git failure.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    /// Replay local commits onto `upstream` with the given extra flags.
    ///
    /// # Errors
    ///
    /// A non-zero exit maps to [`GitError::RebaseConflict`]; the repository
    /// is left mid-rebase for manual resolution.
    pub fn rebase(&self, upstream: &str, extra_flags: &[&str]) -> Result<(), GitError> {
        let mut args = vec!["rebase"];
        args.extend_from_slice(extra_flags);
        args.push(upstream);

        let output = self.run_unchecked(&args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(GitError::RebaseConflict {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    /// Publish `branch` to `remote`.
    ///
    /// # Errors
    ///
    /// Propagates any git failure.
    pub fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run(&["push", remote, branch]).map(drop)
    }
}
