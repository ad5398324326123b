use crate::{client::GitClient, error::GitError, strategy::SyncStrategy};
use chrono::{DateTime, Local};

/// What [`SyncSession::stage_and_commit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created with this message.
    Committed(String),
    /// The working tree was clean; nothing staged, no commit.
    NothingToCommit,
}

/// Commit message for auto-created sync commits.
#[must_use]
pub fn commit_message(now: DateTime<Local>) -> String {
    format!("auto-sync commit at {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// One run of the fetch / commit / rebase / push sequence.
///
/// The steps are linear with no branching except on failure; the first
/// failing step aborts the sequence and there are no retries.
pub struct SyncSession {
    client: GitClient,
    strategy: SyncStrategy,
}

impl SyncSession {
    #[must_use]
    pub fn new(client: GitClient, strategy: SyncStrategy) -> Self {
        Self { client, strategy }
    }

    /// Branch the whole sequence operates on.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is not a git repository.
    pub fn current_branch(&self) -> Result<String, GitError> {
        self.client.current_branch()
    }

    /// Step 1: retrieve remote updates.
    ///
    /// # Errors
    ///
    /// Fetch failures are fatal and propagate unchanged.
    pub fn fetch(&self) -> Result<(), GitError> {
        self.client.fetch("origin")
    }

    /// Step 2: stage everything; commit only when something is staged.
    ///
    /// # Errors
    ///
    /// Propagates any git failure from staging or committing.
    pub fn stage_and_commit(&self) -> Result<CommitOutcome, GitError> {
        self.client.stage_all()?;

        if !self.client.has_staged_changes()? {
            log::debug!("nothing staged, skipping commit");
            return Ok(CommitOutcome::NothingToCommit);
        }

        let message = commit_message(Local::now());
        self.client.commit(&message)?;
        Ok(CommitOutcome::Committed(message))
    }

    /// Step 3: replay local commits onto the fetched remote branch, using
    /// the strategy's conflict-resolution flags.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RebaseConflict`] when the rebase cannot complete;
    /// no automatic recovery is attempted.
    pub fn rebase(&self, branch: &str) -> Result<(), GitError> {
        let upstream = format!("origin/{branch}");
        self.client.rebase(&upstream, self.strategy.rebase_flags())
    }

    /// Step 4: publish the rebased branch.
    ///
    /// # Errors
    ///
    /// Push failures are fatal and propagate unchanged.
    pub fn push(&self, branch: &str) -> Result<(), GitError> {
        self.client.push("origin", branch)
    }
}
