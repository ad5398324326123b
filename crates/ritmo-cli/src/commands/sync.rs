//! Interactive fetch / commit / rebase / push workflow
//!
//! One user decision point (the conflict strategy), then a fixed sequence of
//! git steps. The first failure prints the captured stderr and exits with
//! status 1; a user interrupt exits with status 0.

use anyhow::Result;
use ritmo_git::{CommitOutcome, GitClient, GitError, SyncSession, SyncStrategy};
use std::io::{self, BufRead, Write};
use tokio::task;

/// Run the sync workflow, racing it against Ctrl-C.
///
/// # Errors
///
/// Returns an error only if the blocking task itself cannot be joined;
/// workflow failures print their message and exit the process directly.
pub async fn sync_command() -> Result<()> {
    let sequence = task::spawn_blocking(run_sequence);

    tokio::select! {
        joined = sequence => match joined? {
            Ok(()) => Ok(()),
            Err(e) => {
                report_failure(&e);
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nAborted by user.");
            Ok(())
        }
    }
}

fn run_sequence() -> Result<()> {
    let strategy = prompt_strategy()?;
    println!("\nStrategy: {}", strategy.label());

    let session = SyncSession::new(GitClient::new(std::env::current_dir()?), strategy);

    let branch = session.current_branch()?;
    println!("Branch:   {branch}");

    println!("\n-> Fetching remote updates...");
    session.fetch()?;

    println!("-> Staging local changes...");
    match session.stage_and_commit()? {
        CommitOutcome::Committed(message) => println!("  Committed: {message}"),
        CommitOutcome::NothingToCommit => println!("  No local changes to commit."),
    }

    println!("-> Rebasing onto origin/{branch}...");
    session.rebase(&branch)?;

    println!("-> Pushing to origin/{branch}...");
    session.push(&branch)?;

    println!("\nSync completed successfully.");
    Ok(())
}

/// Read one of the three fixed choices, reprompting indefinitely on
/// invalid input.
fn prompt_strategy() -> Result<SyncStrategy> {
    println!("\nSelect sync strategy:");
    for strategy in SyncStrategy::ALL {
        println!("  {}) {}", strategy.key(), strategy.label());
    }

    let stdin = io::stdin();
    loop {
        print!("\nEnter choice [1-3]: ");
        io::stdout().flush()?;

        let mut choice = String::new();
        if stdin.lock().read_line(&mut choice)? == 0 {
            anyhow::bail!("stdin closed while selecting a strategy");
        }

        match SyncStrategy::from_choice(&choice) {
            Some(strategy) => return Ok(strategy),
            None => println!("  Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

fn report_failure(error: &anyhow::Error) {
    match error.downcast_ref::<GitError>() {
        Some(GitError::RebaseConflict { stderr }) => {
            log::debug!("rebase stderr: {stderr}");
            println!("\nRebase conflict detected.");
            println!("  Resolve conflicts manually, then run:");
            println!("    git rebase --continue");
            println!("  Or abort with:");
            println!("    git rebase --abort");
        }
        Some(GitError::CommandFailed { stderr, .. }) => {
            println!("\nGit command failed:\n  {stderr}");
        }
        _ => println!("\nSync failed: {error:#}"),
    }
}
