//! End-to-end sync sequences against real git repositories.
//!
//! Each fixture is a work clone wired to a bare origin inside a temp dir, so
//! every step runs against the same `git` CLI the tool shells out to.

use anyhow::{bail, Context, Result};
use ritmo_git::{CommitOutcome, GitClient, GitError, SyncSession, SyncStrategy};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::TempDir;

/// Run a git command in `dir`, returning stdout on success.
fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("running git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git {} failed in {}:\n{stderr}",
            args.join(" "),
            dir.display()
        );
    }

    String::from_utf8(output.stdout).context("git output is not utf-8")
}

struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
    work: PathBuf,
    origin: PathBuf,
}

impl Fixture {
    /// Bare origin plus a work clone with one initial commit pushed.
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("creating temp dir")?;
        let root = fs::canonicalize(temp_dir.path()).context("canonicalizing temp dir")?;
        let origin = root.join("origin.git");
        let work = root.join("work");
        fs::create_dir(&origin)?;
        fs::create_dir(&work)?;

        run_git(&origin, &["init", "--bare", "-b", "main"])?;
        run_git(&work, &["init", "-b", "main"])?;
        run_git(&work, &["config", "user.name", "Test"])?;
        run_git(&work, &["config", "user.email", "test@test.com"])?;
        run_git(
            &work,
            &["remote", "add", "origin", origin.to_str().unwrap()],
        )?;

        fs::write(work.join("file.txt"), "one\ntwo\nthree\n")?;
        run_git(&work, &["add", "."])?;
        run_git(&work, &["commit", "-m", "initial"])?;
        run_git(&work, &["push", "-u", "origin", "main"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            work,
            origin,
        })
    }

    fn session(&self, strategy: SyncStrategy) -> SyncSession {
        SyncSession::new(GitClient::new(&self.work), strategy)
    }

    /// Advance origin/main through a second clone, rewriting `file.txt`.
    fn advance_remote(&self, content: &str) -> Result<()> {
        let other = self.root.join("other");
        run_git(
            &self.root,
            &["clone", self.origin.to_str().unwrap(), "other"],
        )?;
        run_git(&other, &["config", "user.name", "Test"])?;
        run_git(&other, &["config", "user.email", "test@test.com"])?;
        fs::write(other.join("file.txt"), content)?;
        run_git(&other, &["commit", "-am", "remote change"])?;
        run_git(&other, &["push", "origin", "main"])?;
        Ok(())
    }

    fn origin_head(&self) -> Result<String> {
        Ok(run_git(&self.origin, &["rev-parse", "main"])?.trim().to_string())
    }

    fn work_head(&self) -> Result<String> {
        Ok(run_git(&self.work, &["rev-parse", "HEAD"])?.trim().to_string())
    }
}

#[test]
fn clean_tree_skips_commit_and_pushes() -> Result<()> {
    let fixture = Fixture::new()?;
    let session = fixture.session(SyncStrategy::Manual);

    let branch = session.current_branch()?;
    assert_eq!(branch, "main");

    session.fetch()?;
    assert_eq!(session.stage_and_commit()?, CommitOutcome::NothingToCommit);
    session.rebase(&branch)?;
    session.push(&branch)?;

    assert_eq!(fixture.origin_head()?, fixture.work_head()?);
    Ok(())
}

#[test]
fn dirty_tree_creates_one_timestamped_commit() -> Result<()> {
    let fixture = Fixture::new()?;
    fs::write(fixture.work.join("notes.txt"), "local edit\n")?;

    let session = fixture.session(SyncStrategy::Manual);
    let branch = session.current_branch()?;

    session.fetch()?;
    let outcome = session.stage_and_commit()?;
    let CommitOutcome::Committed(message) = outcome else {
        bail!("expected a commit, got {outcome:?}");
    };
    assert!(
        message.starts_with("auto-sync commit at "),
        "unexpected message: {message}"
    );

    let subject = run_git(&fixture.work, &["log", "-1", "--format=%s"])?;
    assert_eq!(subject.trim(), message);

    // Second pass stages nothing and must not commit again.
    assert_eq!(session.stage_and_commit()?, CommitOutcome::NothingToCommit);

    session.rebase(&branch)?;
    session.push(&branch)?;
    assert_eq!(fixture.origin_head()?, fixture.work_head()?);
    Ok(())
}

#[test]
fn conflicting_rebase_stops_before_push() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.advance_remote("REMOTE\ntwo\nthree\n")?;
    fs::write(fixture.work.join("file.txt"), "LOCAL\ntwo\nthree\n")?;

    let session = fixture.session(SyncStrategy::Manual);
    let branch = session.current_branch()?;
    let origin_before = fixture.origin_head()?;

    session.fetch()?;
    assert!(matches!(
        session.stage_and_commit()?,
        CommitOutcome::Committed(_)
    ));

    let err = session.rebase(&branch).unwrap_err();
    assert!(
        matches!(err, GitError::RebaseConflict { .. }),
        "expected conflict, got {err:?}"
    );

    // Nothing was pushed.
    assert_eq!(fixture.origin_head()?, origin_before);
    Ok(())
}

#[test]
fn local_wins_resolves_in_favor_of_local_commits() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.advance_remote("REMOTE\ntwo\nthree\n")?;
    fs::write(fixture.work.join("file.txt"), "LOCAL\ntwo\nthree\n")?;

    let session = fixture.session(SyncStrategy::LocalWins);
    let branch = session.current_branch()?;

    session.fetch()?;
    session.stage_and_commit()?;
    session.rebase(&branch)?;
    session.push(&branch)?;

    let content = fs::read_to_string(fixture.work.join("file.txt"))?;
    assert!(content.starts_with("LOCAL"), "content: {content}");
    assert_eq!(fixture.origin_head()?, fixture.work_head()?);
    Ok(())
}

#[test]
fn remote_wins_resolves_in_favor_of_remote_branch() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.advance_remote("REMOTE\ntwo\nthree\n")?;
    fs::write(fixture.work.join("file.txt"), "LOCAL\ntwo\nthree\n")?;

    let session = fixture.session(SyncStrategy::RemoteWins);
    let branch = session.current_branch()?;

    session.fetch()?;
    session.stage_and_commit()?;
    session.rebase(&branch)?;
    session.push(&branch)?;

    let content = fs::read_to_string(fixture.work.join("file.txt"))?;
    assert!(content.starts_with("REMOTE"), "content: {content}");
    Ok(())
}

#[test]
fn fetch_failure_surfaces_stderr() -> Result<()> {
    let fixture = Fixture::new()?;
    run_git(&fixture.work, &["remote", "remove", "origin"])?;

    let session = fixture.session(SyncStrategy::Manual);
    let err = session.fetch().unwrap_err();
    let GitError::CommandFailed { command, stderr } = err else {
        bail!("expected command failure, got {err:?}");
    };
    assert_eq!(command, "fetch origin");
    assert!(!stderr.is_empty());
    Ok(())
}
