pub mod client;
pub mod error;
pub mod strategy;
pub mod sync;

pub use client::GitClient;
pub use error::GitError;
pub use strategy::SyncStrategy;
pub use sync::{commit_message, CommitOutcome, SyncSession};
