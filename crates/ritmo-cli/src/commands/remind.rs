//! Break reminder command handler

use anyhow::Result;
use ritmo_core::{Reminder, ReminderConfig};

/// Run the reminder loop, applying CLI overrides on top of the config file.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or stdin closes while
/// a reminder is waiting for confirmation.
pub async fn remind_command(interval_mins: Option<u64>, message: Option<String>) -> Result<()> {
    let mut config = ReminderConfig::load()?;
    if let Some(minutes) = interval_mins {
        config.interval_seconds = minutes * 60;
    }
    if let Some(message) = message {
        config.message = message;
    }

    Reminder::new(config).run().await
}
