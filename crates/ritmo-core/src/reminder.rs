use crate::{config::ReminderConfig, gate};
use anyhow::{bail, Result};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Outcome of a suspension point in the reminder loop.
enum Tick {
    Continue,
    Interrupted,
}

/// The break reminder loop.
///
/// On each tick the loop prints the reminder, blocks until the confirmation
/// word is submitted on stdin, then sleeps for the configured interval. Both
/// suspension points race against Ctrl-C, which is the only way out.
pub struct Reminder {
    message: String,
    confirm_word: String,
    interval: Duration,
}

impl Reminder {
    #[must_use]
    pub fn new(config: ReminderConfig) -> Self {
        let interval = config.interval();
        Self {
            message: config.message,
            confirm_word: config.confirm_word,
            interval,
        }
    }

    /// Run the reminder loop until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin closes while waiting for confirmation.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        log::info!(
            "Reminder loop started (interval: {}s)",
            self.interval.as_secs()
        );

        loop {
            self.show_alert();
            if matches!(self.await_confirmation(&mut lines).await?, Tick::Interrupted) {
                break;
            }
            log::debug!("Confirmed, sleeping for {}s", self.interval.as_secs());
            if matches!(self.sleep_between_alerts().await, Tick::Interrupted) {
                break;
            }
        }

        log::info!("Reminder loop stopped.");
        Ok(())
    }

    fn show_alert(&self) {
        println!("\n{}\n", self.message);
        println!(
            "Type '{}' and press Enter to continue",
            self.confirm_word
        );
    }

    /// Block until a submitted line passes the gate.
    ///
    /// Rejected input is discarded silently and the gate stays closed.
    async fn await_confirmation<R>(&self, lines: &mut Lines<R>) -> Result<Tick>
    where
        R: AsyncBufRead + Unpin,
    {
        loop {
            tokio::select! {
                line = lines.next_line() => match line? {
                    Some(text) if gate::accepts(&text, &self.confirm_word) => {
                        return Ok(Tick::Continue);
                    }
                    Some(_) => {}
                    None => bail!("stdin closed while waiting for confirmation"),
                },
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Received Ctrl-C, shutting down...");
                    return Ok(Tick::Interrupted);
                }
            }
        }
    }

    async fn sleep_between_alerts(&self) -> Tick {
        tokio::select! {
            () = tokio::time::sleep(self.interval) => Tick::Continue,
            _ = tokio::signal::ctrl_c() => {
                log::info!("Received Ctrl-C, shutting down...");
                Tick::Interrupted
            }
        }
    }
}
