pub mod config;
pub mod gate;
pub mod reminder;

pub use config::ReminderConfig;
pub use reminder::Reminder;
