mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ritmo")]
#[command(about = "Break reminders and a one-shot git sync workflow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the break reminder loop until interrupted
    Remind {
        /// Minutes between reminders (overrides the config file)
        #[arg(short, long)]
        interval: Option<u64>,
        /// Message shown on each reminder (overrides the config file)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Fetch, commit, rebase and push the current branch
    Sync,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let result = match cli.command {
        Commands::Remind { interval, message } => {
            commands::remind::remind_command(interval, message).await
        }
        Commands::Sync => commands::sync::sync_command().await,
    };

    // stdin reads hand off to tokio's blocking pool; one still in flight
    // after Ctrl-C would stall runtime shutdown, so exit directly.
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
