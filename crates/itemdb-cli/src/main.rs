//! itemdb CLI
//!
//! Interactive menu over the item record store

use clap::{Parser, ValueEnum};
use itemdb_core::logging_facility::{self, Profile};
use itemdb_store::ItemStore;
use std::path::PathBuf;

mod commands;
mod menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable log lines on stderr
    Pretty,
    /// JSON log lines on stderr
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "itemdb")]
#[command(about = "itemdb - Manage named items in a local SQLite file", long_about = None)]
struct Cli {
    /// Store file (created if missing)
    #[arg(long, default_value = "items.db")]
    db: PathBuf,

    /// Log output format (filter with RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.into());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ItemStore::open(&cli.db)?;
    tracing::info!(db = %cli.db.display(), "session started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = menu::run(&store, stdin.lock(), stdout.lock());

    // Release the store before reporting how the session ended
    let closed = store.close();
    outcome?;
    closed?;

    tracing::info!("session ended");
    Ok(())
}
