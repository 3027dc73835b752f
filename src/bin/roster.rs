//! Roster CLI
//!
//! Runs the interactive menu, or a single operation when a subcommand is given.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use roster::config::SyncStrategy;
use roster::menu::{Action, Menu};
use roster::{Config, RecordStore, StudentRecord};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Student record manager backed by a text file")]
#[command(version)]
struct Args {
    /// Backing file
    #[arg(short, long, default_value = "students.txt")]
    file: String,

    /// fsync the file after every write
    #[arg(long)]
    sync: bool,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a record
    Add {
        /// Roll number
        roll: String,

        /// Student name
        name: String,

        /// Marks, stored as text
        marks: String,
    },

    /// Print every record
    List,

    /// Print the first record with this roll
    Search {
        /// Roll number to find
        roll: String,
    },

    /// Remove every record with this roll
    Delete {
        /// Roll number to remove
        roll: String,
    },
}

impl From<Commands> for Action {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Add { roll, name, marks } => Action::Add(StudentRecord::new(roll, name, marks)),
            Commands::List => Action::View,
            Commands::Search { roll } => Action::Search { roll },
            Commands::Delete { roll } => Action::Delete { roll },
        }
    }
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with menu output
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,roster=info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("Roster v{}", roster::VERSION);

    let sync_strategy = if args.sync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::OsBuffered
    };

    let config = Config::builder()
        .store_path(&args.file)
        .sync_strategy(sync_strategy)
        .build();

    let store = match RecordStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        path = %store.path().display(),
        sync = ?store.config().sync_strategy,
        "Store ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&store, stdin.lock(), stdout.lock());

    let outcome = match args.command {
        Some(command) => menu.execute(command.into()),
        None => menu.run(),
    };

    if let Err(e) = outcome.and_then(|()| Ok(menu.into_output().flush()?)) {
        tracing::error!("Roster failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = store.close() {
        tracing::error!("Failed to close store: {}", e);
        std::process::exit(1);
    }
}
