//! Roster CLI - the user list in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::UserId;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::settings::SettingsUpdate;
use commands::{apply, diff, list, menu, settings, shell};

/// Roster - a reorderable user list in your terminal
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the roster as the list screen binds it
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run row actions against a fresh roster and show the edits each one causes
    ///
    /// Actions: move:<id>:<delta>, up:<id>, down:<id>, delete:<id>, fire:<id>, details:<id>.
    /// Reads actions from stdin when none are given.
    Apply {
        /// Actions to run, in order
        actions: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reconcile two roster files (JSON arrays of users)
    Diff {
        /// Roster currently on screen
        old: PathBuf,
        /// Roster to show next
        new: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the popup menu for a user row
    Menu {
        /// User ID
        id: UserId,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the roster and act on rows interactively
    Shell,

    /// Show or change roster settings
    Settings {
        /// Number of users to generate
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible rosters
        #[arg(long, conflicts_with = "clear_seed")]
        seed: Option<u64>,
        /// Generate a different roster on every run
        #[arg(long)]
        clear_seed: bool,
        /// Label shown for users without a company
        #[arg(long)]
        unemployed_label: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr, filtered by `ROSTER_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { json } => list::run(json),
        Commands::Apply { actions, json } => apply::run(actions, json),
        Commands::Diff { old, new, json } => diff::run(&old, &new, json),
        Commands::Menu { id, json } => menu::run(id, json),
        Commands::Shell => shell::run(),
        Commands::Settings { count, seed, clear_seed, unemployed_label, json } => {
            let update = SettingsUpdate {
                user_count: count,
                seed,
                clear_seed,
                unemployed_label,
            };
            settings::run(update, json)
        }
    }
}
