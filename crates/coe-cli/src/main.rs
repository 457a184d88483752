//! # coe CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; the demo subcommands
//! drive the console reducer over the seeded store, the remote
//! subcommands talk to the live backend.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coe_cli::console::{
    run_advance, run_export, run_inbox, run_respond, run_status, AdvanceArgs, ExportArgs,
    InboxArgs, RespondArgs, StatusArgs,
};
use coe_cli::remote::{run_remote, RemoteArgs};

/// Audit CoE Command Center CLI
///
/// Command-center, inbox, and respond views over the demo audit
/// dataset, the SLA fast-forward simulation, Audit Pack export, and
/// live-backend fetch/submit.
#[derive(Parser, Debug)]
#[command(name = "coe", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the audit command center (metrics + domain status table).
    Status(StatusArgs),

    /// Show the POC task inbox for the active role.
    Inbox(InboxArgs),

    /// Open an assignment and record responses, evidence, or completion.
    Respond(RespondArgs),

    /// Fast-forward every assignment one SLA step (demo simulation).
    Advance(AdvanceArgs),

    /// Export the role-scoped Audit Pack as a text file.
    Export(ExportArgs),

    /// Fetch from or submit to the live audit backend.
    Remote(RemoteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("coe CLI starting");

    let result = match cli.command {
        Commands::Status(args) => run_status(&args),
        Commands::Inbox(args) => run_inbox(&args),
        Commands::Respond(args) => run_respond(&args),
        Commands::Advance(args) => run_advance(&args),
        Commands::Export(args) => run_export(&args),
        Commands::Remote(args) => run_remote(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
