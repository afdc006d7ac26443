//! colperm: rewrite the permission set of one database collection.
//!
//! Reads the service endpoint, project, API key, database, and collection
//! from the environment, fetches the collection, and replaces its
//! permissions with the fixed policy (public read, authenticated writes,
//! document security on).
//!
//! Usage:
//!   colperm            # same as `colperm apply`
//!   colperm apply
//!   colperm plan       # show what would change, submit nothing

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use colperm_client::HttpCollectionService;
use colperm_contracts::error::ColpermError;
use colperm_core::{run, RunMode};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Rewrite a collection's permissions from the environment configuration.
///
/// Required environment: APPWRITE_ENDPOINT, APPWRITE_PROJECT_ID,
/// APPWRITE_API_KEY, APPWRITE_DATABASE_ID, USER_PROFILES_COLLECTION_ID.
#[derive(Parser)]
#[command(
    name = "colperm",
    version,
    about = "Rewrite the permission set of a database collection"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Fetch the collection and overwrite its permissions (default).
    Apply,
    /// Fetch the collection and print the changes an apply would make.
    Plan,
}

impl Cli {
    fn mode(&self) -> RunMode {
        match self.command {
            None | Some(Command::Apply) => RunMode::Apply,
            Some(Command::Plan) => RunMode::Plan,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so stdout carries only the confirmation.
    // Set RUST_LOG=info (or debug) for request-level detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run(
        |name| std::env::var(name).ok(),
        HttpCollectionService::connect,
        cli.mode(),
    );

    match result {
        Ok(report) => {
            println!("{}", report.confirmation());
        }
        Err(e) => std::process::exit(report_failure(&e)),
    }
}

fn report_failure(err: &ColpermError) -> i32 {
    error!(error = %err, "run failed");
    eprintln!("colperm: {}", err);
    err.exit_code()
}
