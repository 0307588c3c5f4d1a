//! Wayteller CLI - replay a recorded route against a place file.
//!
//! This binary drives the wayteller library the way a host application
//! would: it feeds position fixes into the observer track, keeps the tile
//! neighborhood's candidates fresh, and prints the announcements the core
//! would hand to a speech renderer.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wayteller", version, about = "Location-aware tour guide core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a route against a place file and print announcements.
    Simulate(commands::simulate::SimulateArgs),
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Simulate(args) => commands::simulate::run(&args),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
