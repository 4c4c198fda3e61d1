//! quickcrud CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use quickcrud::commands::CrudCommand;

#[derive(Parser)]
#[command(name = "quickcrud")]
#[command(version)]
#[command(about = "Interactive CRUD scaffolding for Laravel applications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new CRUD resource (model, migration, controller, views)
    Crud,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crud => {
            let cmd = CrudCommand::from_current_dir()?;
            cmd.execute()?;
        }
    }

    Ok(())
}
