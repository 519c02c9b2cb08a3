//! Seed import command
//!
//! Usage: persona seed import <PATH>

use clap::{Args, Subcommand};
use persona_store::config::DatabaseLocation;
use persona_store::seed::import_seed_file;
use persona_store::SessionFactory;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed YAML file into the database
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(factory: &SessionFactory, args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(factory, import_args),
    }
}

fn execute_import(
    factory: &SessionFactory,
    args: ImportArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    // Importing may be the first use of a fresh database file.
    if let DatabaseLocation::File(path) = &factory.config().location {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let summary = factory.with_session(|session| {
        let discriminators = session.discriminators().clone();
        import_seed_file(session.connection_mut(), &args.path, &discriminators)
    })?;

    println!("Imported {} people from {}", summary.inserted(), args.path.display());
    Ok(())
}
