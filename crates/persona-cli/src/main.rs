//! persona CLI
//!
//! Read-only reports over the person hierarchy, plus seed import.
//!
//! # Environment variables
//!
//! | Variable                         | Default              |
//! |----------------------------------|----------------------|
//! | `PERSONA_DATABASE_URL`           | `.persona/people.db` |
//! | `PERSONA_DISCRIMINATOR_PERSON`   | `P`                  |
//! | `PERSONA_DISCRIMINATOR_CUSTOMER` | `C`                  |
//! | `PERSONA_DISCRIMINATOR_EMPLOYEE` | `F`                  |
//! | `PERSONA_LOG_PROFILE`            | `development`        |

use clap::{Parser, Subcommand};
use persona_core::logging_facility::{init, Profile};
use persona_store::{DatabaseLocation, SessionFactory, StoreConfig};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "persona")]
#[command(about = "persona - reports over customers, employees and people", long_about = None)]
struct Cli {
    /// Database URL; overrides PERSONA_DATABASE_URL
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every customer: name - monthly income
    Customers,
    /// Print every employee: name - job title - salary
    Employees,
    /// Print every person with a customer/supplier label
    People(commands::report::PeopleArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn build_factory(
    db: Option<String>,
    create_if_missing: bool,
) -> Result<SessionFactory, Box<dyn std::error::Error>> {
    let mut config = StoreConfig::from_env()?.with_create_if_missing(create_if_missing);
    if let Some(url) = db {
        config.location = DatabaseLocation::parse(&url)?;
    }
    Ok(SessionFactory::new(config))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Only seeding may create the database; reports need an existing one.
    let writes = matches!(cli.command, Commands::Seed(_));
    let factory = build_factory(cli.db, writes)?;

    let result = match cli.command {
        Commands::Customers => commands::report::execute_customers(&factory),
        Commands::Employees => commands::report::execute_employees(&factory),
        Commands::People(args) => commands::report::execute_people(&factory, args),
        Commands::Seed(args) => commands::seed::execute(&factory, args),
    };

    factory.shutdown();
    result
}

fn main() {
    dotenvy::dotenv().ok();
    init(Profile::from_env_value(
        std::env::var("PERSONA_LOG_PROFILE").ok().as_deref(),
    ));

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
