//! Report commands
//!
//! Usage: persona customers | persona employees | persona people [--precise]

use clap::Args;
use persona_engine::{run_report, LabelMode, Report};
use persona_store::SessionFactory;
use std::io::Write;

#[derive(Debug, Args)]
pub struct PeopleArgs {
    /// Label employees and plain persons as such instead of "supplier"
    #[arg(long)]
    pub precise: bool,
}

pub fn execute_customers(factory: &SessionFactory) -> Result<(), Box<dyn std::error::Error>> {
    execute(factory, Report::Customers)
}

pub fn execute_employees(factory: &SessionFactory) -> Result<(), Box<dyn std::error::Error>> {
    execute(factory, Report::Employees)
}

pub fn execute_people(
    factory: &SessionFactory,
    args: PeopleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if args.precise {
        LabelMode::Precise
    } else {
        LabelMode::Literal
    };
    execute(factory, Report::People(mode))
}

fn execute(factory: &SessionFactory, report: Report) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(report, factory, &mut out)?;
    out.flush()?;
    Ok(())
}
