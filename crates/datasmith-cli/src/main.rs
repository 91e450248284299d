//! Datasmith CLI - seeded synthetic dataset generator.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Weather {
            start_year,
            end_year,
            seed,
            output,
        } => commands::weather::run(start_year, end_year, seed, output, cli.verbose),

        Commands::Kpi {
            start_date,
            days,
            seed,
            output,
        } => commands::kpi::run(start_date, days, seed, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
