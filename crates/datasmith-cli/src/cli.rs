//! CLI argument definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Datasmith: seeded synthetic dataset generator
#[derive(Parser)]
#[command(name = "datasmith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print dataset statistics after generation
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a daily weather dataset for the built-in Indian cities
    Weather {
        /// First calendar year of the series (inclusive)
        #[arg(long, default_value = "2021")]
        start_year: i32,

        /// Last calendar year of the series (inclusive)
        #[arg(long, default_value = "2025")]
        end_year: i32,

        /// Seed for the random source
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long, default_value = "indian_weather.csv")]
        output: PathBuf,
    },

    /// Generate a daily e-commerce KPI dataset
    Kpi {
        /// First date of the series (YYYY-MM-DD)
        #[arg(long, default_value = "2024-02-15")]
        start_date: NaiveDate,

        /// Number of consecutive days to generate
        #[arg(long, default_value = "730")]
        days: u32,

        /// Seed for the random source
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long, default_value = "ecommerce_kpi.csv")]
        output: PathBuf,
    },
}
