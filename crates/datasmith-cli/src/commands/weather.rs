//! Weather command - generate the daily weather dataset.

use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;
use datasmith::summary::WeatherSummary;
use datasmith::weather::{WeatherGenerator, indian_cities};
use datasmith::{Prng, sink};

pub fn run(
    start_year: i32,
    end_year: i32,
    seed: u64,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if end_year < start_year {
        return Err(format!(
            "end year {} is before start year {}",
            end_year, start_year
        )
        .into());
    }

    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or_else(|| format!("invalid start year {}", start_year))?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .ok_or_else(|| format!("invalid end year {}", end_year))?;

    let table = indian_cities();
    println!(
        "{} weather for {} cities, {} through {} (seed {})",
        "Generating".cyan().bold(),
        table.len().to_string().white(),
        start,
        end,
        seed
    );

    let generator = WeatherGenerator::new(table.clone());
    let mut rng = Prng::seeded(seed);
    let records = generator.generate(start, end, &mut rng)?;

    sink::write_csv(&output, &records)?;

    println!(
        "{} {} records to {}",
        "Wrote".green().bold(),
        records.len().to_string().white().bold(),
        output.display().to_string().white()
    );

    if verbose {
        let summary = WeatherSummary::from_records(&records);

        println!();
        println!("{}", "Per-city statistics:".yellow().bold());
        println!(
            "  {:12} {:>8} {:>8} {:>8} {:>8} {:>12}",
            "City", "MinLo", "MinMean", "MaxMean", "MaxHi", "Rainfall_mm"
        );
        for (city, stats) in &summary.cities {
            println!(
                "  {:12} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>12.1}",
                city,
                stats.temp_min.min,
                stats.temp_min.mean,
                stats.temp_max.mean,
                stats.temp_max.max,
                stats.total_rainfall_mm
            );
        }

        println!();
        println!("{}", "Condition counts:".yellow().bold());
        for (condition, count) in &summary.condition_counts {
            println!("  {:14} {}", condition, count);
        }
    }

    Ok(())
}
