//! Kpi command - generate the daily e-commerce KPI dataset.

use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;
use datasmith::kpi::{KpiGenerator, default_regions};
use datasmith::summary::KpiSummary;
use datasmith::{Prng, sink};

pub fn run(
    start_date: NaiveDate,
    days: u32,
    seed: u64,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if days == 0 {
        return Err("days must be at least 1".into());
    }

    println!(
        "{} {} days of KPIs starting {} (seed {})",
        "Generating".cyan().bold(),
        days.to_string().white(),
        start_date,
        seed
    );

    let generator = KpiGenerator::new(default_regions());
    let mut rng = Prng::seeded(seed);
    let records = generator.generate(start_date, days, &mut rng);

    sink::write_csv(&output, &records)?;

    println!(
        "{} {} records to {}",
        "Wrote".green().bold(),
        records.len().to_string().white().bold(),
        output.display().to_string().white()
    );

    if verbose {
        let summary = KpiSummary::from_records(&records);

        println!();
        println!("{}", "Series statistics:".yellow().bold());
        println!("  Days:            {}", summary.days);
        println!("  Total revenue:   {:.2}", summary.total_revenue);
        println!("  Total orders:    {}", summary.total_orders);
        println!("  Total spend:     {:.2}", summary.total_spend);
        println!("  Avg conversion:  {:.4}", summary.avg_conversion);
        println!("  Avg order value: {:.2}", summary.avg_order_value);
    }

    Ok(())
}
