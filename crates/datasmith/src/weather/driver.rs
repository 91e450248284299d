//! Series driver for the weather table.

use chrono::{Datelike, NaiveDate};

use super::baseline::ClimateTable;
use super::sampler::{WeatherRecord, sample_day};
use crate::error::Result;
use crate::rng::NoiseSource;

/// Generates the full (date × city) weather series.
pub struct WeatherGenerator {
    table: ClimateTable,
}

impl WeatherGenerator {
    /// Create a generator over the given climate table.
    pub fn new(table: ClimateTable) -> Self {
        Self { table }
    }

    /// Access the underlying climate table.
    pub fn table(&self) -> &ClimateTable {
        &self.table
    }

    /// Generate one record per (date, city) over an inclusive date range.
    ///
    /// Dates advance in increasing order with cities in declared order
    /// inside each date, and the shared noise source is consumed in
    /// exactly that order. The result is sorted by (date, declared city
    /// index). A missing baseline aborts the whole run; there is no
    /// partial output.
    pub fn generate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut dyn NoiseSource,
    ) -> Result<Vec<WeatherRecord>> {
        let mut records = Vec::new();
        let mut current = start;
        while current <= end {
            let month0 = current.month0() as usize;
            for city in self.table.cities() {
                let baseline = self.table.baseline(city, month0)?;
                records.push(sample_day(city, current, baseline, rng));
            }
            let Some(next) = current.succ_opt() else {
                break;
            };
            current = next;
        }
        records.sort_by_key(|r| (r.date, self.table.position(&r.city)));
        Ok(records)
    }
}
