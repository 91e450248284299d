//! Series driver for the KPI table.

use chrono::{Duration, NaiveDate};

use super::region::RegionTable;
use super::sampler::{KpiRecord, sample_day};
use crate::rng::NoiseSource;

/// Generates one KPI record per day.
pub struct KpiGenerator {
    regions: RegionTable,
}

impl KpiGenerator {
    /// Create a generator over the given region table.
    pub fn new(regions: RegionTable) -> Self {
        Self { regions }
    }

    /// Access the underlying region table.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Generate `days` consecutive records starting at `start`.
    ///
    /// Records come out in natural date order. Each day draws its region
    /// first and then the day's noise terms, so the consumption order of
    /// the shared noise source is fixed.
    pub fn generate(
        &self,
        start: NaiveDate,
        days: u32,
        rng: &mut dyn NoiseSource,
    ) -> Vec<KpiRecord> {
        let mut records = Vec::with_capacity(days as usize);
        for day_index in 0..days {
            let date = start + Duration::days(i64::from(day_index));
            let region = self.regions.pick(rng);
            records.push(sample_day(day_index, date, region, rng));
        }
        records
    }
}
