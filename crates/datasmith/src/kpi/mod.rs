//! E-commerce KPI series generation.
//!
//! A [`RegionTable`] weights four sales regions; the daily sampler
//! composes weekly/annual harmonics and promotional windows into a
//! [`KpiRecord`], and the [`KpiGenerator`] emits one record per day.

mod driver;
mod region;
mod sampler;

pub use driver::KpiGenerator;
pub use region::{RegionProfile, RegionTable, default_regions};
pub use sampler::{KpiRecord, annual_harmonic, promo_multiplier, sample_day, weekly_harmonic};
