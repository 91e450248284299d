//! Seasonal weather series generation.
//!
//! A [`ClimateTable`] maps each city to twelve monthly baselines; the
//! daily sampler turns one baseline plus noise into a [`WeatherRecord`],
//! and the [`WeatherGenerator`] walks a date range across every city.

mod baseline;
mod driver;
mod sampler;
mod tables;

pub use baseline::{ClimateTable, MonthlyBaseline};
pub use driver::WeatherGenerator;
pub use sampler::{RainRegime, WeatherRecord, sample_day};
pub use tables::indian_cities;
