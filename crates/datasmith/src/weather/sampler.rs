//! Daily weather sampler.
//!
//! One call draws one record from a monthly baseline. The draw order is
//! fixed (min temp, max temp, humidity, rain coin, rain magnitude, wind,
//! condition pick) and shared-seed reproducibility depends on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::baseline::MonthlyBaseline;
use crate::numeric::round_to;
use crate::rng::NoiseSource;

/// Conditions reported on days with rainfall too light to classify.
const SHOWER_CONDITIONS: [&str; 2] = ["Light Rain", "Drizzle"];

/// One generated daily observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Temperature_Min_C")]
    pub temp_min_c: f64,
    #[serde(rename = "Temperature_Max_C")]
    pub temp_max_c: f64,
    #[serde(rename = "Humidity_Percent")]
    pub humidity_pct: f64,
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(rename = "Wind_Speed_kmh")]
    pub wind_kmh: f64,
    #[serde(rename = "Weather_Condition")]
    pub condition: String,
}

/// Rainfall generation regime, selected by the baseline's expected
/// monthly rainfall.
///
/// Breakpoints are strict `<` on the left edge: an expected 149 mm is
/// `Moderate`, 150 mm is `Heavy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainRegime {
    /// Under 10 mm expected: mostly dry, occasional light shower.
    Dry,
    /// Under 50 mm expected: light rain season.
    Light,
    /// Under 150 mm expected: moderate rain season.
    Moderate,
    /// 150 mm or more expected: heavy rain season.
    Heavy,
}

impl RainRegime {
    /// Select the regime for an expected monthly rainfall.
    pub fn for_expected(rainfall_mm: f64) -> Self {
        if rainfall_mm < 10.0 {
            Self::Dry
        } else if rainfall_mm < 50.0 {
            Self::Light
        } else if rainfall_mm < 150.0 {
            Self::Moderate
        } else {
            Self::Heavy
        }
    }

    /// Draw one day's rainfall under this regime.
    ///
    /// Each regime flips its own coin for a dry day before drawing a
    /// magnitude. The distribution families and their scaling are part
    /// of the output contract, not an implementation detail.
    fn draw(self, expected_mm: f64, rng: &mut dyn NoiseSource) -> f64 {
        match self {
            Self::Dry => {
                if rng.chance(0.9) {
                    0.0
                } else {
                    rng.exponential(2.0)
                }
            }
            Self::Light => {
                if rng.chance(0.7) {
                    0.0
                } else {
                    rng.exponential(expected_mm / 10.0)
                }
            }
            Self::Moderate => {
                if rng.chance(0.5) {
                    rng.gamma(2.0, expected_mm / 20.0)
                } else {
                    0.0
                }
            }
            Self::Heavy => {
                if rng.chance(0.6) {
                    rng.gamma(2.0, expected_mm / 15.0)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Sample one day's record for a city from its monthly baseline.
///
/// All numeric fields are rounded to one decimal before emission, and
/// the record invariants (strict `min < max`, humidity in [20, 100],
/// rainfall-derived condition) hold on the emitted values.
pub fn sample_day(
    city: &str,
    date: NaiveDate,
    baseline: &MonthlyBaseline,
    rng: &mut dyn NoiseSource,
) -> WeatherRecord {
    let mut temp_min = baseline.temp_min_c + rng.gauss(0.0, 2.0);
    let temp_max = baseline.temp_max_c + rng.gauss(0.0, 2.5);
    // Deterministic correction, never a resample: an inverted draw is
    // pinned a fixed 3 degrees below the maximum.
    if temp_min >= temp_max {
        temp_min = temp_max - 3.0;
    }

    let humidity = (baseline.humidity_pct + rng.gauss(0.0, 8.0)).clamp(20.0, 100.0);

    let regime = RainRegime::for_expected(baseline.rainfall_mm);
    let rainfall = round_to(regime.draw(baseline.rainfall_mm, rng), 1);

    let wind = (baseline.wind_kmh + rng.gauss(0.0, 3.0)).max(0.0);

    // Condition is classified from the emitted (rounded) rainfall so the
    // thresholds hold exactly on the output table.
    let condition = if rainfall > 50.0 {
        "Heavy Rain".to_string()
    } else if rainfall > 10.0 {
        "Rainy".to_string()
    } else if rainfall > 0.0 {
        SHOWER_CONDITIONS[rng.pick(SHOWER_CONDITIONS.len())].to_string()
    } else {
        baseline.conditions[rng.pick(baseline.conditions.len())].clone()
    };

    let mut temp_min = round_to(temp_min, 1);
    let temp_max = round_to(temp_max, 1);
    // Rounding can collapse a gap under 0.05; the strict ordering gets
    // the same fixed-offset correction on the emitted values.
    if temp_min >= temp_max {
        temp_min = temp_max - 3.0;
    }

    WeatherRecord {
        date,
        city: city.to_string(),
        temp_min_c: temp_min,
        temp_max_c: temp_max,
        humidity_pct: round_to(humidity, 1),
        rainfall_mm: rainfall,
        wind_kmh: round_to(wind, 1),
        condition,
    }
}
