//! Monthly climate baselines and the per-city parameter table.

use indexmap::IndexMap;

use crate::error::{DatasmithError, Result};

/// Expected weather for one (city, month) pair.
///
/// Values are monthly centers; the daily sampler adds noise around them.
#[derive(Debug, Clone)]
pub struct MonthlyBaseline {
    /// Expected daily minimum temperature in °C.
    pub temp_min_c: f64,
    /// Expected daily maximum temperature in °C.
    pub temp_max_c: f64,
    /// Expected relative humidity in percent.
    pub humidity_pct: f64,
    /// Expected monthly rainfall in millimetres. Selects the rainfall
    /// regime and scales its magnitude distribution.
    pub rainfall_mm: f64,
    /// Expected wind speed in km/h.
    pub wind_kmh: f64,
    /// Condition vocabulary for days without rain.
    pub conditions: Vec<String>,
}

impl MonthlyBaseline {
    /// Create a baseline from its five centers and condition vocabulary.
    pub fn new(
        temp_min_c: f64,
        temp_max_c: f64,
        humidity_pct: f64,
        rainfall_mm: f64,
        wind_kmh: f64,
        conditions: &[&str],
    ) -> Self {
        Self {
            temp_min_c,
            temp_max_c,
            humidity_pct,
            rainfall_mm,
            wind_kmh,
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Sanity bounds the samplers rely on. Checked once at table load.
    fn validate(&self, city: &str, month0: usize) -> Result<()> {
        let invalid = |message: String| DatasmithError::InvalidBaseline {
            city: city.to_string(),
            message: format!("month {}: {}", month0 + 1, message),
        };

        if self.temp_min_c >= self.temp_max_c {
            return Err(invalid(format!(
                "temp_min {} must be below temp_max {}",
                self.temp_min_c, self.temp_max_c
            )));
        }
        if !(0.0..=100.0).contains(&self.humidity_pct) {
            return Err(invalid(format!(
                "humidity {} outside [0, 100]",
                self.humidity_pct
            )));
        }
        if !self.rainfall_mm.is_finite() || self.rainfall_mm < 0.0 {
            return Err(invalid(format!("rainfall {} is negative", self.rainfall_mm)));
        }
        if !self.wind_kmh.is_finite() || self.wind_kmh < 0.0 {
            return Err(invalid(format!("wind {} is negative", self.wind_kmh)));
        }
        if self.conditions.is_empty() {
            return Err(invalid("empty condition vocabulary".to_string()));
        }
        Ok(())
    }
}

/// Ordered table of per-city monthly baselines.
///
/// The twelve-entry array makes month coverage total by construction, so
/// the only lookup failure mode is an unknown city. Insertion order is
/// the declared entity order the series driver iterates and sorts by.
#[derive(Debug, Clone, Default)]
pub struct ClimateTable {
    cities: IndexMap<String, [MonthlyBaseline; 12]>,
}

impl ClimateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city with its twelve monthly baselines, January first.
    ///
    /// Rejects baselines that violate the sanity bounds; every sampler
    /// assumes they hold for every entry.
    pub fn insert(
        &mut self,
        city: impl Into<String>,
        months: [MonthlyBaseline; 12],
    ) -> Result<()> {
        let city = city.into();
        for (month0, baseline) in months.iter().enumerate() {
            baseline.validate(&city, month0)?;
        }
        self.cities.insert(city, months);
        Ok(())
    }

    /// Look up the baseline for a city and zero-based month index.
    pub fn baseline(&self, city: &str, month0: usize) -> Result<&MonthlyBaseline> {
        self.cities
            .get(city)
            .and_then(|months| months.get(month0))
            .ok_or_else(|| DatasmithError::MissingBaseline {
                city: city.to_string(),
                month: month0 as u32 + 1,
            })
    }

    /// City names in declared order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Position of a city in the declared order.
    pub fn position(&self, city: &str) -> Option<usize> {
        self.cities.get_index_of(city)
    }

    /// Number of cities in the table.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// True if the table has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
