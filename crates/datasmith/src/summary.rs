//! Dataset summaries computed after generation.
//!
//! Headline aggregates a downstream report cares about: per-city
//! temperature spreads and rainfall totals, condition counts, and the
//! KPI totals. The generators never consult these; they exist for the
//! CLI report and for sanity checks on generated tables.

use indexmap::IndexMap;

use crate::kpi::KpiRecord;
use crate::weather::WeatherRecord;

/// Min/mean/max spread of one temperature column.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSpread {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Per-city aggregates over a weather series.
#[derive(Debug, Clone, PartialEq)]
pub struct CityStats {
    pub temp_min: TemperatureSpread,
    pub temp_max: TemperatureSpread,
    pub total_rainfall_mm: f64,
    pub days: usize,
}

/// Aggregates over one generated weather series.
#[derive(Debug, Clone, Default)]
pub struct WeatherSummary {
    /// Per-city stats in first-seen order.
    pub cities: IndexMap<String, CityStats>,
    /// Condition counts over the whole table, in first-seen order.
    pub condition_counts: IndexMap<String, usize>,
}

impl WeatherSummary {
    /// Aggregate a generated weather series.
    pub fn from_records(records: &[WeatherRecord]) -> Self {
        struct Acc {
            min_lo: f64,
            min_sum: f64,
            min_hi: f64,
            max_lo: f64,
            max_sum: f64,
            max_hi: f64,
            rainfall: f64,
            days: usize,
        }

        let mut accs: IndexMap<String, Acc> = IndexMap::new();
        let mut condition_counts: IndexMap<String, usize> = IndexMap::new();

        for record in records {
            let acc = accs.entry(record.city.clone()).or_insert(Acc {
                min_lo: f64::INFINITY,
                min_sum: 0.0,
                min_hi: f64::NEG_INFINITY,
                max_lo: f64::INFINITY,
                max_sum: 0.0,
                max_hi: f64::NEG_INFINITY,
                rainfall: 0.0,
                days: 0,
            });
            acc.min_lo = acc.min_lo.min(record.temp_min_c);
            acc.min_sum += record.temp_min_c;
            acc.min_hi = acc.min_hi.max(record.temp_min_c);
            acc.max_lo = acc.max_lo.min(record.temp_max_c);
            acc.max_sum += record.temp_max_c;
            acc.max_hi = acc.max_hi.max(record.temp_max_c);
            acc.rainfall += record.rainfall_mm;
            acc.days += 1;

            *condition_counts.entry(record.condition.clone()).or_insert(0) += 1;
        }

        let cities = accs
            .into_iter()
            .map(|(city, acc)| {
                let days = acc.days as f64;
                let stats = CityStats {
                    temp_min: TemperatureSpread {
                        min: acc.min_lo,
                        mean: acc.min_sum / days,
                        max: acc.min_hi,
                    },
                    temp_max: TemperatureSpread {
                        min: acc.max_lo,
                        mean: acc.max_sum / days,
                        max: acc.max_hi,
                    },
                    total_rainfall_mm: acc.rainfall,
                    days: acc.days,
                };
                (city, stats)
            })
            .collect();

        Self {
            cities,
            condition_counts,
        }
    }
}

/// Headline figures over one generated KPI series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_spend: f64,
    pub avg_conversion: f64,
    pub avg_order_value: f64,
    pub days: usize,
}

impl KpiSummary {
    /// Aggregate a generated KPI series.
    pub fn from_records(records: &[KpiRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let days = records.len();
        let mut summary = Self {
            days,
            ..Self::default()
        };
        for record in records {
            summary.total_revenue += record.revenue;
            summary.total_orders += u64::from(record.orders);
            summary.total_spend += record.marketing_spend;
            summary.avg_conversion += record.conversion_rate;
            summary.avg_order_value += record.avg_order_value;
        }
        summary.avg_conversion /= days as f64;
        summary.avg_order_value /= days as f64;
        summary
    }
}
