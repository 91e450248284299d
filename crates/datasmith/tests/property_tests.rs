//! Property-based tests for the datasmith generators.
//!
//! These tests use proptest to generate random seeds, dates, and baseline
//! tables and verify that the generators maintain their invariants under
//! all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Generators never crash on any valid input
//! 2. **Determinism**: Same seed always produces the same series
//! 3. **Consistency**: Derived fields agree with the emitted values
//! 4. **Invariants**: Record-level bounds always hold
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p datasmith --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p datasmith --test property_tests
//! ```

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use datasmith::kpi::{KpiGenerator, RegionProfile, RegionTable, default_regions, sample_day};
use datasmith::rng::Prng;
use datasmith::weather::{ClimateTable, MonthlyBaseline, WeatherGenerator};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate plausible monthly climate baselines, covering deserts,
/// monsoon coasts, and high-altitude cold.
fn arb_baseline() -> impl Strategy<Value = MonthlyBaseline> {
    (
        -20.0..35.0f64,  // temp_min_c
        3.1..15.0f64,    // gap above temp_min_c
        20.0..100.0f64,  // humidity_pct
        0.0..800.0f64,   // rainfall_mm
        0.0..40.0f64,    // wind_kmh
    )
        .prop_map(|(min, gap, humidity, rainfall, wind)| {
            MonthlyBaseline::new(min, min + gap, humidity, rainfall, wind, &["Clear", "Cloudy"])
        })
}

/// A full year of baselines for one synthetic city.
fn arb_city_year() -> impl Strategy<Value = [MonthlyBaseline; 12]> {
    prop::array::uniform12(arb_baseline())
}

/// Dates within the generator's realistic operating range.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal.min(365)).unwrap()
    })
}

// =============================================================================
// Weather Generator Properties
// =============================================================================

mod weather_properties {
    use super::*;

    fn single_city_table(baselines: [MonthlyBaseline; 12]) -> ClimateTable {
        let mut table = ClimateTable::new();
        table.insert("Propville", baselines).unwrap();
        table
    }

    proptest! {
        /// Generation never panics and every record satisfies the
        /// record-level invariants, for any baseline table and seed.
        #[test]
        fn records_satisfy_invariants(
            baselines in arb_city_year(),
            seed in any::<u64>(),
        ) {
            let generator = WeatherGenerator::new(single_city_table(baselines));
            let mut rng = Prng::seeded(seed);
            let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
            let records = generator.generate(start, end, &mut rng).unwrap();

            prop_assert_eq!(records.len(), 59);
            for record in &records {
                prop_assert!(record.temp_min_c < record.temp_max_c);
                prop_assert!((20.0..=100.0).contains(&record.humidity_pct));
                prop_assert!(record.rainfall_mm >= 0.0);
                prop_assert!(record.wind_kmh >= 0.0);
            }
        }

        /// Same seed, same table, same window: byte-for-byte identical output.
        #[test]
        fn generation_is_deterministic(
            baselines in arb_city_year(),
            seed in any::<u64>(),
        ) {
            let generator = WeatherGenerator::new(single_city_table(baselines));
            let start = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2021, 6, 30).unwrap();

            let mut a = Prng::seeded(seed);
            let mut b = Prng::seeded(seed);
            let first = generator.generate(start, end, &mut a).unwrap();
            let second = generator.generate(start, end, &mut b).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Condition labels always agree with the rainfall that was emitted.
        #[test]
        fn condition_agrees_with_rainfall(
            baselines in arb_city_year(),
            seed in any::<u64>(),
        ) {
            let generator = WeatherGenerator::new(single_city_table(baselines));
            let mut rng = Prng::seeded(seed);
            let start = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2021, 7, 31).unwrap();
            let records = generator.generate(start, end, &mut rng).unwrap();

            for record in &records {
                if record.rainfall_mm > 50.0 {
                    prop_assert_eq!(&record.condition, "Heavy Rain");
                } else if record.rainfall_mm > 10.0 {
                    prop_assert_eq!(&record.condition, "Rainy");
                } else if record.rainfall_mm > 0.0 {
                    prop_assert!(
                        record.condition == "Light Rain" || record.condition == "Drizzle"
                    );
                } else {
                    prop_assert!(
                        record.condition == "Clear" || record.condition == "Cloudy"
                    );
                }
            }
        }

        /// Emitted values carry at most one decimal place.
        #[test]
        fn values_are_rounded_to_one_decimal(
            baselines in arb_city_year(),
            seed in any::<u64>(),
        ) {
            let generator = WeatherGenerator::new(single_city_table(baselines));
            let mut rng = Prng::seeded(seed);
            let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(2021, 3, 31).unwrap();
            let records = generator.generate(start, end, &mut rng).unwrap();

            for record in &records {
                for value in [
                    record.temp_min_c,
                    record.temp_max_c,
                    record.humidity_pct,
                    record.rainfall_mm,
                    record.wind_kmh,
                ] {
                    prop_assert!(
                        ((value * 10.0).round() - value * 10.0).abs() < 1e-9,
                        "value {} has more than one decimal place",
                        value
                    );
                }
            }
        }
    }
}

// =============================================================================
// KPI Generator Properties
// =============================================================================

mod kpi_properties {
    use super::*;

    proptest! {
        /// Derived ratios are consistent with the emitted fields for any
        /// seed, date, and region multipliers.
        #[test]
        fn derived_fields_are_consistent(
            seed in any::<u64>(),
            day_index in 0u32..3650,
            date in arb_date(),
            spend_mult in 0.5..2.0f64,
            aov_mult in 0.5..2.0f64,
            conv_mult in 0.5..2.0f64,
        ) {
            let region = RegionProfile::new("Prop", 1.0, spend_mult, aov_mult, conv_mult);
            let mut rng = Prng::seeded(seed);
            let record = sample_day(day_index, date, &region, &mut rng);

            let conv = f64::from(record.orders) / f64::from(record.website_visitors.max(1));
            prop_assert!((record.conversion_rate - conv).abs() < 1e-6);

            prop_assert!(record.new_customers >= 1);
            let cac = record.marketing_spend / f64::from(record.new_customers);
            prop_assert!((record.customer_acquisition_cost - cac).abs() < 1e-2);

            prop_assert!(record.website_visitors >= 300);
            prop_assert!(record.orders <= record.website_visitors);
            prop_assert!(record.revenue >= 0.0);
            prop_assert!((25.0..=220.0).contains(&record.avg_order_value));
        }

        /// Same seed produces the same full series.
        #[test]
        fn series_is_deterministic(seed in any::<u64>(), days in 1u32..400) {
            let generator = KpiGenerator::new(default_regions());
            let start = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();

            let mut a = Prng::seeded(seed);
            let mut b = Prng::seeded(seed);
            prop_assert_eq!(
                generator.generate(start, days, &mut a),
                generator.generate(start, days, &mut b)
            );
        }

        /// Region picking respects the table: every drawn name exists and
        /// a single-region table always picks that region.
        #[test]
        fn region_pick_stays_in_table(seed in any::<u64>()) {
            let only = RegionTable::new(vec![RegionProfile::new("Solo", 1.0, 1.0, 1.0, 1.0)])
                .unwrap();
            let generator = KpiGenerator::new(only);
            let start = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
            let mut rng = Prng::seeded(seed);

            for record in generator.generate(start, 60, &mut rng) {
                prop_assert_eq!(&record.region, "Solo");
            }
        }

        /// Dates advance one day at a time regardless of the calendar
        /// position of the start date.
        #[test]
        fn dates_are_consecutive(seed in any::<u64>(), start in arb_date()) {
            let generator = KpiGenerator::new(default_regions());
            let mut rng = Prng::seeded(seed);
            let records = generator.generate(start, 45, &mut rng);

            prop_assert_eq!(records.len(), 45);
            for pair in records.windows(2) {
                prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
            }
        }
    }
}

// =============================================================================
// Table Construction Properties
// =============================================================================

mod table_properties {
    use super::*;

    proptest! {
        /// Baseline lookup succeeds for every month of an inserted city
        /// and fails for unknown cities.
        #[test]
        fn baseline_lookup_is_total_per_city(baselines in arb_city_year()) {
            let mut table = ClimateTable::new();
            table.insert("Lookup", baselines).unwrap();

            for month0 in 0..12 {
                prop_assert!(table.baseline("Lookup", month0).is_ok());
            }
            prop_assert!(table.baseline("Elsewhere", 0).is_err());
        }

        /// Region tables reject non-positive weights.
        #[test]
        fn non_positive_weights_rejected(weight in -10.0..=0.0f64) {
            let result = RegionTable::new(vec![
                RegionProfile::new("Bad", weight, 1.0, 1.0, 1.0),
            ]);
            prop_assert!(result.is_err());
        }
    }
}
