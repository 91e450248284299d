//! Built-in climate parameter table: 16 Indian cities.
//!
//! Grouped by climate band: Himalayan/hill stations, desert and
//! semi-arid, hot and humid coastal, and moderate/varied inland. Twelve
//! baselines per city, January first.

use once_cell::sync::Lazy;

use super::baseline::{ClimateTable, MonthlyBaseline};
use crate::error::Result;

static INDIAN_CITIES: Lazy<ClimateTable> =
    Lazy::new(|| build().expect("built-in climate table is valid"));

/// The built-in Indian climate table.
pub fn indian_cities() -> &'static ClimateTable {
    &INDIAN_CITIES
}

fn m(
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
    rainfall: f64,
    wind: f64,
    conditions: &[&str],
) -> MonthlyBaseline {
    MonthlyBaseline::new(temp_min, temp_max, humidity, rainfall, wind, conditions)
}

#[rustfmt::skip]
fn build() -> Result<ClimateTable> {
    let mut t = ClimateTable::new();

    // Extreme cold: Himalayan / hill stations
    t.insert("Leh", [
        m(-15.0, -5.0, 40.0, 10.0, 15.0, &["Clear", "Cloudy", "Snow"]),
        m(-12.0, -2.0, 42.0, 12.0, 15.0, &["Clear", "Cloudy", "Snow"]),
        m(-5.0, 5.0, 45.0, 15.0, 18.0, &["Clear", "Cloudy", "Snow"]),
        m(0.0, 10.0, 40.0, 10.0, 20.0, &["Clear", "Cloudy", "Partly Cloudy"]),
        m(5.0, 18.0, 35.0, 8.0, 18.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(10.0, 25.0, 30.0, 5.0, 15.0, &["Sunny", "Clear", "Partly Cloudy"]),
        m(12.0, 28.0, 35.0, 10.0, 12.0, &["Sunny", "Clear", "Partly Cloudy"]),
        m(10.0, 26.0, 38.0, 12.0, 12.0, &["Sunny", "Partly Cloudy", "Clear"]),
        m(5.0, 20.0, 40.0, 8.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(-2.0, 12.0, 42.0, 5.0, 12.0, &["Clear", "Partly Cloudy", "Cloudy"]),
        m(-8.0, 3.0, 45.0, 8.0, 15.0, &["Cloudy", "Clear", "Snow"]),
        m(-13.0, -3.0, 48.0, 10.0, 15.0, &["Snow", "Cloudy", "Clear"]),
    ])?;

    t.insert("Shimla", [
        m(0.0, 9.0, 65.0, 60.0, 12.0, &["Cloudy", "Snow", "Foggy"]),
        m(2.0, 11.0, 60.0, 65.0, 12.0, &["Cloudy", "Rainy", "Snow"]),
        m(6.0, 16.0, 55.0, 70.0, 10.0, &["Cloudy", "Rainy", "Partly Cloudy"]),
        m(10.0, 20.0, 50.0, 55.0, 8.0, &["Partly Cloudy", "Cloudy", "Clear"]),
        m(14.0, 24.0, 52.0, 60.0, 8.0, &["Partly Cloudy", "Cloudy", "Rainy"]),
        m(16.0, 26.0, 65.0, 150.0, 10.0, &["Rainy", "Cloudy", "Heavy Rain"]),
        m(16.0, 24.0, 75.0, 280.0, 12.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(15.0, 23.0, 78.0, 300.0, 12.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(13.0, 21.0, 70.0, 150.0, 10.0, &["Rainy", "Cloudy", "Partly Cloudy"]),
        m(9.0, 18.0, 60.0, 40.0, 8.0, &["Partly Cloudy", "Clear", "Cloudy"]),
        m(5.0, 14.0, 62.0, 25.0, 10.0, &["Clear", "Partly Cloudy", "Cloudy"]),
        m(2.0, 10.0, 68.0, 35.0, 12.0, &["Cloudy", "Snow", "Foggy"]),
    ])?;

    t.insert("Srinagar", [
        m(-2.0, 7.0, 75.0, 80.0, 8.0, &["Snow", "Cloudy", "Foggy"]),
        m(0.0, 10.0, 70.0, 90.0, 8.0, &["Snow", "Rainy", "Cloudy"]),
        m(4.0, 16.0, 65.0, 110.0, 10.0, &["Rainy", "Cloudy", "Partly Cloudy"]),
        m(8.0, 21.0, 60.0, 95.0, 10.0, &["Rainy", "Partly Cloudy", "Clear"]),
        m(12.0, 26.0, 55.0, 65.0, 8.0, &["Partly Cloudy", "Clear", "Cloudy"]),
        m(16.0, 30.0, 55.0, 45.0, 8.0, &["Partly Cloudy", "Clear", "Sunny"]),
        m(19.0, 32.0, 60.0, 60.0, 8.0, &["Partly Cloudy", "Rainy", "Clear"]),
        m(18.0, 31.0, 62.0, 65.0, 8.0, &["Rainy", "Partly Cloudy", "Cloudy"]),
        m(14.0, 28.0, 60.0, 40.0, 6.0, &["Partly Cloudy", "Clear", "Cloudy"]),
        m(8.0, 23.0, 62.0, 35.0, 6.0, &["Clear", "Partly Cloudy", "Cloudy"]),
        m(2.0, 16.0, 68.0, 40.0, 6.0, &["Cloudy", "Foggy", "Clear"]),
        m(-1.0, 9.0, 75.0, 60.0, 8.0, &["Snow", "Cloudy", "Foggy"]),
    ])?;

    t.insert("Darjeeling", [
        m(2.0, 10.0, 70.0, 15.0, 8.0, &["Foggy", "Cloudy", "Clear"]),
        m(3.0, 11.0, 68.0, 20.0, 8.0, &["Foggy", "Cloudy", "Partly Cloudy"]),
        m(7.0, 16.0, 65.0, 35.0, 10.0, &["Cloudy", "Rainy", "Foggy"]),
        m(10.0, 19.0, 70.0, 85.0, 10.0, &["Rainy", "Cloudy", "Foggy"]),
        m(13.0, 19.0, 78.0, 180.0, 12.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(14.0, 19.0, 85.0, 550.0, 15.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(15.0, 19.0, 88.0, 800.0, 15.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(15.0, 19.0, 88.0, 650.0, 15.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(14.0, 18.0, 85.0, 400.0, 12.0, &["Rainy", "Heavy Rain", "Cloudy"]),
        m(11.0, 17.0, 78.0, 110.0, 10.0, &["Rainy", "Cloudy", "Partly Cloudy"]),
        m(7.0, 14.0, 72.0, 20.0, 8.0, &["Cloudy", "Foggy", "Clear"]),
        m(4.0, 11.0, 72.0, 10.0, 8.0, &["Foggy", "Cloudy", "Clear"]),
    ])?;

    // Extreme hot: desert / semi-arid
    t.insert("Jaisalmer", [
        m(7.0, 24.0, 45.0, 5.0, 12.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(10.0, 27.0, 40.0, 3.0, 12.0, &["Sunny", "Clear", "Partly Cloudy"]),
        m(16.0, 33.0, 35.0, 2.0, 15.0, &["Sunny", "Hot", "Clear"]),
        m(22.0, 39.0, 28.0, 1.0, 18.0, &["Hot", "Sunny", "Clear"]),
        m(27.0, 43.0, 25.0, 5.0, 20.0, &["Very Hot", "Hot", "Sunny"]),
        m(29.0, 42.0, 35.0, 12.0, 25.0, &["Very Hot", "Hot", "Dusty"]),
        m(28.0, 39.0, 55.0, 65.0, 22.0, &["Hot", "Rainy", "Cloudy"]),
        m(26.0, 37.0, 60.0, 85.0, 20.0, &["Rainy", "Hot", "Cloudy"]),
        m(24.0, 37.0, 50.0, 25.0, 18.0, &["Hot", "Partly Cloudy", "Sunny"]),
        m(19.0, 35.0, 42.0, 5.0, 15.0, &["Sunny", "Clear", "Hot"]),
        m(13.0, 30.0, 45.0, 2.0, 12.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(9.0, 26.0, 48.0, 3.0, 12.0, &["Clear", "Sunny", "Partly Cloudy"]),
    ])?;

    t.insert("Bikaner", [
        m(8.0, 23.0, 50.0, 8.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(11.0, 26.0, 45.0, 5.0, 12.0, &["Sunny", "Clear", "Partly Cloudy"]),
        m(17.0, 32.0, 38.0, 3.0, 15.0, &["Sunny", "Hot", "Clear"]),
        m(23.0, 39.0, 30.0, 2.0, 18.0, &["Hot", "Very Hot", "Sunny"]),
        m(28.0, 43.0, 28.0, 8.0, 22.0, &["Very Hot", "Hot", "Sunny"]),
        m(30.0, 42.0, 38.0, 25.0, 25.0, &["Very Hot", "Hot", "Dusty"]),
        m(28.0, 38.0, 60.0, 110.0, 22.0, &["Rainy", "Hot", "Cloudy"]),
        m(26.0, 36.0, 68.0, 130.0, 20.0, &["Rainy", "Cloudy", "Hot"]),
        m(24.0, 36.0, 55.0, 40.0, 15.0, &["Hot", "Partly Cloudy", "Rainy"]),
        m(20.0, 34.0, 48.0, 8.0, 12.0, &["Sunny", "Clear", "Hot"]),
        m(14.0, 29.0, 50.0, 3.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(10.0, 25.0, 52.0, 5.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
    ])?;

    t.insert("Jodhpur", [
        m(9.0, 24.0, 48.0, 5.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(12.0, 27.0, 42.0, 3.0, 12.0, &["Sunny", "Clear", "Partly Cloudy"]),
        m(17.0, 33.0, 35.0, 2.0, 15.0, &["Sunny", "Hot", "Clear"]),
        m(23.0, 38.0, 28.0, 1.0, 18.0, &["Hot", "Very Hot", "Sunny"]),
        m(27.0, 41.0, 28.0, 10.0, 20.0, &["Very Hot", "Hot", "Sunny"]),
        m(29.0, 40.0, 40.0, 35.0, 25.0, &["Very Hot", "Hot", "Partly Cloudy"]),
        m(27.0, 36.0, 62.0, 120.0, 22.0, &["Rainy", "Hot", "Cloudy"]),
        m(25.0, 34.0, 70.0, 140.0, 20.0, &["Rainy", "Cloudy", "Hot"]),
        m(24.0, 35.0, 58.0, 50.0, 15.0, &["Hot", "Rainy", "Partly Cloudy"]),
        m(20.0, 34.0, 45.0, 5.0, 12.0, &["Sunny", "Clear", "Hot"]),
        m(14.0, 29.0, 46.0, 2.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(10.0, 25.0, 48.0, 3.0, 10.0, &["Clear", "Sunny", "Partly Cloudy"]),
    ])?;

    // Hot & humid: coastal / tropical
    t.insert("Chennai", [
        m(20.0, 29.0, 72.0, 25.0, 15.0, &["Partly Cloudy", "Clear", "Cloudy"]),
        m(21.0, 31.0, 70.0, 10.0, 15.0, &["Sunny", "Hot", "Partly Cloudy"]),
        m(23.0, 33.0, 68.0, 15.0, 18.0, &["Hot", "Humid", "Partly Cloudy"]),
        m(26.0, 36.0, 65.0, 20.0, 18.0, &["Hot", "Humid", "Partly Cloudy"]),
        m(28.0, 38.0, 65.0, 50.0, 20.0, &["Very Hot", "Humid", "Rainy"]),
        m(27.0, 37.0, 68.0, 55.0, 25.0, &["Hot", "Humid", "Rainy"]),
        m(26.0, 35.0, 72.0, 85.0, 25.0, &["Rainy", "Humid", "Cloudy"]),
        m(26.0, 35.0, 72.0, 120.0, 25.0, &["Rainy", "Humid", "Cloudy"]),
        m(25.0, 34.0, 72.0, 120.0, 20.0, &["Rainy", "Humid", "Cloudy"]),
        m(24.0, 32.0, 75.0, 280.0, 18.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(23.0, 30.0, 78.0, 350.0, 15.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(21.0, 29.0, 75.0, 140.0, 15.0, &["Rainy", "Cloudy", "Partly Cloudy"]),
    ])?;

    t.insert("Mumbai", [
        m(17.0, 31.0, 62.0, 1.0, 12.0, &["Clear", "Sunny", "Partly Cloudy"]),
        m(18.0, 32.0, 60.0, 0.0, 12.0, &["Sunny", "Clear", "Hot"]),
        m(21.0, 33.0, 65.0, 0.0, 15.0, &["Hot", "Humid", "Sunny"]),
        m(24.0, 34.0, 68.0, 1.0, 15.0, &["Hot", "Humid", "Partly Cloudy"]),
        m(26.0, 34.0, 72.0, 20.0, 18.0, &["Hot", "Humid", "Partly Cloudy"]),
        m(26.0, 32.0, 80.0, 585.0, 25.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(25.0, 30.0, 85.0, 840.0, 28.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(25.0, 30.0, 85.0, 540.0, 25.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(24.0, 31.0, 80.0, 265.0, 20.0, &["Rainy", "Cloudy", "Humid"]),
        m(23.0, 33.0, 72.0, 65.0, 15.0, &["Rainy", "Partly Cloudy", "Humid"]),
        m(21.0, 33.0, 65.0, 15.0, 12.0, &["Partly Cloudy", "Clear", "Humid"]),
        m(18.0, 32.0, 62.0, 3.0, 12.0, &["Clear", "Sunny", "Partly Cloudy"]),
    ])?;

    t.insert("Kochi", [
        m(23.0, 31.0, 75.0, 20.0, 12.0, &["Partly Cloudy", "Clear", "Humid"]),
        m(24.0, 32.0, 72.0, 25.0, 12.0, &["Partly Cloudy", "Humid", "Clear"]),
        m(25.0, 33.0, 72.0, 70.0, 12.0, &["Humid", "Rainy", "Partly Cloudy"]),
        m(26.0, 33.0, 75.0, 125.0, 15.0, &["Rainy", "Humid", "Cloudy"]),
        m(26.0, 32.0, 78.0, 310.0, 15.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(25.0, 30.0, 85.0, 660.0, 20.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(24.0, 29.0, 85.0, 575.0, 20.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(24.0, 29.0, 85.0, 390.0, 18.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(24.0, 30.0, 80.0, 210.0, 15.0, &["Rainy", "Humid", "Cloudy"]),
        m(24.0, 30.0, 80.0, 345.0, 12.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(24.0, 31.0, 78.0, 160.0, 12.0, &["Rainy", "Humid", "Cloudy"]),
        m(23.0, 31.0, 75.0, 45.0, 12.0, &["Partly Cloudy", "Humid", "Rainy"]),
    ])?;

    // Moderate / varied inland
    t.insert("Bangalore", [
        m(15.0, 27.0, 60.0, 5.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
        m(16.0, 30.0, 55.0, 10.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(19.0, 33.0, 50.0, 15.0, 12.0, &["Warm", "Pleasant", "Partly Cloudy"]),
        m(21.0, 34.0, 52.0, 55.0, 12.0, &["Warm", "Rainy", "Partly Cloudy"]),
        m(21.0, 33.0, 58.0, 115.0, 15.0, &["Rainy", "Pleasant", "Cloudy"]),
        m(20.0, 29.0, 68.0, 90.0, 15.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(20.0, 28.0, 70.0, 105.0, 15.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(19.0, 28.0, 70.0, 140.0, 15.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(19.0, 28.0, 68.0, 175.0, 12.0, &["Rainy", "Pleasant", "Cloudy"]),
        m(19.0, 28.0, 70.0, 180.0, 10.0, &["Rainy", "Pleasant", "Cloudy"]),
        m(17.0, 27.0, 68.0, 60.0, 10.0, &["Pleasant", "Rainy", "Partly Cloudy"]),
        m(16.0, 27.0, 62.0, 15.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
    ])?;

    t.insert("Delhi", [
        m(7.0, 21.0, 65.0, 20.0, 8.0, &["Foggy", "Clear", "Cloudy"]),
        m(10.0, 24.0, 60.0, 25.0, 10.0, &["Clear", "Partly Cloudy", "Pleasant"]),
        m(15.0, 30.0, 52.0, 18.0, 12.0, &["Pleasant", "Warm", "Partly Cloudy"]),
        m(21.0, 36.0, 42.0, 10.0, 15.0, &["Hot", "Warm", "Clear"]),
        m(26.0, 40.0, 40.0, 20.0, 18.0, &["Very Hot", "Hot", "Dusty"]),
        m(28.0, 40.0, 48.0, 65.0, 20.0, &["Very Hot", "Hot", "Dusty"]),
        m(27.0, 35.0, 70.0, 210.0, 18.0, &["Rainy", "Humid", "Cloudy"]),
        m(26.0, 34.0, 75.0, 250.0, 15.0, &["Rainy", "Humid", "Cloudy"]),
        m(24.0, 34.0, 68.0, 125.0, 12.0, &["Rainy", "Humid", "Partly Cloudy"]),
        m(19.0, 33.0, 58.0, 30.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(12.0, 28.0, 62.0, 5.0, 8.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(8.0, 23.0, 68.0, 10.0, 8.0, &["Foggy", "Clear", "Cloudy"]),
    ])?;

    t.insert("Kolkata", [
        m(14.0, 27.0, 68.0, 10.0, 8.0, &["Clear", "Pleasant", "Partly Cloudy"]),
        m(17.0, 29.0, 62.0, 25.0, 10.0, &["Pleasant", "Clear", "Warm"]),
        m(21.0, 34.0, 60.0, 30.0, 12.0, &["Warm", "Hot", "Partly Cloudy"]),
        m(25.0, 36.0, 65.0, 50.0, 15.0, &["Hot", "Humid", "Rainy"]),
        m(26.0, 36.0, 70.0, 140.0, 18.0, &["Hot", "Humid", "Rainy"]),
        m(27.0, 35.0, 78.0, 280.0, 18.0, &["Rainy", "Humid", "Cloudy"]),
        m(27.0, 33.0, 82.0, 325.0, 18.0, &["Heavy Rain", "Rainy", "Humid"]),
        m(27.0, 33.0, 82.0, 305.0, 18.0, &["Heavy Rain", "Rainy", "Humid"]),
        m(26.0, 33.0, 80.0, 250.0, 15.0, &["Rainy", "Humid", "Cloudy"]),
        m(24.0, 32.0, 75.0, 115.0, 10.0, &["Rainy", "Humid", "Partly Cloudy"]),
        m(19.0, 30.0, 68.0, 20.0, 8.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(15.0, 27.0, 68.0, 5.0, 8.0, &["Clear", "Pleasant", "Partly Cloudy"]),
    ])?;

    t.insert("Hyderabad", [
        m(15.0, 29.0, 55.0, 5.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
        m(17.0, 32.0, 48.0, 10.0, 12.0, &["Pleasant", "Warm", "Clear"]),
        m(21.0, 36.0, 42.0, 15.0, 12.0, &["Warm", "Hot", "Partly Cloudy"]),
        m(24.0, 38.0, 42.0, 25.0, 15.0, &["Hot", "Warm", "Partly Cloudy"]),
        m(26.0, 39.0, 45.0, 45.0, 15.0, &["Hot", "Very Hot", "Partly Cloudy"]),
        m(24.0, 35.0, 58.0, 110.0, 18.0, &["Rainy", "Hot", "Cloudy"]),
        m(23.0, 31.0, 68.0, 165.0, 18.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(22.0, 30.0, 70.0, 150.0, 15.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(22.0, 31.0, 65.0, 150.0, 12.0, &["Rainy", "Pleasant", "Cloudy"]),
        m(20.0, 31.0, 62.0, 90.0, 10.0, &["Rainy", "Pleasant", "Partly Cloudy"]),
        m(17.0, 29.0, 60.0, 30.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(15.0, 29.0, 58.0, 10.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
    ])?;

    t.insert("Pune", [
        m(12.0, 30.0, 48.0, 2.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
        m(13.0, 32.0, 42.0, 1.0, 10.0, &["Clear", "Warm", "Pleasant"]),
        m(17.0, 35.0, 38.0, 5.0, 12.0, &["Warm", "Hot", "Clear"]),
        m(20.0, 37.0, 38.0, 15.0, 12.0, &["Hot", "Warm", "Partly Cloudy"]),
        m(23.0, 37.0, 45.0, 45.0, 15.0, &["Hot", "Rainy", "Partly Cloudy"]),
        m(23.0, 32.0, 68.0, 130.0, 18.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(22.0, 29.0, 78.0, 185.0, 18.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(21.0, 28.0, 78.0, 140.0, 15.0, &["Rainy", "Cloudy", "Pleasant"]),
        m(21.0, 30.0, 70.0, 150.0, 12.0, &["Rainy", "Pleasant", "Cloudy"]),
        m(19.0, 32.0, 62.0, 70.0, 10.0, &["Pleasant", "Rainy", "Partly Cloudy"]),
        m(15.0, 31.0, 55.0, 20.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(13.0, 30.0, 50.0, 5.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
    ])?;

    t.insert("Ahmedabad", [
        m(12.0, 28.0, 52.0, 2.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
        m(14.0, 31.0, 48.0, 1.0, 12.0, &["Clear", "Warm", "Pleasant"]),
        m(19.0, 36.0, 42.0, 1.0, 12.0, &["Warm", "Hot", "Clear"]),
        m(23.0, 40.0, 38.0, 1.0, 15.0, &["Hot", "Very Hot", "Clear"]),
        m(27.0, 42.0, 42.0, 10.0, 18.0, &["Very Hot", "Hot", "Dusty"]),
        m(28.0, 38.0, 60.0, 95.0, 20.0, &["Hot", "Rainy", "Humid"]),
        m(27.0, 33.0, 75.0, 280.0, 20.0, &["Heavy Rain", "Rainy", "Cloudy"]),
        m(26.0, 32.0, 78.0, 210.0, 18.0, &["Rainy", "Heavy Rain", "Cloudy"]),
        m(25.0, 34.0, 68.0, 125.0, 15.0, &["Rainy", "Humid", "Partly Cloudy"]),
        m(22.0, 36.0, 55.0, 10.0, 12.0, &["Pleasant", "Warm", "Clear"]),
        m(17.0, 32.0, 52.0, 3.0, 10.0, &["Pleasant", "Clear", "Partly Cloudy"]),
        m(13.0, 29.0, 52.0, 1.0, 10.0, &["Clear", "Pleasant", "Partly Cloudy"]),
    ])?;

    Ok(t)
}
