//! CSV sink for generated series.
//!
//! Thin serialization surface: a header row from the record's column
//! names, then one row per record in the driver's emission order. The
//! sink writes exactly what was computed; it enforces nothing.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DatasmithError, Result};

/// Write records to a CSV file with a header row.
pub fn write_csv<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DatasmithError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize records to an in-memory CSV string.
pub fn to_csv_string<T: Serialize>(records: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read records back from a CSV file.
pub fn read_csv<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DatasmithError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherRecord;
    use chrono::NaiveDate;

    fn record() -> WeatherRecord {
        WeatherRecord {
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            city: "Leh".to_string(),
            temp_min_c: -14.2,
            temp_max_c: -4.7,
            humidity_pct: 41.3,
            rainfall_mm: 0.0,
            wind_kmh: 14.8,
            condition: "Clear".to_string(),
        }
    }

    #[test]
    fn test_header_row_uses_column_names() {
        let csv = to_csv_string(&[record()]).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Date,City,Temperature_Min_C,Temperature_Max_C,Humidity_Percent,\
             Rainfall_mm,Wind_Speed_kmh,Weather_Condition"
        );
    }

    #[test]
    fn test_one_row_per_record() {
        let records = vec![record(), record(), record()];
        let csv = to_csv_string(&records).unwrap();
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_csv::<WeatherRecord>("/nonexistent/weather.csv").unwrap_err();
        assert!(matches!(err, DatasmithError::Io { .. }));
    }
}
