//! Access to the load-profile data shipped with the crate.
//!
//! Profiles live under `data/load_profiles/` as semicolon-separated CSV
//! files with a leading timestamp index column. Scenario builders read a
//! named value column and truncate it to their period count.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::ModelError;

/// The crate's data directory.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Directory holding the hourly load-profile CSV files.
pub fn load_profiles_dir() -> PathBuf {
    data_dir().join("load_profiles")
}

/// Reads `periods` values of the named column from a load-profile file.
///
/// # Errors
///
/// Returns a `ModelError` if the file cannot be read, the column is
/// missing, a value fails to parse, or fewer than `periods` rows exist.
pub fn read_profile(file: &str, column: &str, periods: usize) -> Result<Vec<f64>, ModelError> {
    let path = load_profiles_dir().join(file);
    let field = format!("data.{file}");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .map_err(|e| ModelError::new(&field, format!("cannot read \"{}\": {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| ModelError::new(&field, format!("invalid header row: {e}")))?
        .clone();
    let col = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ModelError::new(&field, format!("no column named \"{column}\"")))?;

    let mut values = Vec::with_capacity(periods);
    for (row, record) in reader.records().enumerate() {
        if values.len() == periods {
            break;
        }
        let record =
            record.map_err(|e| ModelError::new(&field, format!("invalid row {row}: {e}")))?;
        let raw = record
            .get(col)
            .ok_or_else(|| ModelError::new(&field, format!("row {row} is missing \"{column}\"")))?;
        let value: f64 = raw.trim().parse().map_err(|e| {
            ModelError::new(&field, format!("row {row}, column \"{column}\": {e}"))
        })?;
        values.push(value);
    }

    if values.len() < periods {
        return Err(ModelError::new(
            &field,
            format!("column \"{column}\" has {} rows, need {periods}", values.len()),
        ));
    }

    debug!(file, column, periods, "loaded profile");
    Ok(values)
}

/// Largest value of a profile, used to derive installed-capacity bounds.
pub fn peak(profile: &[f64]) -> f64 {
    profile.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_column_truncated() {
        let values = read_profile("el_demand_HH_2019.csv", "Last (MW)", 24);
        let values = values.unwrap();
        assert_eq!(values.len(), 24);
        assert!(values.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn shorter_request_takes_prefix() {
        let full = read_profile("solar_HH_2019.csv", "solar", 24).unwrap();
        let head = read_profile("solar_HH_2019.csv", "solar", 6).unwrap();
        assert_eq!(head, full[..6]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = read_profile("solar_HH_2019.csv", "bogus", 4).unwrap_err();
        assert!(err.message.contains("no column named"));
        assert_eq!(err.field, "data.solar_HH_2019.csv");
    }

    #[test]
    fn too_many_periods_is_an_error() {
        let err = read_profile("solar_HH_2019.csv", "solar", 9999).unwrap_err();
        assert!(err.message.contains("need 9999"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_profile("nope.csv", "x", 1).unwrap_err();
        assert!(err.message.contains("cannot read"));
    }

    #[test]
    fn peak_finds_maximum() {
        assert_eq!(peak(&[0.0, 3.5, 2.0]), 3.5);
        assert_eq!(peak(&[]), 0.0);
    }
}
