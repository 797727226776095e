//! TOML-based parameter sets for the grid scenario family.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::ModelError;

/// Tunable parameters shared by the grid scenario builders.
///
/// All fields have defaults matching the published scenario runs. Load
/// overrides from TOML with [`GridParams::from_toml_file`] or use
/// [`GridParams::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridParams {
    /// Number of hourly steps to draw from the load profiles (must be > 0).
    pub periods: usize,
    /// Efficiency of the voltage-coupling grid transformers (0 < eta <= 1).
    pub transformer_efficiency: f64,
    /// Flow-rate cap of each voltage-coupling link (must be > 0).
    pub gridcapacity: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            periods: 24,
            transformer_efficiency: 0.99,
            gridcapacity: 60_000.0,
        }
    }
}

impl GridParams {
    /// Parses grid parameters from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ModelError::new("params", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses grid parameters from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ModelError> {
        toml::from_str(s).map_err(|e| ModelError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the parameters are usable.
    pub fn validate(&self) -> Vec<ModelError> {
        let mut errors = Vec::new();

        if self.periods == 0 {
            errors.push(ModelError::new("params.periods", "must be > 0"));
        }
        if !(self.transformer_efficiency > 0.0 && self.transformer_efficiency <= 1.0) {
            errors.push(ModelError::new(
                "params.transformer_efficiency",
                format!("must be in (0, 1], got {}", self.transformer_efficiency),
            ));
        }
        if !(self.gridcapacity > 0.0) {
            errors.push(ModelError::new(
                "params.gridcapacity",
                format!("must be > 0, got {}", self.gridcapacity),
            ));
        }

        errors
    }
}

/// Tunable parameters of the Hamburg scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HamburgParams {
    /// Number of hourly steps to draw from the 2019 profiles (must be > 0).
    pub periods: usize,
}

impl Default for HamburgParams {
    fn default() -> Self {
        Self { periods: 24 }
    }
}

impl HamburgParams {
    /// Parses Hamburg parameters from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ModelError> {
        toml::from_str(s).map_err(|e| ModelError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    pub fn validate(&self) -> Vec<ModelError> {
        let mut errors = Vec::new();
        if self.periods == 0 {
            errors.push(ModelError::new("params.periods", "must be > 0"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GridParams::default().validate().is_empty());
        assert!(HamburgParams::default().validate().is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let params = GridParams::from_toml_str("periods = 6\n").unwrap();
        assert_eq!(params.periods, 6);
        assert_eq!(params.transformer_efficiency, 0.99);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(GridParams::from_toml_str("gridcapazity = 1\n").is_err());
    }

    #[test]
    fn flags_out_of_range_values() {
        let params = GridParams {
            periods: 0,
            transformer_efficiency: 1.3,
            gridcapacity: -5.0,
        };
        let errors = params.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].field.contains("periods"));
    }
}
