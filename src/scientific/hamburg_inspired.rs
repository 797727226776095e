//! Hamburg inspired heat and power supply comparison case.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::create_hhes;

/// Builds the Hamburg inspired heat network planning model study case.
/// The system is the [`create_hhes`] plant fleet and profile data, kept as
/// its own entry point so study results stay reproducible independently of
/// the scenario catalog.
///
/// # Errors
///
/// Returns a `ModelError` when a profile file cannot be read or holds fewer
/// rows than `periods`.
pub fn create_hamburg_inspired_hnp_msc(periods: usize) -> Result<EnergySystem, ModelError> {
    create_hhes(periods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_hamburg_inspired_hnp_msc(24).unwrap();
        assert_eq!(es.uid, "Energy System Hamburg");
        assert!(es.validate().is_empty());
    }
}
