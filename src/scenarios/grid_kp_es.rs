//! Copper-plate grid scenario.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::scenarios::grid_family::{Buffering, connector_grid};

/// Builds the "Kupferplatte" grid scenario: all three voltage levels
/// coupled by lossless connectors with no buffering anywhere, so the grid
/// behaves like a single copper plate.
///
/// # Errors
///
/// Returns a `ModelError` when the load-profile data cannot be read for
/// the requested period count.
pub fn create_grid_kp_es(params: &GridParams) -> Result<EnergySystem, ModelError> {
    connector_grid(
        "Energy System Grid \"Kupferplatte\"",
        Buffering::None,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_kp_es(&GridParams::default()).unwrap();
        assert_eq!(es.uid, "Energy System Grid \"Kupferplatte\"");
        assert!(es.validate().is_empty());
        assert!(es.storages.is_empty());
    }
}
