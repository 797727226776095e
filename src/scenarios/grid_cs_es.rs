//! Connector-coupled grid with storage buffering.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::scenarios::grid_family::{Buffering, connector_grid};

/// Builds the connectors-and-storage grid scenario: the copper-plate
/// topology augmented with a battery on the low voltage line, a pumped
/// storage on the high voltage line and a heat storage on the district
/// heating line.
///
/// # Errors
///
/// Returns a `ModelError` when the load-profile data cannot be read for
/// the requested period count.
pub fn create_grid_cs_es(params: &GridParams) -> Result<EnergySystem, ModelError> {
    connector_grid(
        "Energy System Grid Connectors and Storage",
        Buffering::Storages,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_cs_es(&GridParams::default()).unwrap();
        assert_eq!(es.uid, "Energy System Grid Connectors and Storage");
        assert!(es.validate().is_empty());
        let names: Vec<_> = es.storages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Battery", "Heat Storage", "Pumped Storage"]);
    }
}
