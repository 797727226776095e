//! Connector-coupled grid with balancing source and sink.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::scenarios::grid_family::{Buffering, connector_grid};

/// Builds the connectors-and-powersource/-sink grid scenario: instead of
/// storages, an expensive balancing source on the low voltage line and a
/// balancing sink on the high voltage line keep the system solvable.
///
/// # Errors
///
/// Returns a `ModelError` when the load-profile data cannot be read for
/// the requested period count.
pub fn create_grid_cp_es(params: &GridParams) -> Result<EnergySystem, ModelError> {
    connector_grid(
        "Energy System Grid Connectors and Powersource/-sink",
        Buffering::SourceSinkPairs,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_cp_es(&GridParams::default()).unwrap();
        assert_eq!(es.uid, "Energy System Grid Connectors and Powersource/-sink");
        assert!(es.validate().is_empty());
        assert!(es.storages.is_empty());
        assert!(es.sources.iter().any(|s| s.name == "Power Source"));
        assert!(es.sinks.iter().any(|s| s.name == "Power Sink"));
    }
}
