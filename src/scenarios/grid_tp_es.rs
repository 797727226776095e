//! Transformer-coupled grid with balancing sources and sinks.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::scenarios::grid_family::{Buffering, transformer_grid};

/// Builds the transformers-and-powersources/-sinks grid scenario: like
/// [`create_grid_ts_es`](crate::scenarios::create_grid_ts_es) but with an
/// expensive balancing source and sink per voltage level in place of the
/// pumped storages.
///
/// # Errors
///
/// Returns a `ModelError` when the load-profile data cannot be read for
/// the requested period count.
pub fn create_grid_tp_es(params: &GridParams) -> Result<EnergySystem, ModelError> {
    transformer_grid(
        "Energy System Grid Transformers and Powersources/-sinks",
        Buffering::SourceSinkPairs,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_tp_es(&GridParams::default()).unwrap();
        assert_eq!(
            es.uid,
            "Energy System Grid Transformers and Powersources/-sinks"
        );
        assert!(es.validate().is_empty());
        assert!(es.storages.is_empty());
        let balancing = es
            .sources
            .iter()
            .filter(|s| s.name.starts_with("Power Source"))
            .count();
        assert_eq!(balancing, 3);
    }
}
