//! Transformer-coupled grid with storage buffering.

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::scenarios::grid_family::{Buffering, transformer_grid};

/// Builds the transformers-and-storages grid scenario: each voltage level
/// carries its own electricity carrier, levels are coupled by directed
/// grid transformers with losses and capacity limits, and each powerline
/// holds a pumped storage.
///
/// # Errors
///
/// Returns a `ModelError` when the load-profile data cannot be read for
/// the requested period count.
pub fn create_grid_ts_es(params: &GridParams) -> Result<EnergySystem, ModelError> {
    transformer_grid(
        "Energy System Grid Transformers and Storages",
        Buffering::Storages,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_ts_es(&GridParams::default()).unwrap();
        assert_eq!(es.uid, "Energy System Grid Transformers and Storages");
        assert!(es.validate().is_empty());
        assert_eq!(es.storages.len(), 3);
        assert_eq!(es.transformers.len(), 9);
    }
}
