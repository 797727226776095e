//! Alias topology of the fully parameterized grid.

use crate::model::EnergySystem;
use crate::scenarios::create_grid_es;

/// Builds the generic grid scenario. Component for component this is the
/// same system as [`create_grid_es`], published under its own uid so the
/// two can be told apart downstream.
pub fn create_generic_grid() -> EnergySystem {
    EnergySystem {
        uid: "Generic_Grid".to_string(),
        ..create_grid_es()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_generic_grid();
        assert_eq!(es.uid, "Generic_Grid");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn mirrors_the_grid_topology() {
        let es = create_generic_grid();
        let grid = create_grid_es();
        assert_eq!(es.node_count(), grid.node_count());
    }
}
