//! Self-similar energy system assembled from repeated minimum units.

use crate::basic::create_mssesu;
use crate::model::{EnergySystem, Timeframe};

/// Builds a self-similar energy system out of `n` minimum units.
///
/// Unit `k` couples to unit `k - 1` through a connector between their
/// central busses, so the merged system forms a single chain. Pass a
/// timeframe to override the single-step default.
pub fn create_self_similar_energy_system(
    n: usize,
    timeframe: Option<Timeframe>,
) -> EnergySystem {
    let timeframe = timeframe.unwrap_or_else(|| Timeframe::starting_now(1));

    let mut merged = EnergySystem::new(
        &format!("Self_Similar_Energy_System_(N={n})"),
        timeframe,
    );
    for unit in (0..n).map(|k| create_mssesu(k, None)) {
        merged.busses.extend(unit.busses);
        merged.sinks.extend(unit.sinks);
        merged.sources.extend(unit.sources);
        merged.transformers.extend(unit.transformers);
        merged.storages.extend(unit.storages);
        merged.connectors.extend(unit.connectors);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_unit_system_validates() {
        let es = create_self_similar_energy_system(1, None);
        assert_eq!(es.uid, "Self_Similar_Energy_System_(N=1)");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn units_chain_through_connectors() {
        let es = create_self_similar_energy_system(3, None);
        assert_eq!(es.connectors.len(), 2);
        assert_eq!(es.storages.len(), 3);
        assert!(es.validate().is_empty());
    }
}
