//! Small energy system utilizing an expandable storage.

use crate::model::{
    Bus, EnergySystem, InOut, MinMax, NodeMeta, SeriesBounds, Sink, Source, Storage, Timeframe,
    flows,
};

/// Builds the storage example: a generator that only produces during the
/// first three hours and a storage bridging the supply gap.
///
/// The storage starts with zero installed capacity but is capacity
/// expandable, the common greenfield use case.
pub fn create_storage_example() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 5);

    let demand = Sink {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "sink".to_string(),
            ..NodeMeta::default()
        },
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[10.0, 10.0, 7.0, 10.0, 10.0]),
        )])),
        ..Sink::new("Demand", ["electricity"])
    };

    let generator = Source {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "source".to_string(),
            ..NodeMeta::default()
        },
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        flow_costs: flows([("electricity", 2.0)]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[19.0, 19.0, 19.0, 0.0, 0.0]),
        )])),
        ..Source::new("Generator", ["electricity"])
    };

    let powerline = Bus {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "bus".to_string(),
            ..NodeMeta::default()
        },
        ..Bus::new(
            "Powerline",
            ["Generator.electricity", "Storage.electricity"],
            ["Demand.electricity", "Storage.electricity"],
        )
    };

    let storage = Storage {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "storage".to_string(),
            ..NodeMeta::default()
        },
        flow_efficiencies: flows([("electricity", InOut::new(0.9, 0.9))]),
        flow_costs: flows([("electricity", 1.0)]),
        flow_emissions: flows([("electricity", 0.5)]),
        expandable: flows([("capacity", true), ("electricity", false)]),
        expansion_costs: flows([("capacity", 0.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
        ]),
        ..Storage::new("Storage", "electricity", "electricity", 0.0, 0.0)
    };

    EnergySystem {
        busses: vec![powerline],
        sinks: vec![demand],
        sources: vec![generator],
        storages: vec![storage],
        ..EnergySystem::new("Storage-Energysystem-Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_storage_example();
        assert_eq!(es.uid, "Storage-Energysystem-Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn storage_starts_empty_but_expandable() {
        let es = create_storage_example();
        let storage = &es.storages[0];
        assert_eq!(storage.capacity, 0.0);
        assert!(storage.expandable["capacity"]);
        assert!(!storage.expandable["electricity"]);
    }
}
