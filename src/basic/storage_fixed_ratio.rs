//! Storage expansion with capacity and flow rate tied to a fixed ratio.

use crate::model::{
    Bus, EnergySystem, InOut, MinMax, NodeMeta, SeriesBounds, Sink, Source, Storage, Timeframe,
    flows,
};

/// Builds the fixed-ratio storage expansion example: like
/// [`create_storage_example`](crate::basic::create_storage_example), but the
/// storage starts at one unit of capacity with a 10:1 capacity to flow rate
/// ratio that expansion has to preserve.
pub fn create_storage_fixed_ratio_expansion_example() -> EnergySystem {
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
        flow_costs: flows([("electricity", 0.0)]),
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
        flow_rates: flows([("electricity", MinMax::new(0.0, 0.1))]),
        flow_efficiencies: flows([("electricity", InOut::new(0.95, 0.89))]),
        flow_costs: flows([("electricity", 1.0)]),
        flow_emissions: flows([("electricity", 0.5)]),
        expandable: flows([("capacity", true), ("electricity", true)]),
        fixed_expansion_ratios: flows([("electricity", true)]),
        expansion_costs: flows([("capacity", 2.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::new(1.0, f64::INFINITY)),
            ("electricity", MinMax::new(0.1, f64::INFINITY)),
        ]),
        ..Storage::new("Storage", "electricity", "electricity", 1.0, 0.0)
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
        let es = create_storage_fixed_ratio_expansion_example();
        assert_eq!(es.uid, "Storage-Energysystem-Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn expansion_ratio_is_fixed() {
        let es = create_storage_fixed_ratio_expansion_example();
        let storage = &es.storages[0];
        assert!(storage.fixed_expansion_ratios["electricity"]);
        assert!(storage.expandable["capacity"]);
        assert_eq!(storage.capacity, 1.0);
        assert_eq!(storage.flow_rates["electricity"].max, 0.1);
    }
}
