//! Emission accounting on storage dispatch.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, SeriesBounds, Sink, Source, Storage, Timeframe,
    flows,
};

/// Builds the storage emissions plausibility check: a burst of free supply
/// in the first hour can only reach the later hours through an emitting
/// storage, capped at 20 emission units overall.
pub fn create_storage_emissions() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    let demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Energy Demand Component", ["electricity"])
    };

    let storage = Storage {
        flow_emissions: flows([("electricity", 1.0)]),
        ..Storage::new(
            "Energy Storage Component",
            "electricity",
            "electricity",
            100.0,
            0.0,
        )
    };

    let source_1 = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 100.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[110.0, 0.0, 0.0, 0.0]),
        )])),
        ..Source::new("Energy Source Component 1", ["electricity"])
    };

    let source_2 = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        flow_costs: flows([("electricity", 1.0)]),
        ..Source::new("Energy Source Component 2", ["electricity"])
    };

    let central_bus = Bus::new(
        "Central Bus",
        [
            "Energy Source Component 1.electricity",
            "Energy Source Component 2.electricity",
            "Energy Storage Component.electricity",
        ],
        [
            "Energy Storage Component.electricity",
            "Energy Demand Component.electricity",
        ],
    );

    EnergySystem {
        busses: vec![central_bus],
        sinks: vec![demand],
        sources: vec![source_1, source_2],
        storages: vec![storage],
        global_constraints: GlobalConstraints {
            name: "emissions_constraint".to_string(),
            emissions: 20.0,
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Storage Emissions MSC", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_storage_emissions();
        assert_eq!(es.uid, "Storage Emissions MSC");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn discharge_is_the_emitting_path() {
        let es = create_storage_emissions();
        let storage = &es.storages[0];
        assert_eq!(storage.flow_emissions["electricity"], 1.0);
        assert_eq!(storage.capacity, 100.0);
        assert_eq!(es.global_constraints.emissions, 20.0);
    }
}
