//! Fractal system models chained from randomized minimal units.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Bus, Connector, EnergySystem, MinMax, NodeMeta, Sink, Source, Storage, Timeframe, Transformer,
    conversions, flows,
};

/// Builds one randomized minimal unit: a fixed electricity demand, a
/// renewable and a fuel-fired supply path, a small storage and a pair of
/// expensive excess nodes keeping the unit solvable for any draw. Units
/// with `n > 0` carry a connector towards the bus of unit `n - 1`.
///
/// Passing a `seed` makes the demand and renewable draws reproducible.
pub fn create_minimal_es_unit(
    n: usize,
    timeframe: Option<Timeframe>,
    seed: Option<u64>,
) -> EnergySystem {
    let timeframe = timeframe.unwrap_or_else(|| Timeframe::starting_now(5));

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let demand = rng.random_range(1..=100) as f64;
    let renewable_output = rng.random_range(1..=50) as f64;

    let demand_sink = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(demand))]),
        ..Sink::new(&format!("Sink {n}"), ["electricity"])
    };

    // keeps the unit solvable regardless of the random draws
    let excess_sink = Sink {
        flow_costs: flows([("electricity", 100.0)]),
        ..Sink::new(&format!("Excess Sink {n}"), ["electricity"])
    };

    let excess_source = Source {
        flow_costs: flows([("electricity", 100.0)]),
        ..Source::new(&format!("Excess Source {n}"), ["electricity"])
    };

    let renewable_source = Source {
        meta: NodeMeta {
            carrier: "Electricity".to_string(),
            node_type: "Renewable".to_string(),
            ..NodeMeta::default()
        },
        flow_rates: flows([("electricity", MinMax::fixed(renewable_output))]),
        flow_costs: flows([("electricity", 5.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        ..Source::new(&format!("Renewable Source {n}"), ["electricity"])
    };

    let non_renewable_source = Source {
        flow_costs: flows([("fuel", 10.0)]),
        ..Source::new(&format!("Non Renewable Source {n}"), ["fuel"])
    };

    let power_generator = Transformer::new(
        &format!("Power Generator {n}"),
        ["fuel"],
        ["electricity"],
        conversions([(("fuel", "electricity"), 0.42)]),
    );

    let mut connectors = Vec::new();
    if n > 0 {
        connectors.push(Connector::new(
            &format!("Connector {n}"),
            (
                format!("Central Bus {}", n - 1).as_str(),
                format!("Central Bus {n}").as_str(),
            ),
        ));
    }

    let storage = Storage::new(&format!("Storage {n}"), "electricity", "electricity", 1.0, 1.0);

    let central_bus = Bus::new(
        &format!("Central Bus {n}"),
        [
            format!("Excess Source {n}.electricity").as_str(),
            format!("Storage {n}.electricity").as_str(),
            format!("Renewable Source {n}.electricity").as_str(),
            format!("Power Generator {n}.electricity").as_str(),
        ],
        [
            format!("Excess Sink {n}.electricity").as_str(),
            format!("Sink {n}.electricity").as_str(),
            format!("Storage {n}.electricity").as_str(),
        ],
    );

    let fuel_line = Bus::new(
        &format!("Fuel Line {n}"),
        [format!("Non Renewable Source {n}.fuel").as_str()],
        [format!("Power Generator {n}.fuel").as_str()],
    );

    EnergySystem {
        busses: vec![central_bus, fuel_line],
        sinks: vec![demand_sink, excess_sink],
        sources: vec![excess_source, non_renewable_source, renewable_source],
        transformers: vec![power_generator],
        storages: vec![storage],
        connectors,
        ..EnergySystem::new(&format!("Minimum Self Similar System Model Unit {n}"), timeframe)
    }
}

/// Builds the self similar system model: `n` minimal units merged into one
/// system, each chained to its predecessor through a connector.
pub fn create_self_similar_system_model(n: usize, timeframe: Option<Timeframe>) -> EnergySystem {
    let timeframe = timeframe.unwrap_or_else(|| Timeframe::starting_now(5));

    let mut merged = EnergySystem::new(
        &format!("Self Similar System Model (n={n})"),
        timeframe.clone(),
    );
    for nmbr in 0..n {
        let fractal = create_minimal_es_unit(nmbr, Some(timeframe.clone()), None);
        merged.busses.extend(fractal.busses);
        merged.sinks.extend(fractal.sinks);
        merged.sources.extend(fractal.sources);
        merged.transformers.extend(fractal.transformers);
        merged.storages.extend(fractal.storages);
        merged.connectors.extend(fractal.connectors);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_units_validate() {
        let es = create_self_similar_system_model(3, None);
        assert_eq!(es.uid, "Self Similar System Model (n=3)");
        assert!(es.validate().is_empty());
        assert_eq!(es.connectors.len(), 2);
    }

    #[test]
    fn empty_model_is_allowed() {
        let es = create_self_similar_system_model(0, None);
        assert_eq!(es.node_count(), 0);
    }

    #[test]
    fn seeded_units_are_reproducible() {
        let a = create_minimal_es_unit(0, None, Some(42));
        let b = create_minimal_es_unit(0, None, Some(42));
        assert_eq!(
            a.sinks[0].flow_rates["electricity"],
            b.sinks[0].flow_rates["electricity"],
        );
    }

    #[test]
    fn first_unit_carries_no_connector() {
        let es = create_minimal_es_unit(0, None, Some(7));
        assert_eq!(es.uid, "Minimum Self Similar System Model Unit 0");
        assert!(es.connectors.is_empty());
        assert!(es.validate().is_empty());
    }
}
