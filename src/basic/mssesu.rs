//! Minimum self-similar energy system unit with randomized load levels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Bus, Connector, EnergySystem, MinMax, NodeMeta, Sink, Source, Storage, Timeframe, Transformer,
    conversions, flows,
};

/// Builds the minimum self-similar energy system unit (mssesu) number `n`.
///
/// Demand and renewable output are drawn at random; excess source and sink
/// keep the unit solvable whatever the draw. For `n > 0` a connector towards
/// `central_bus_{n-1}` is included, so chaining units yields one coupled
/// system. Pass a seed for reproducible draws.
pub fn create_mssesu(n: usize, seed: Option<u64>) -> EnergySystem {
    let timeframe = Timeframe::starting_now(1);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let demand = rng.random_range(1..=100) as f64;
    let renewable_output = rng.random_range(1..=50) as f64;

    let demand_sink = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(demand))]),
        ..Sink::new(&format!("sink_{n}"), ["electricity"])
    };

    // keeps the unit solvable even for unlucky draws
    let excess_sink = Sink {
        flow_costs: flows([("electricity", 100.0)]),
        ..Sink::new(&format!("excess_sink_{n}"), ["electricity"])
    };

    let excess_source = Source {
        flow_costs: flows([("electricity", 100.0)]),
        ..Source::new(&format!("excess_source_{n}"), ["electricity"])
    };

    let renewable_source = Source {
        meta: NodeMeta {
            carrier: "Electricity".to_string(),
            node_type: "Renewable".to_string(),
            ..NodeMeta::default()
        },
        flow_costs: flows([("electricity", 5.0)]),
        flow_rates: flows([("electricity", MinMax::fixed(renewable_output))]),
        flow_emissions: flows([("electricity", 0.0)]),
        ..Source::new(&format!("renewable_source_{n}"), ["electricity"])
    };

    let non_renewable_source = Source {
        flow_costs: flows([("fuel", 10.0)]),
        ..Source::new(&format!("non_renewable_source_{n}"), ["fuel"])
    };

    let power_generator = Transformer::new(
        &format!("power_generator_{n}"),
        ["fuel"],
        ["electricity"],
        conversions([(("fuel", "electricity"), 0.42)]),
    );

    let connectors = if n == 0 {
        Vec::new()
    } else {
        vec![Connector::new(
            &format!("connector_{}", n - 1),
            (
                format!("central_bus_{}", n - 1).as_str(),
                format!("central_bus_{n}").as_str(),
            ),
        )]
    };

    let storage = Storage::new(&format!("storage_{n}"), "electricity", "electricity", 1.0, 1.0);

    let central_bus = Bus::new(
        &format!("central_bus_{n}"),
        [
            format!("excess_source_{n}.electricity").as_str(),
            format!("storage_{n}.electricity").as_str(),
            format!("renewable_source_{n}.electricity").as_str(),
            format!("power_generator_{n}.electricity").as_str(),
        ],
        [
            format!("excess_sink_{n}.electricity").as_str(),
            format!("sink_{n}.electricity").as_str(),
            format!("storage_{n}.electricity").as_str(),
        ],
    );

    let fuel_line = Bus::new(
        &format!("fuel_line_{n}"),
        [format!("non_renewable_source_{n}.fuel").as_str()],
        [format!("power_generator_{n}.fuel").as_str()],
    );

    EnergySystem {
        busses: vec![central_bus, fuel_line],
        sinks: vec![demand_sink, excess_sink],
        sources: vec![excess_source, non_renewable_source, renewable_source],
        transformers: vec![power_generator],
        storages: vec![storage],
        connectors,
        ..EnergySystem::new(&format!("Energy_System_{n}"), timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_one_links_back_to_unit_zero() {
        let es = create_mssesu(1, Some(42));
        assert_eq!(es.uid, "Energy_System_1");
        assert_eq!(es.connectors.len(), 1);
        assert_eq!(
            es.connectors[0].interfaces,
            ("central_bus_0".to_string(), "central_bus_1".to_string())
        );
    }

    #[test]
    fn unit_zero_stands_alone_and_validates() {
        let es = create_mssesu(0, Some(42));
        assert!(es.connectors.is_empty());
        assert!(es.validate().is_empty());
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let a = create_mssesu(0, Some(7));
        let b = create_mssesu(0, Some(7));
        assert_eq!(
            a.sinks[0].flow_rates["electricity"],
            b.sinks[0].flow_rates["electricity"]
        );
    }
}
