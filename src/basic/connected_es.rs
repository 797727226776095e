//! Minimal transshipment problem: two grids joined by a lossy connector.

use crate::model::{
    Bus, Connector, EnergySystem, MinMax, SeriesBounds, Sink, Source, Timeframe, couplings, flows,
};

/// Builds two single-bus systems with complementary demand profiles,
/// coupled by a connector with asymmetric transfer losses.
pub fn create_connected_es() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 3);

    let s1 = Sink {
        flow_rates: flows([("electricity", MinMax::new(0.0, 15.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[0.0, 15.0, 10.0]),
        )])),
        ..Sink::new("sink-01", ["electricity"])
    };

    let so1 = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        flow_costs: flows([("electricity", 1.0)]),
        flow_emissions: flows([("electricity", 0.8)]),
        ..Source::new("source-01", ["electricity"])
    };

    let mb1 = Bus::new("bus-01", ["source-01.electricity"], ["sink-01.electricity"]);

    let s2 = Sink {
        flow_rates: flows([("electricity", MinMax::new(0.0, 15.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[15.0, 0.0, 10.0]),
        )])),
        ..Sink::new("sink-02", ["electricity"])
    };

    let so2 = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        flow_costs: flows([("electricity", 1.0)]),
        flow_emissions: flows([("electricity", 1.2)]),
        ..Source::new("source-02", ["electricity"])
    };

    let mb2 = Bus::new("bus-02", ["source-02.electricity"], ["sink-02.electricity"]);

    let connector = Connector {
        conversions: couplings([(("bus-01", "bus-02"), 0.9), (("bus-02", "bus-01"), 0.8)]),
        ..Connector::new("connector", ("bus-01", "bus-02"))
    };

    EnergySystem {
        busses: vec![mb1, mb2],
        sinks: vec![s1, s2],
        sources: vec![so1, so2],
        connectors: vec![connector],
        ..EnergySystem::new("Connected-Energy-Systems-Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_connected_es();
        assert_eq!(es.uid, "Connected-Energy-Systems-Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn connector_losses_are_asymmetric() {
        let es = create_connected_es();
        let c = &es.connectors[0];
        let forward = ("bus-01".to_string(), "bus-02".to_string());
        let backward = ("bus-02".to_string(), "bus-01".to_string());
        assert_eq!(c.conversions[&forward], 0.9);
        assert_eq!(c.conversions[&backward], 0.8);
    }

    #[test]
    fn demand_profiles_complement_each_other() {
        let es = create_connected_es();
        let p1 = &es.sinks[0].timeseries.as_ref().expect("profile")["electricity"];
        let p2 = &es.sinks[1].timeseries.as_ref().expect("profile")["electricity"];
        for (a, b) in p1.max.iter().zip(&p2.max) {
            assert!(a + b > 0.0);
        }
    }
}
