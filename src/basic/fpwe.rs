//! Fully parameterized working example.

use crate::model::{
    Bus, EnergySystem, MinMax, NodeMeta, OnOff, PositiveNegative, SeriesBounds, Sink, Source,
    Storage, Timeframe, Transformer, conversions, flows,
};

/// Builds the fully parameterized working example.
///
/// Same topology as [`create_mwe`](crate::basic::create_mwe) plus a solar
/// panel, with every component parameter spelled out explicitly. Useful as
/// a reference for the complete parameter surface.
pub fn create_fpwe() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 3);

    let solar_panel = Source {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "electricity", "Renewable")
        },
        accumulated_amounts: flows([("electricity", MinMax::new(0.0, 1000.0))]),
        flow_rates: flows([("electricity", MinMax::fixed(20.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::symmetric(42.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::symmetric(0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[12.0, 3.0, 7.0]),
        )])),
        expandable: flows([("electricity", false)]),
        expansion_costs: flows([("electricity", 5.0)]),
        expansion_limits: flows([("electricity", MinMax::unbounded())]),
        milp: flows([("electricity", false)]),
        initial_status: true,
        status_inertia: OnOff::new(1.0, 1.0),
        status_changing_costs: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        costs_for_being_active: 0.0,
        ..Source::new("Solar Panel", ["electricity"])
    };

    let fuel_supply = Source {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "Gas", "source")
        },
        accumulated_amounts: flows([("fuel", MinMax::unbounded())]),
        flow_rates: flows([("fuel", MinMax::new(0.0, 100.0))]),
        flow_costs: flows([("fuel", 10.0)]),
        flow_emissions: flows([("fuel", 3.0)]),
        flow_gradients: flows([("fuel", PositiveNegative::symmetric(100.0))]),
        gradient_costs: flows([("fuel", PositiveNegative::symmetric(0.0))]),
        timeseries: None,
        expandable: flows([("fuel", false)]),
        expansion_costs: flows([("fuel", 5.0)]),
        expansion_limits: flows([("fuel", MinMax::unbounded())]),
        milp: flows([("fuel", false)]),
        initial_status: true,
        status_inertia: OnOff::new(1.0, 1.0),
        status_changing_costs: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        costs_for_being_active: 0.0,
        ..Source::new("Gas Station", ["fuel"])
    };

    let power_generator = Transformer {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "electricity", "transformer")
        },
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 50.0)),
            ("electricity", MinMax::new(0.0, 15.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 10.0)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 10.0)]),
        flow_gradients: flows([
            ("fuel", PositiveNegative::symmetric(50.0)),
            ("electricity", PositiveNegative::symmetric(15.0)),
        ]),
        gradient_costs: flows([
            ("fuel", PositiveNegative::symmetric(0.0)),
            ("electricity", PositiveNegative::symmetric(0.0)),
        ]),
        timeseries: None,
        expandable: flows([("fuel", false), ("electricity", false)]),
        expansion_costs: flows([("fuel", 0.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("fuel", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
        ]),
        milp: flows([("electricity", false), ("fuel", false)]),
        initial_status: true,
        status_inertia: OnOff::new(0.0, 2.0),
        status_changing_costs: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 9.0),
        costs_for_being_active: 0.0,
        ..Transformer::new(
            "Generator",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.42)]),
        )
    };

    let demand = Sink {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "electricity", "demand")
        },
        accumulated_amounts: flows([("electricity", MinMax::unbounded())]),
        flow_rates: flows([("electricity", MinMax::fixed(11.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::symmetric(12.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::symmetric(0.0))]),
        timeseries: None,
        expandable: flows([("electricity", false)]),
        expansion_costs: flows([("electricity", 0.0)]),
        expansion_limits: flows([("electricity", MinMax::unbounded())]),
        milp: flows([("electricity", false)]),
        initial_status: true,
        status_inertia: OnOff::new(2.0, 1.0),
        status_changing_costs: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        costs_for_being_active: 0.0,
        ..Sink::new("Demand", ["electricity"])
    };

    let storage = Storage {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "electricity", "storage")
        },
        idle_changes: PositiveNegative::new(0.0, 1.0),
        flow_rates: flows([("electricity", MinMax::new(0.0, 30.0))]),
        flow_efficiencies: flows([("electricity", crate::model::InOut::new(1.0, 1.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([(
            "electricity",
            PositiveNegative::symmetric(f64::INFINITY),
        )]),
        gradient_costs: flows([("electricity", PositiveNegative::symmetric(0.0))]),
        timeseries: None,
        expandable: flows([("capacity", false), ("electricity", false)]),
        expansion_costs: flows([("capacity", 2.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
        ]),
        milp: flows([("electricity", false)]),
        initial_status: true,
        status_inertia: OnOff::new(0.0, 2.0),
        status_changing_costs: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 42.0),
        costs_for_being_active: 0.0,
        ..Storage::new("Battery", "electricity", "electricity", 10.0, 10.0)
    };

    let fuel_supply_line = Bus {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "gas", "bus")
        },
        ..Bus::new("Pipeline", ["Gas Station.fuel"], ["Generator.fuel"])
    };

    let electricity_line = Bus {
        meta: NodeMeta {
            latitude: 42.0,
            longitude: 42.0,
            ..NodeMeta::tagged("Here", "Power", "electricity", "bus")
        },
        ..Bus::new(
            "Powerline",
            [
                "Generator.electricity",
                "Battery.electricity",
                "Solar Panel.electricity",
            ],
            ["Demand.electricity", "Battery.electricity"],
        )
    };

    EnergySystem {
        busses: vec![fuel_supply_line, electricity_line],
        sinks: vec![demand],
        sources: vec![fuel_supply, solar_panel],
        transformers: vec![power_generator],
        storages: vec![storage],
        ..EnergySystem::new("Fully_Parameterized_Working_Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_fpwe();
        assert_eq!(es.uid, "Fully_Parameterized_Working_Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn solar_profile_spans_the_timeframe() {
        let es = create_fpwe();
        let solar = es.sources.iter().find(|s| s.name == "Solar Panel");
        let solar = solar.expect("solar panel present");
        let ts = solar.timeseries.as_ref().expect("profile set");
        assert_eq!(ts["electricity"].min, vec![12.0, 3.0, 7.0]);
        assert_eq!(es.timeframe.len(), 3);
    }

    #[test]
    fn node_listing_matches_topology() {
        let es = create_fpwe();
        let nodes: Vec<_> = es.nodes().collect();
        assert_eq!(
            nodes,
            vec![
                "Pipeline",
                "Powerline",
                "Gas Station",
                "Solar Panel",
                "Demand",
                "Generator",
                "Battery",
            ]
        );
    }
}
