//! Cost optimization under a global emission cap.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, Sink, Source, Timeframe, Transformer,
    conversions, flows,
};

/// Builds the emission-objective example: two fossil supply chains and
/// emission-free wind power compete for a flat demand while total
/// emissions are capped at 60 units.
pub fn create_emission_objective() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    // first supply chain
    let fuel_supply = Source {
        flow_emissions: flows([("fuel", 1.5)]),
        flow_costs: flows([("fuel", 2.0)]),
        ..Source::new("Gas Station", ["fuel"])
    };

    let fuel_supply_line = Bus::new("Pipeline", ["Gas Station.fuel"], ["Generator.fuel"]);

    let power_generator = Transformer {
        flow_costs: flows([("electricity", 2.0), ("fuel", 0.0)]),
        flow_emissions: flows([("electricity", 3.0), ("fuel", 0.0)]),
        ..Transformer::new(
            "Generator",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.42)]),
        )
    };

    // second supply chain, cheaper and cleaner but rate limited
    let gas_supply = Source {
        flow_emissions: flows([("gas", 0.5)]),
        flow_costs: flows([("gas", 1.0)]),
        ..Source::new("Gas Source", ["gas"])
    };

    let gas_grid = Bus::new("Gas Grid", ["Gas Source.gas"], ["Gas Plant.gas"]);

    let gas_plant = Transformer {
        flow_rates: flows([
            ("electricity", MinMax::new(0.0, 5.0)),
            ("gas", MinMax::unbounded()),
        ]),
        flow_costs: flows([("electricity", 1.0), ("gas", 0.0)]),
        flow_emissions: flows([("electricity", 2.0), ("gas", 0.0)]),
        ..Transformer::new(
            "Gas Plant",
            ["gas"],
            ["electricity"],
            conversions([(("gas", "electricity"), 0.6)]),
        )
    };

    // wind power is more expensive but has no emissions allocated to it
    let wind_power = Source {
        flow_costs: flows([("electricity", 10.0)]),
        ..Source::new("Wind Power", ["electricity"])
    };

    let demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Demand", ["electricity"])
    };

    let electricity_line = Bus::new(
        "Powerline",
        [
            "Generator.electricity",
            "Wind Power.electricity",
            "Gas Plant.electricity",
        ],
        ["Demand.electricity"],
    );

    EnergySystem {
        busses: vec![fuel_supply_line, electricity_line, gas_grid],
        sinks: vec![demand],
        sources: vec![fuel_supply, wind_power, gas_supply],
        transformers: vec![power_generator, gas_plant],
        global_constraints: GlobalConstraints {
            emissions: 60.0,
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Emission_Objective_Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_emission_objective();
        assert_eq!(es.uid, "Emission_Objective_Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn emissions_are_capped() {
        let es = create_emission_objective();
        assert_eq!(es.global_constraints.emissions, 60.0);
        assert!(es.global_constraints.resources.is_infinite());
    }
}
