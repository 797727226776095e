//! Combined-heat-and-power example optimized for costs.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, Sink, Source, Timeframe, Transformer,
    conversions, flows,
};

/// Builds a minimal CHP example: one gas driven combined-heat-and-power
/// plant competing against expensive backup power and heat sources.
pub fn create_chp() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    let gas_supply = Source::new("Gas Source", ["gas"]);

    let gas_grid = Bus::new("Gas Grid", ["Gas Source.gas"], ["CHP.gas"]);

    // conventional power supply is cheaper, but has emissions allocated to it
    let chp = Transformer {
        flow_costs: flows([("electricity", 3.0), ("heat", 2.0), ("gas", 0.0)]),
        flow_emissions: flows([("electricity", 2.0), ("heat", 3.0), ("gas", 0.0)]),
        ..Transformer::new(
            "CHP",
            ["gas"],
            ["electricity", "heat"],
            conversions([(("gas", "electricity"), 0.3), (("gas", "heat"), 0.2)]),
        )
    };

    let backup_power = Source {
        flow_costs: flows([("electricity", 10.0)]),
        ..Source::new("Backup Power", ["electricity"])
    };

    let power_demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Power Demand", ["electricity"])
    };

    let power_line = Bus::new(
        "Powerline",
        ["Backup Power.electricity", "CHP.electricity"],
        ["Power Demand.electricity"],
    );

    let backup_heat = Source {
        flow_costs: flows([("heat", 10.0)]),
        ..Source::new("Backup Heat", ["heat"])
    };

    let heat_demand = Sink {
        flow_rates: flows([("heat", MinMax::fixed(10.0))]),
        ..Sink::new("Heat Demand", ["heat"])
    };

    let heat_grid = Bus::new(
        "Heat Grid",
        ["CHP.heat", "Backup Heat.heat"],
        ["Heat Demand.heat"],
    );

    EnergySystem {
        busses: vec![gas_grid, power_line, heat_grid],
        sinks: vec![power_demand, heat_demand],
        sources: vec![gas_supply, backup_power, backup_heat],
        transformers: vec![chp],
        global_constraints: GlobalConstraints::default(),
        ..EnergySystem::new("CHP_Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Efficiency;

    #[test]
    fn builds_and_validates() {
        let es = create_chp();
        assert_eq!(es.uid, "CHP_Example");
        assert!(es.validate().is_empty());
        assert_eq!(es.node_count(), 9);
    }

    #[test]
    fn chp_converts_gas_to_both_carriers() {
        let es = create_chp();
        let chp = &es.transformers[0];
        let to_el = ("gas".to_string(), "electricity".to_string());
        let to_heat = ("gas".to_string(), "heat".to_string());
        assert_eq!(chp.conversions[&to_el], Efficiency::Scalar(0.3));
        assert_eq!(chp.conversions[&to_heat], Efficiency::Scalar(0.2));
    }
}
