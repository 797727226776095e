//! Emission accounting across both product flows of a CHP plant.

use crate::model::{
    Bus, Chp, EnergySystem, GlobalConstraints, MinMax, Sink, Source, Timeframe, conversions, flows,
};

/// Builds the CHP emissions plausibility check: a CHP with emissions on both
/// its electricity and hot-water output competes against clean but costly
/// backup sources under a 54-unit emission cap.
pub fn create_chp_emissions() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    let power_demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Power Demand Component", ["electricity"])
    };

    let heat_demand = Sink {
        flow_rates: flows([("hot_water", MinMax::fixed(8.0))]),
        ..Sink::new("Heat Demand Component", ["hot_water"])
    };

    let chp = Chp {
        conversions: conversions([
            (("gas", "electricity"), 0.5),
            (("gas", "hot_water"), 0.4),
        ]),
        flow_rates: flows([
            ("gas", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 10.0)),
            ("hot_water", MinMax::new(0.0, 8.0)),
        ]),
        flow_emissions: flows([("electricity", 1.0), ("hot_water", 1.0), ("gas", 0.0)]),
        ..Chp::new("CHP", ["gas"], ["electricity", "hot_water"])
    };

    let gas_source = Source {
        flow_rates: flows([("gas", MinMax::unbounded())]),
        ..Source::new("Gas Commodity", ["gas"])
    };

    let power_source = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 10.0))]),
        flow_costs: flows([("electricity", 1.0)]),
        ..Source::new("Power Source Component", ["electricity"])
    };

    let heat_source = Source {
        flow_rates: flows([("hot_water", MinMax::new(0.0, 8.0))]),
        flow_costs: flows([("hot_water", 1.0)]),
        ..Source::new("Heat Source Component", ["hot_water"])
    };

    let gas_bus = Bus::new("Gas Bus", ["Gas Commodity.gas"], ["CHP.gas"]);

    let power_bus = Bus::new(
        "Power Bus",
        ["Power Source Component.electricity", "CHP.electricity"],
        ["Power Demand Component.electricity"],
    );

    let heat_bus = Bus::new(
        "Heat Bus",
        ["Heat Source Component.hot_water", "CHP.hot_water"],
        ["Heat Demand Component.hot_water"],
    );

    EnergySystem {
        busses: vec![gas_bus, power_bus, heat_bus],
        sinks: vec![power_demand, heat_demand],
        sources: vec![gas_source, power_source, heat_source],
        chps: vec![chp],
        global_constraints: GlobalConstraints {
            name: "emissions_constraint".to_string(),
            emissions: 54.0,
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Chp Emissions MSC", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_chp_emissions();
        assert_eq!(es.uid, "Chp Emissions MSC");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn both_products_carry_emissions() {
        let es = create_chp_emissions();
        let chp = &es.chps[0];
        assert_eq!(chp.flow_emissions["electricity"], 1.0);
        assert_eq!(chp.flow_emissions["hot_water"], 1.0);
        assert_eq!(es.global_constraints.emissions, 54.0);
    }
}
