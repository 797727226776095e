//! Minimally parameterized working example.

use crate::model::{
    Bus, EnergySystem, MinMax, Sink, Source, Storage, Timeframe, Transformer, conversions, flows,
};

/// Builds the minimum working example: a gas fuelled generator and a
/// battery covering a flat 10-unit demand over four hours.
///
/// Only the structurally required parameters are set; everything else
/// keeps its default.
pub fn create_mwe() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    let fuel_supply = Source::new("Gas Station", ["fuel"]);

    let power_generator = Transformer {
        flow_costs: flows([("electricity", 2.0), ("fuel", 0.0)]),
        ..Transformer::new(
            "Generator",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.42)]),
        )
    };

    let demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Demand", ["electricity"])
    };

    let storage = Storage {
        flow_costs: flows([("electricity", 0.1)]),
        ..Storage::new("Battery", "electricity", "electricity", 20.0, 10.0)
    };

    let fuel_supply_line = Bus::new("Pipeline", ["Gas Station.fuel"], ["Generator.fuel"]);
    let electricity_line = Bus::new(
        "Powerline",
        ["Generator.electricity", "Battery.electricity"],
        ["Demand.electricity", "Battery.electricity"],
    );

    EnergySystem {
        busses: vec![fuel_supply_line, electricity_line],
        sinks: vec![demand],
        sources: vec![fuel_supply],
        transformers: vec![power_generator],
        storages: vec![storage],
        ..EnergySystem::new("Minimum_Working_Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_mwe();
        assert_eq!(es.uid, "Minimum_Working_Example");
        assert!(es.validate().is_empty());
        assert_eq!(es.node_count(), 6);
    }

    #[test]
    fn demand_is_fixed_at_ten() {
        let es = create_mwe();
        let demand = &es.sinks[0];
        assert_eq!(demand.flow_rates["electricity"], MinMax::fixed(10.0));
    }
}
