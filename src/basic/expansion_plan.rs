//! Capacity expansion with capped and uncapped renewables.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, SeriesBounds, Sink, Source, Timeframe, flows,
};

/// Builds the expansion-plan example: an emitting source competes with two
/// expandable renewables under a global emission cap, so meeting demand
/// requires investing in additional renewable capacity.
pub fn create_expansion_plan_example() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    // emitting source having no costs and no flow constraints but emissions
    let emitting_source = Source {
        flow_emissions: flows([("electricity", 1.0)]),
        ..Source::new("Emitting Source", ["electricity"])
    };

    // capped source with existing and maximum installed capacity
    let capped_renewable = Source {
        flow_rates: flows([("electricity", MinMax::new(1.0, 2.0))]),
        flow_costs: flows([("electricity", 2.0)]),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", 1.0)]),
        expansion_limits: flows([("electricity", MinMax::new(1.0, 4.0))]),
        ..Source::new("Capped Renewable", ["electricity"])
    };

    // uncapped source with an externally set profile; the expansion minimum
    // equals the profile peak so the initial capacity stays feasible
    let uncapped_profile = [1.0, 2.0, 3.0, 1.0];
    let uncapped_renewable = Source {
        flow_costs: flows([("electricity", 2.0)]),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", 2.0)]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&uncapped_profile),
        )])),
        expansion_limits: flows([("electricity", MinMax::new(3.0, f64::INFINITY))]),
        ..Source::new("Uncapped Renewable", ["electricity"])
    };

    let electricity_line = Bus::new(
        "Powerline",
        [
            "Emitting Source.electricity",
            "Capped Renewable.electricity",
            "Uncapped Renewable.electricity",
        ],
        ["Demand.electricity"],
    );

    let demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Demand", ["electricity"])
    };

    EnergySystem {
        busses: vec![electricity_line],
        sinks: vec![demand],
        sources: vec![emitting_source, capped_renewable, uncapped_renewable],
        global_constraints: GlobalConstraints {
            emissions: 20.0,
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Expansion Plan Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_expansion_plan_example();
        assert_eq!(es.uid, "Expansion Plan Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn renewables_are_expandable() {
        let es = create_expansion_plan_example();
        let expandable: Vec<_> = es
            .sources
            .iter()
            .filter(|s| s.expandable.get("electricity").copied().unwrap_or(false))
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(expandable, ["Capped Renewable", "Uncapped Renewable"]);
    }
}
