//! Zero-cost commitment and expansion under a low emission cap.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, SeriesBounds, Sink, Source, Timeframe, flows,
};

/// Builds the zero-costs example: no commitment or expansion costs
/// anywhere, only a tight emission constraint. Deliberately ambiguous for
/// solvers and useful to exercise result scaling against zero cost totals.
pub fn create_zero_costs_es() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 4);

    // emitting source having no costs and no flow constraints but emissions
    let emitting_source = Source {
        flow_emissions: flows([("electricity", 1.0)]),
        ..Source::new("Emitting Source", ["electricity"])
    };

    // existing and maximum installed capacity, no costs, no emissions
    let capped_renewable = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 2.0))]),
        expandable: flows([("electricity", true)]),
        expansion_limits: flows([("electricity", MinMax::new(2.0, 4.0))]),
        ..Source::new("Capped Renewable", ["electricity"])
    };

    // uncapped source with an externally set profile
    let uncapped_profile = [1.0, 2.0, 3.0, 1.0];
    let uncapped_renewable = Source {
        flow_rates: flows([("electricity", MinMax::new(0.0, 1.0))]),
        expandable: flows([("electricity", true)]),
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
            emissions: 8.0,
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Zero Costs Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_zero_costs_es();
        assert_eq!(es.uid, "Zero Costs Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn no_source_carries_costs() {
        let es = create_zero_costs_es();
        for source in &es.sources {
            assert!(source.flow_costs.values().all(|c| *c == 0.0) || source.flow_costs.is_empty());
        }
        assert_eq!(es.global_constraints.emissions, 8.0);
    }
}
