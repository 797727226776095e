//! CHP example using the dedicated extraction-condensing component.

use crate::model::{
    Bus, Chp, EnergySystem, MinMax, SeriesBounds, Sink, Source, Timeframe, conversions, couplings,
    flows,
};

/// Builds the variable CHP example: same story as
/// [`create_chp`](crate::basic::create_chp) but with two [`Chp`] components
/// exercising the extraction-condensing extras.
pub fn create_variable_chp() -> EnergySystem {
    let periods = 4;
    let timeframe = Timeframe::hourly(1990, 7, 13, periods);

    let gas_supply = Source::new("Gas Source", ["gas"]);

    let gas_grid = Bus::new("Gas Grid", ["Gas Source.gas"], ["CHP1.gas", "CHP2.gas"]);

    // conventional power supply is cheaper, but has emissions allocated to it
    let chp1 = Chp {
        conversions: conversions([(("gas", "electricity"), 0.3), (("gas", "heat"), 0.2)]),
        conversion_factor_full_condensation: couplings([(("gas", "electricity"), 0.5)]),
        flow_rates: flows([
            ("electricity", MinMax::new(0.0, 9.0)),
            ("heat", MinMax::new(0.0, 6.0)),
            ("gas", MinMax::unbounded()),
        ]),
        flow_costs: flows([("electricity", 3.0), ("heat", 2.0), ("gas", 0.0)]),
        flow_emissions: flows([("electricity", 2.0), ("heat", 3.0), ("gas", 0.0)]),
        ..Chp::new("CHP1", ["gas"], ["electricity", "heat"])
    };

    let chp2 = Chp {
        enthalpy_loss: Some(SeriesBounds::new(
            vec![1.0; periods],
            vec![0.18; periods],
        )),
        power_wo_dist_heat: Some(SeriesBounds::new(vec![8.0; periods], vec![20.0; periods])),
        el_efficiency_wo_dist_heat: Some(SeriesBounds::new(
            vec![0.43; periods],
            vec![0.53; periods],
        )),
        min_condenser_load: Some(vec![3.0; periods]),
        power_loss_index: Some(vec![0.19; periods]),
        back_pressure: Some(false),
        flow_costs: flows([("electricity", 3.0), ("heat", 2.0), ("gas", 0.0)]),
        flow_emissions: flows([("electricity", 2.0), ("heat", 3.0), ("gas", 0.0)]),
        ..Chp::new("CHP2", ["gas"], ["electricity", "heat"])
    };

    let backup_power = Source {
        flow_costs: flows([("electricity", 10.0)]),
        ..Source::new("Backup Power", ["electricity"])
    };

    let power_demand = Sink {
        flow_rates: flows([("electricity", MinMax::fixed(20.0))]),
        ..Sink::new("Power Demand", ["electricity"])
    };

    let power_line = Bus {
        meta: crate::model::NodeMeta {
            sector: "Power".to_string(),
            ..Default::default()
        },
        ..Bus::new(
            "Powerline",
            [
                "Backup Power.electricity",
                "CHP1.electricity",
                "CHP2.electricity",
            ],
            ["Power Demand.electricity"],
        )
    };

    let backup_heat = Source {
        flow_costs: flows([("heat", 10.0)]),
        ..Source::new("Backup Heat", ["heat"])
    };

    let heat_demand = Sink {
        flow_rates: flows([("heat", MinMax::fixed(10.0))]),
        ..Sink::new("Heat Demand", ["heat"])
    };

    let heat_grid = Bus {
        meta: crate::model::NodeMeta {
            sector: "Heat".to_string(),
            ..Default::default()
        },
        ..Bus::new(
            "Heat Grid",
            ["CHP1.heat", "CHP2.heat", "Backup Heat.heat"],
            ["Heat Demand.heat"],
        )
    };

    EnergySystem {
        busses: vec![gas_grid, power_line, heat_grid],
        chps: vec![chp1, chp2],
        sinks: vec![power_demand, heat_demand],
        sources: vec![gas_supply, backup_power, backup_heat],
        ..EnergySystem::new("CHP_Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_variable_chp();
        assert_eq!(es.uid, "CHP_Example");
        assert!(es.validate().is_empty());
        assert_eq!(es.chps.len(), 2);
    }

    #[test]
    fn chp2_series_match_the_timeframe() {
        let es = create_variable_chp();
        let chp2 = es.chps.iter().find(|c| c.name == "CHP2").expect("CHP2");
        let enthalpy = chp2.enthalpy_loss.as_ref().expect("enthalpy loss set");
        assert_eq!(enthalpy.min.len(), es.timeframe.len());
        assert_eq!(chp2.back_pressure, Some(false));
    }
}
