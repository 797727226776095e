//! CSV-profile-driven single-bus system for statistical model comparisons.

use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, ModelError, NodeMeta, SeriesBounds, Sink, Source,
    Timeframe, Transformer, conversions, flows,
};
use crate::data::{peak, read_profile};

/// Builds the statistical-identification example from measured Hamburg 2019
/// load profiles: solar feed-in and electricity demand from CSV data, backed
/// by a gas power plant and an expensive import.
///
/// # Errors
///
/// Returns a `ModelError` when a profile file cannot be read or holds fewer
/// rows than `periods`.
pub fn create_statistical_identification_example(
    periods: usize,
) -> Result<EnergySystem, ModelError> {
    let timeframe = Timeframe::hourly(2019, 1, 1, periods);

    let pv_hh = read_profile("solar_HH_2019.csv", "solar", periods)?;
    let max_pv = peak(&pv_hh);

    let de_hh = read_profile("el_demand_HH_2019.csv", "Last (MW)", periods)?;
    let max_de = peak(&de_hh);

    let powerline = Bus {
        meta: NodeMeta::tagged("HH", "Power", "electricity", "AC-Bus"),
        ..Bus::new(
            "Powerline",
            [
                "Gas Powerplant.electricity",
                "Import.electricity",
                "Solar.electricity",
            ],
            ["Demand.electricity", "Excess.electricity"],
        )
    };

    let demand = Sink {
        meta: NodeMeta::tagged("HH", "power", "electricity", "demand"),
        flow_rates: flows([("electricity", MinMax::new(0.0, max_de))]),
        timeseries: Some(flows([("electricity", SeriesBounds::fixed(&de_hh))])),
        ..Sink::new("Demand", ["electricity"])
    };

    let excess = Sink {
        meta: NodeMeta {
            region: "HH".to_string(),
            carrier: "electricity".to_string(),
            node_type: "Demand".to_string(),
            ..NodeMeta::default()
        },
        ..Sink::new("Excess", ["electricity"])
    };

    let solar = Source {
        meta: NodeMeta::tagged("HH", "Power", "electricity", "renewable"),
        flow_rates: flows([("electricity", MinMax::new(0.0, max_pv))]),
        flow_costs: flows([("electricity", 9.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        timeseries: Some(flows([("electricity", SeriesBounds::fixed(&pv_hh))])),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", 5.0)]),
        expansion_limits: flows([("electricity", MinMax::unbounded())]),
        ..Source::new("Solar", ["electricity"])
    };

    let gas_pipeline = Bus {
        meta: NodeMeta::tagged("HH", "Power", "gas", "GAS"),
        ..Bus::new("Gas Pipeline", ["Gas Supply.gas"], ["Gas Powerplant.gas"])
    };

    let gas_supply = Source {
        meta: NodeMeta {
            region: "HH".to_string(),
            carrier: "GAS".to_string(),
            node_type: "Gas Supply".to_string(),
            ..NodeMeta::default()
        },
        ..Source::new("Gas Supply", ["gas"])
    };

    let gas_powerplant = Transformer {
        meta: NodeMeta::tagged("HH", "ELECTRICITY", "GAS", "Gas Powerplant"),
        flow_rates: flows([
            ("gas", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 400.0)),
        ]),
        flow_costs: flows([("gas", 10.0), ("electricity", 82.0)]),
        flow_emissions: flows([("gas", 0.2), ("electricity", 0.0)]),
        ..Transformer::new(
            "Gas Powerplant",
            ["gas"],
            ["electricity"],
            conversions([(("gas", "electricity"), 0.4075)]),
        )
    };

    let el_import = Source {
        meta: NodeMeta {
            region: "HH".to_string(),
            carrier: "electricity".to_string(),
            node_type: "Import".to_string(),
            ..NodeMeta::default()
        },
        flow_rates: flows([("electricity", MinMax::unbounded())]),
        flow_costs: flows([("electricity", 999.0)]),
        flow_emissions: flows([("electricity", 0.45)]),
        ..Source::new("Import", ["electricity"])
    };

    Ok(EnergySystem {
        busses: vec![powerline, gas_pipeline],
        sinks: vec![demand, excess],
        sources: vec![el_import, solar, gas_supply],
        transformers: vec![gas_powerplant],
        global_constraints: GlobalConstraints {
            name: "2019".to_string(),
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Statistical Identification Example", timeframe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_statistical_identification_example(24).unwrap();
        assert_eq!(es.uid, "Statistical Identification Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn demand_cap_tracks_the_profile_peak() {
        let es = create_statistical_identification_example(24).unwrap();
        let demand = &es.sinks[0];
        let profile = &demand.timeseries.as_ref().unwrap()["electricity"];
        let cap = demand.flow_rates["electricity"].max;
        assert!(profile.max.iter().all(|v| *v <= cap));
    }

    #[test]
    fn overlong_request_fails() {
        assert!(create_statistical_identification_example(100_000).is_err());
    }
}
