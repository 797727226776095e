//! Two voltage levels coupled by lossy grid transformers.

use crate::model::{
    Bus, EnergySystem, MinMax, SeriesBounds, Sink, Source, Timeframe, Transformer, conversions,
    flows,
};

/// Builds the two-transformer grid example, emulating common grid congestion
/// behaviours over six timesteps:
///
/// 1. everything provided by HV-Source
/// 2. too much provided, the H2M link congests and MV-BS and MV-XS compensate
/// 3. too little provided, MV-BS steps in
/// 4. everything provided by MV-Source
/// 5. too much provided, the M2H link congests and HV-BS and HV-XS compensate
/// 6. too little provided, HV-BS steps in
pub fn create_simple_transformer_grid_es() -> EnergySystem {
    // high -> med and med -> high efficiencies chosen for integer results
    let eta_h2m = 10.0 / 12.0;
    let eta_m2h = 10.0 / 11.0;

    let timeframe = Timeframe::hourly(1990, 7, 13, 6);

    let hv_profile = [10.0 + 10.0 / eta_h2m, 30.0, 10.0, 0.0, 0.0, 0.0];
    let hv_source = Source {
        flow_rates: flows([("hv-electricity", MinMax::new(0.0, 30.0))]),
        timeseries: Some(flows([("hv-electricity", SeriesBounds::fixed(&hv_profile))])),
        ..Source::new("HV-Source", ["hv-electricity"])
    };

    let mv_profile = [0.0, 0.0, 0.0, 10.0 + 10.0 / eta_m2h, 30.0, 10.0];
    let mv_source = Source {
        flow_rates: flows([("mv-electricity", MinMax::new(0.0, 30.0))]),
        timeseries: Some(flows([("mv-electricity", SeriesBounds::fixed(&mv_profile))])),
        ..Source::new("MV-Source", ["mv-electricity"])
    };

    let hv_balance_source = Source {
        flow_rates: flows([("hv-electricity", MinMax::unbounded())]),
        flow_costs: flows([("hv-electricity", 10.0)]),
        ..Source::new("HV-BS", ["hv-electricity"])
    };

    let mv_balance_source = Source {
        flow_rates: flows([("mv-electricity", MinMax::unbounded())]),
        flow_costs: flows([("mv-electricity", 10.0)]),
        ..Source::new("MV-BS", ["mv-electricity"])
    };

    let high_to_med = Transformer {
        flow_rates: flows([
            ("hv-electricity", MinMax::unbounded()),
            ("mv-electricity", MinMax::new(0.0, 10.0)),
        ]),
        ..Transformer::new(
            "H2M",
            ["hv-electricity"],
            ["mv-electricity"],
            conversions([(("hv-electricity", "mv-electricity"), eta_h2m)]),
        )
    };

    let med_to_high = Transformer {
        flow_rates: flows([
            ("mv-electricity", MinMax::unbounded()),
            ("hv-electricity", MinMax::new(0.0, 10.0)),
        ]),
        ..Transformer::new(
            "M2H",
            ["mv-electricity"],
            ["hv-electricity"],
            conversions([(("mv-electricity", "hv-electricity"), eta_m2h)]),
        )
    };

    let mv_demand = Sink {
        flow_rates: flows([("mv-electricity", MinMax::fixed(10.0))]),
        timeseries: Some(flows([(
            "mv-electricity",
            SeriesBounds::fixed(&[10.0, 12.0, 10.0, 10.0, 10.0, 10.0]),
        )])),
        ..Sink::new("MV-Demand", ["mv-electricity"])
    };

    let hv_demand = Sink {
        flow_rates: flows([("hv-electricity", MinMax::fixed(10.0))]),
        timeseries: Some(flows([(
            "hv-electricity",
            SeriesBounds::fixed(&[10.0, 10.0, 10.0, 10.0, 12.0, 10.0]),
        )])),
        ..Sink::new("HV-Demand", ["hv-electricity"])
    };

    let hv_excess_sink = Sink {
        flow_rates: flows([("hv-electricity", MinMax::unbounded())]),
        flow_costs: flows([("hv-electricity", 10.0)]),
        ..Sink::new("HV-XS", ["hv-electricity"])
    };

    let mv_excess_sink = Sink {
        flow_rates: flows([("mv-electricity", MinMax::unbounded())]),
        flow_costs: flows([("mv-electricity", 10.0)]),
        ..Sink::new("MV-XS", ["mv-electricity"])
    };

    let hv_bus = Bus::new(
        "HV-Bus",
        [
            "HV-Source.hv-electricity",
            "M2H.hv-electricity",
            "HV-BS.hv-electricity",
        ],
        [
            "H2M.hv-electricity",
            "HV-Demand.hv-electricity",
            "HV-XS.hv-electricity",
        ],
    );

    let mv_bus = Bus::new(
        "MV-Bus",
        [
            "MV-Source.mv-electricity",
            "H2M.mv-electricity",
            "MV-BS.mv-electricity",
        ],
        [
            "M2H.mv-electricity",
            "MV-Demand.mv-electricity",
            "MV-XS.mv-electricity",
        ],
    );

    EnergySystem {
        busses: vec![hv_bus, mv_bus],
        sinks: vec![hv_demand, mv_demand, hv_excess_sink, mv_excess_sink],
        sources: vec![hv_source, mv_source, hv_balance_source, mv_balance_source],
        transformers: vec![med_to_high, high_to_med],
        ..EnergySystem::new("Two Transformer Grid Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_simple_transformer_grid_es();
        assert_eq!(es.uid, "Two Transformer Grid Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn link_capacity_limits_the_receiving_side() {
        let es = create_simple_transformer_grid_es();
        let h2m = es
            .transformers
            .iter()
            .find(|t| t.name == "H2M")
            .expect("H2M");
        assert_eq!(h2m.flow_rates["mv-electricity"].max, 10.0);
        assert!(h2m.flow_rates["hv-electricity"].max.is_infinite());
    }

    #[test]
    fn source_profiles_cover_link_losses() {
        let es = create_simple_transformer_grid_es();
        let hv = es
            .sources
            .iter()
            .find(|s| s.name == "HV-Source")
            .expect("HV-Source");
        let profile = &hv.timeseries.as_ref().expect("profile")["hv-electricity"];
        // hour one feeds 10 locally plus 10 through the lossy link
        assert!(profile.max[0] > 20.0);
    }
}
