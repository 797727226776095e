//! Transformer with a per-timestep efficiency series.

use crate::model::{
    Bus, EnergySystem, MinMax, NodeMeta, Sink, Source, Timeframe, Transformer, conversions, flows,
};

/// Builds a small system whose transformer converts with a different
/// efficiency each hour, forcing the expensive import to fill the gaps.
pub fn create_time_varying_efficiency_transformer() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 3);

    let demand = Sink {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "sink".to_string(),
            ..NodeMeta::default()
        },
        flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
        ..Sink::new("Demand", ["electricity"])
    };

    let commodity = Source {
        meta: NodeMeta {
            carrier: "energy".to_string(),
            node_type: "source".to_string(),
            ..NodeMeta::default()
        },
        ..Source::new("Commodity", ["energy"])
    };

    let import_source = Source {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "source".to_string(),
            ..NodeMeta::default()
        },
        flow_costs: flows([("electricity", 1000.0)]),
        ..Source::new("Import", ["electricity"])
    };

    let transformer = Transformer {
        flow_costs: flows([("energy", 0.0), ("electricity", 100.0)]),
        flow_emissions: flows([("energy", 0.0), ("electricity", 1000.0)]),
        ..Transformer::new(
            "Transformer",
            ["energy"],
            ["electricity"],
            conversions([(
                ("energy", "electricity"),
                vec![3.0 / 5.0, 4.0 / 5.0, 2.0 / 5.0],
            )]),
        )
    };

    let commodity_bus = Bus {
        meta: NodeMeta {
            carrier: "energy".to_string(),
            node_type: "bus".to_string(),
            ..NodeMeta::default()
        },
        ..Bus::new("Com Bus", ["Commodity.energy"], ["Transformer.energy"])
    };

    let powerline = Bus {
        meta: NodeMeta {
            carrier: "electricity".to_string(),
            node_type: "bus".to_string(),
            ..NodeMeta::default()
        },
        ..Bus::new(
            "Powerline",
            ["Transformer.electricity", "Import.electricity"],
            ["Demand.electricity"],
        )
    };

    EnergySystem {
        busses: vec![commodity_bus, powerline],
        sinks: vec![demand],
        sources: vec![commodity, import_source],
        transformers: vec![transformer],
        ..EnergySystem::new("Transformer-Timeseries-Example", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Efficiency;

    #[test]
    fn builds_and_validates() {
        let es = create_time_varying_efficiency_transformer();
        assert_eq!(es.uid, "Transformer-Timeseries-Example");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn efficiency_series_spans_the_timeframe() {
        let es = create_time_varying_efficiency_transformer();
        let key = ("energy".to_string(), "electricity".to_string());
        match &es.transformers[0].conversions[&key] {
            Efficiency::Series(values) => assert_eq!(values.len(), es.timeframe.len()),
            Efficiency::Scalar(_) => panic!("expected a series efficiency"),
        }
    }
}
