//! Hamburg energy system fed by measured 2019 load profiles.

use crate::data::{peak, read_profile};
use crate::model::{
    Bus, EnergySystem, GlobalConstraints, MinMax, ModelError, NodeMeta, OnOff, SeriesBounds, Sink,
    Source, Storage, Timeframe, Transformer, conversions, flows,
};
use crate::utils::annuity;

fn plant_meta(region: &str, node_type: &str, carrier: &str, lat: f64, lon: f64) -> NodeMeta {
    NodeMeta {
        latitude: lat,
        longitude: lon,
        component: "transformer".to_string(),
        ..NodeMeta::tagged(region, "coupled", carrier, node_type)
    }
}

/// Coal-fired combined heat and power block, 40.75 % electric and 40 %
/// thermal efficiency.
fn coal_chp(name: &str, node_type: &str, region: &str, site: (f64, f64), caps: (f64, f64)) -> Transformer {
    Transformer {
        meta: plant_meta(region, node_type, "coal", site.0, site.1),
        flow_rates: flows([
            ("coal", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, caps.0)),
            ("hot_water", MinMax::new(0.0, caps.1)),
        ]),
        flow_costs: flows([("coal", 0.0), ("electricity", 82.0), ("hot_water", 19.68)]),
        // emissions are attributed to the coal supply
        flow_emissions: flows([("coal", 0.0), ("electricity", 0.0), ("hot_water", 0.0)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 7.0),
        status_changing_costs: OnOff::new(49.0, 0.0),
        ..Transformer::new(
            name,
            ["coal"],
            ["electricity", "hot_water"],
            conversions([
                (("coal", "electricity"), 0.4075),
                (("coal", "hot_water"), 0.40),
            ]),
        )
    }
}

/// Coal condensing block of the Moorburg plant.
fn moorburg_block(name: &str, node_type: &str) -> Transformer {
    Transformer {
        meta: NodeMeta {
            sector: "power".to_string(),
            ..plant_meta("HH", node_type, "coal", 53.489, 9.949)
        },
        flow_rates: flows([
            ("coal", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 784.0)),
        ]),
        flow_costs: flows([("coal", 0.0), ("electricity", 82.0)]),
        flow_emissions: flows([("coal", 0.0), ("electricity", 0.34 / 0.4625)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 7.0),
        status_changing_costs: OnOff::new(49.0, 0.0),
        ..Transformer::new(
            name,
            ["coal"],
            ["electricity"],
            conversions([(("coal", "electricity"), 0.4625)]),
        )
    }
}

/// Oil-fired gas turbine at the Wedel site.
fn wedel_gt(name: &str, node_type: &str) -> Transformer {
    Transformer {
        meta: NodeMeta {
            sector: "power".to_string(),
            ..plant_meta("SH", node_type, "oil", 53.5662, 9.72864)
        },
        flow_rates: flows([
            ("oil", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 50.5)),
        ]),
        flow_costs: flows([("oil", 0.0), ("electricity", 90.0)]),
        flow_emissions: flows([("oil", 0.0), ("electricity", 0.28 / 0.3072)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 9.0),
        status_changing_costs: OnOff::new(45.0, 0.0),
        ..Transformer::new(
            name,
            ["oil"],
            ["electricity"],
            conversions([(("oil", "electricity"), 0.3072)]),
        )
    }
}

fn fuel_source(name: &str, carrier: &str, sector: &str, node_type: &str, emissions: f64) -> Source {
    Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", sector, carrier, node_type)
        },
        flow_emissions: flows([(carrier, emissions)]),
        ..Source::new(name, [carrier])
    }
}

/// Builds the Hamburg scenario: the city's 2019 power and district heating
/// system with its actual plant fleet, measured demand and feed-in profiles
/// and expensive electricity and heat imports as a fallback.
///
/// # Errors
///
/// Returns a `ModelError` when a profile file cannot be read or holds fewer
/// rows than `periods`.
pub fn create_hhes(periods: usize) -> Result<EnergySystem, ModelError> {
    let timeframe = Timeframe::hourly(2019, 1, 1, periods);

    let pv_hh = read_profile("solar_HH_2019.csv", "solar", periods)?;
    let max_pv = peak(&pv_hh);

    let wo_hh = read_profile("wind_HH_2019.csv", "wind", periods)?;
    let max_wo = peak(&wo_hh);

    let de_hh = read_profile("el_demand_HH_2019.csv", "Last (MW)", periods)?;
    let max_de = peak(&de_hh);

    let th_hh = read_profile("th_demand_HH_2019.csv", "actual_total_load", periods)?;
    let max_th = peak(&th_hh);

    // Fossil supplies. Plant emissions are reallocated onto the fuel
    // sources so every downstream flow stays emission free.
    let gass = fuel_source("gas supply", "gas", "coupled", "gas_supply", 0.2);
    let coals = fuel_source("coal supply", "coal", "coupled", "coal_supply", 0.34);
    let oils = fuel_source("oil supply", "oil", "power", "oil_supply", 0.0);
    let waste = fuel_source("waste", "waste", "coupled", "renewable", 0.0426);

    // HKW ADM
    let chp1 = Transformer {
        meta: plant_meta("HH", "HKW ADM", "gas", 53.51, 9.94985),
        flow_rates: flows([
            ("gas", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
            ("hot_water", MinMax::unbounded()),
        ]),
        flow_costs: flows([("gas", 0.0), ("electricity", 90.0), ("hot_water", 21.6)]),
        flow_emissions: flows([("gas", 0.0), ("electricity", 0.0), ("hot_water", 0.0)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 1.0),
        status_changing_costs: OnOff::new(24.0, 0.0),
        ..Transformer::new(
            "chp1",
            ["gas"],
            ["electricity", "hot_water"],
            conversions([(("gas", "electricity"), 0.3773), (("gas", "hot_water"), 0.3)]),
        )
    };

    // HKW Moorburg
    let pp1 = moorburg_block("pp1", "HKW Moorburg Block A");
    let pp2 = moorburg_block("pp2", "HKW Moorburg Block B");

    // HKW Tiefstack
    let chp2 = Transformer {
        meta: plant_meta("HH", "HKW Tiefstack GuD", "gas", 53.53, 10.07),
        flow_rates: flows([
            ("gas", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 123.0)),
            ("hot_water", MinMax::new(0.0, 180.0)),
        ]),
        flow_costs: flows([("gas", 0.0), ("electricity", 90.0), ("hot_water", 18.9)]),
        flow_emissions: flows([("gas", 0.0), ("electricity", 0.0), ("hot_water", 0.0)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 5.0),
        status_changing_costs: OnOff::new(40.0, 0.0),
        ..Transformer::new(
            "chp2",
            ["gas"],
            ["electricity", "hot_water"],
            conversions([(("gas", "electricity"), 0.585), (("gas", "hot_water"), 0.40)]),
        )
    };
    let chp3 = coal_chp(
        "chp3",
        "HKW Tiefstack Block 2",
        "HH",
        (53.53, 10.06),
        (188.0, 293.0),
    );

    // Wedel
    let pp3 = wedel_gt("pp3", "Wedel GT A");
    let pp4 = wedel_gt("pp4", "Wedel GT B");
    let chp4 = coal_chp(
        "chp4",
        "HKW Wedel Block 1",
        "SH",
        (53.5667, 9.72864),
        (130.0, 130.0),
    );
    let chp5 = coal_chp(
        "chp5",
        "HKW Wedel Block 2",
        "SH",
        (53.5667, 9.72864),
        (118.0, 88.0),
    );

    // MVR waste combustion Rugenberger Damm
    let chp6 = Transformer {
        meta: plant_meta("HH", "MVR Müllverwertung Rugenberger Damm", "waste", 53.52111, 9.93339),
        flow_rates: flows([
            ("waste", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 24.0)),
            ("hot_water", MinMax::new(0.0, 70.0)),
        ]),
        flow_costs: flows([("waste", 0.0), ("electricity", 82.0), ("hot_water", 20.0)]),
        flow_emissions: flows([("waste", 0.0), ("electricity", 0.0), ("hot_water", 0.0)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 9.0),
        status_changing_costs: OnOff::new(40.0, 0.0),
        ..Transformer::new(
            "chp6",
            ["waste"],
            ["electricity", "hot_water"],
            conversions([
                (("waste", "electricity"), 0.06),
                (("waste", "hot_water"), 0.15),
            ]),
        )
    };

    // Heizwerk Hafencity
    let hp1 = Transformer {
        meta: NodeMeta {
            sector: "heat".to_string(),
            ..plant_meta("HH", "Heizwerk Hafencity", "gas", 53.54106052, 9.99590096)
        },
        flow_rates: flows([
            ("gas", MinMax::unbounded()),
            ("hot_water", MinMax::new(0.0, 348.0)),
        ]),
        flow_costs: flows([("gas", 0.0), ("hot_water", 20.0)]),
        flow_emissions: flows([("gas", 0.0), ("hot_water", 0.2 / 0.96666)]),
        expandable: flows([("gas", false), ("hot_water", true)]),
        expansion_costs: flows([("gas", 0.0), ("hot_water", 0.0)]),
        expansion_limits: flows([
            ("gas", MinMax::unbounded()),
            ("hot_water", MinMax::new(348.0, f64::INFINITY)),
        ]),
        ..Transformer::new(
            "hp1",
            ["gas"],
            ["hot_water"],
            conversions([(("gas", "hot_water"), 0.96666)]),
        )
    };

    let bm_chp = Transformer {
        meta: NodeMeta {
            sector: "heat".to_string(),
            ..plant_meta("HH", "Heizwerk Hafencity", "gas", 53.54106052, 9.99590096)
        },
        flow_rates: flows([
            ("biomass", MinMax::unbounded()),
            ("electricity", MinMax::new(0.0, 48.4)),
            ("hot_water", MinMax::new(0.0, 126.0)),
        ]),
        flow_costs: flows([("biomass", 0.0), ("electricity", 61.0), ("hot_water", 20.0)]),
        flow_emissions: flows([("biomass", 0.0), ("electricity", 0.0), ("hot_water", 0.0)]),
        initial_status: false,
        status_inertia: OnOff::new(0.0, 9.0),
        status_changing_costs: OnOff::new(40.0, 0.0),
        ..Transformer::new(
            "biomass chp",
            ["biomass"],
            ["electricity", "hot_water"],
            conversions([
                (("biomass", "electricity"), 48.4 / 126.0),
                (("biomass", "hot_water"), 1.0),
            ]),
        )
    };

    // Renewables
    let pv1 = Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", "power", "solar", "renewable")
        },
        flow_rates: flows([("electricity", MinMax::new(0.0, max_pv))]),
        flow_costs: flows([("electricity", 74.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        timeseries: Some(flows([("electricity", SeriesBounds::fixed(&pv_hh))])),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", annuity(1_000_000.0, 20, 0.05))]),
        expansion_limits: flows([("electricity", MinMax::new(max_pv, f64::INFINITY))]),
        ..Source::new("pv1", ["electricity"])
    };

    let won1 = Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", "power", "wind", "renewable")
        },
        flow_rates: flows([("electricity", MinMax::new(0.0, max_wo))]),
        flow_costs: flows([("electricity", 61.0)]),
        flow_emissions: flows([("electricity", 0.007)]),
        timeseries: Some(flows([("electricity", SeriesBounds::fixed(&wo_hh))])),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", annuity(1_750_000.0, 20, 0.05))]),
        expansion_limits: flows([("electricity", MinMax::new(max_wo, f64::INFINITY))]),
        ..Source::new("won1", ["electricity"])
    };

    let bm_supply = Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", "coupled", "biomass", "renewable")
        },
        // carries the reallocated biomass chp emissions
        flow_emissions: flows([("biomass", 0.001 / 1.0 + 0.001 / (48.8 / 126.0))]),
        ..Source::new("biomass supply", ["biomass"])
    };

    // Storages
    let est = Storage {
        meta: NodeMeta {
            component: "storage".to_string(),
            ..NodeMeta::tagged("HH", "power", "electricity", "storage")
        },
        flow_rates: flows([("electricity", MinMax::unbounded())]),
        flow_costs: flows([("electricity", 20.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        expandable: flows([("capacity", true), ("electricity", false)]),
        expansion_costs: flows([("capacity", annuity(1_000_000.0, 10, 0.05))]),
        ..Storage::new("est", "electricity", "electricity", 1.0, 1.0)
    };

    // P2H Karoline
    let p2h = Transformer {
        meta: NodeMeta {
            sector: "heat".to_string(),
            ..plant_meta("HH", "power2heat", "hot_water", 53.55912, 9.97148)
        },
        flow_rates: flows([
            ("electricity", MinMax::unbounded()),
            ("hot_water", MinMax::new(0.0, 45.0)),
        ]),
        flow_costs: flows([("electricity", 0.0), ("hot_water", 0.0)]),
        flow_emissions: flows([("electricity", 0.0), ("hot_water", 0.0)]),
        expandable: flows([("electricity", false), ("hot_water", true)]),
        expansion_costs: flows([("hot_water", annuity(200_000.0, 30, 0.05))]),
        expansion_limits: flows([("hot_water", MinMax::new(45.0, 200.0))]),
        ..Transformer::new(
            "p2h",
            ["electricity"],
            ["hot_water"],
            conversions([(("electricity", "hot_water"), 0.99)]),
        )
    };

    // Imports
    let imel = Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", "power", "electricity", "import")
        },
        flow_costs: flows([("electricity", 999.0)]),
        flow_emissions: flows([("electricity", 0.401)]),
        expandable: flows([("electricity", true)]),
        expansion_costs: flows([("electricity", 999_999_999.0)]),
        ..Source::new("imported el", ["electricity"])
    };

    let imth = Source {
        meta: NodeMeta {
            component: "source".to_string(),
            ..NodeMeta::tagged("HH", "heat", "hot_water", "import")
        },
        flow_costs: flows([("hot_water", 999.0)]),
        flow_emissions: flows([("hot_water", 0.1)]),
        expandable: flows([("hot_water", true)]),
        expansion_costs: flows([("hot_water", 999_999_999.0)]),
        ..Source::new("imported heat", ["hot_water"])
    };

    // Sinks
    let demand_el = Sink {
        meta: NodeMeta {
            component: "sink".to_string(),
            ..NodeMeta::tagged("HH", "power", "electricity", "demand")
        },
        flow_rates: flows([("electricity", MinMax::new(0.0, max_de))]),
        timeseries: Some(flows([("electricity", SeriesBounds::fixed(&de_hh))])),
        ..Sink::new("demand el", ["electricity"])
    };

    let demand_th = Sink {
        meta: NodeMeta {
            component: "sink".to_string(),
            ..NodeMeta::tagged("HH", "heat", "hot_water", "demand")
        },
        flow_rates: flows([("hot_water", MinMax::new(0.0, max_th))]),
        timeseries: Some(flows([("hot_water", SeriesBounds::fixed(&th_hh))])),
        ..Sink::new("demand th", ["hot_water"])
    };

    let excess_el = Sink {
        meta: NodeMeta {
            component: "sink".to_string(),
            ..NodeMeta::tagged("HH", "power", "electricity", "excess")
        },
        ..Sink::new("excess el", ["electricity"])
    };

    let excess_th = Sink {
        meta: NodeMeta {
            component: "sink".to_string(),
            ..NodeMeta::tagged("HH", "heat", "hot_water", "excess")
        },
        ..Sink::new("excess th", ["hot_water"])
    };

    // Busses
    let bm_logistics = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "coupled", "biomass", "logistics")
        },
        ..Bus::new(
            "biomass logistics",
            ["biomass supply.biomass"],
            ["biomass chp.biomass"],
        )
    };

    let gas_pipeline = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "coupled", "gas", "gas_pipeline")
        },
        ..Bus::new(
            "gas pipeline",
            ["gas supply.gas"],
            ["chp1.gas", "chp2.gas", "hp1.gas"],
        )
    };

    let coal_supply_line = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "coupled", "coal", "gas_pipeline")
        },
        ..Bus::new(
            "coal supply line",
            ["coal supply.coal"],
            ["pp1.coal", "pp2.coal", "chp3.coal", "chp4.coal", "chp5.coal"],
        )
    };

    let oil_supply_line = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "power", "oil", "oil_delivery")
        },
        ..Bus::new("oil supply line", ["oil supply.oil"], ["pp3.oil", "pp4.oil"])
    };

    let waste_supply = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "coupled", "waste", "waste_supply")
        },
        ..Bus::new("waste supply", ["waste.waste"], ["chp6.waste"])
    };

    let powerline = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "power", "electricity", "powerline")
        },
        ..Bus::new(
            "powerline",
            [
                "chp1.electricity",
                "chp2.electricity",
                "chp3.electricity",
                "chp4.electricity",
                "chp5.electricity",
                "chp6.electricity",
                "pp1.electricity",
                "pp2.electricity",
                "pp3.electricity",
                "pp4.electricity",
                "pv1.electricity",
                "won1.electricity",
                "biomass chp.electricity",
                "imported el.electricity",
                "est.electricity",
            ],
            [
                "demand el.electricity",
                "excess el.electricity",
                "est.electricity",
                "p2h.electricity",
            ],
        )
    };

    let district_heating = Bus {
        meta: NodeMeta {
            component: "bus".to_string(),
            ..NodeMeta::tagged("HH", "heat", "hot_water", "district_heating_pipeline")
        },
        ..Bus::new(
            "district heating pipeline",
            [
                "chp1.hot_water",
                "chp2.hot_water",
                "chp3.hot_water",
                "chp4.hot_water",
                "chp6.hot_water",
                "chp5.hot_water",
                "biomass chp.hot_water",
                "imported heat.hot_water",
                "p2h.hot_water",
                "hp1.hot_water",
            ],
            ["demand th.hot_water", "excess th.hot_water"],
        )
    };

    Ok(EnergySystem {
        busses: vec![
            coal_supply_line,
            gas_pipeline,
            oil_supply_line,
            waste_supply,
            powerline,
            district_heating,
            bm_logistics,
        ],
        sinks: vec![demand_el, demand_th, excess_el, excess_th],
        sources: vec![gass, coals, oils, waste, pv1, won1, bm_supply, imel, imth],
        transformers: vec![
            chp1, chp2, chp3, chp4, chp5, chp6, pp1, pp2, pp3, pp4, hp1, p2h, bm_chp,
        ],
        storages: vec![est],
        global_constraints: GlobalConstraints {
            name: "2019".to_string(),
            ..GlobalConstraints::default()
        },
        ..EnergySystem::new("Energy System Hamburg", timeframe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_hhes(24).unwrap();
        assert_eq!(es.uid, "Energy System Hamburg");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn plant_fleet_is_complete() {
        let es = create_hhes(24).unwrap();
        assert_eq!(es.transformers.len(), 13);
        assert_eq!(es.sources.len(), 9);
        assert_eq!(es.busses.len(), 7);
    }

    #[test]
    fn renewable_expansion_starts_at_the_profile_peak() {
        let es = create_hhes(24).unwrap();
        let pv1 = es.sources.iter().find(|s| s.name == "pv1").unwrap();
        let cap = pv1.flow_rates["electricity"].max;
        assert_eq!(pv1.expansion_limits["electricity"].min, cap);
    }

    #[test]
    fn overlong_request_fails() {
        assert!(create_hhes(100_000).is_err());
    }
}
