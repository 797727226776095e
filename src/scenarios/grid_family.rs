//! Shared construction code for the voltage-grid scenario family.
//!
//! The family spans a 2x3 design space: the three voltage levels are
//! coupled either by lossless [`Connector`]s or by lossy grid
//! [`Transformer`]s, and surplus handling is done by nothing at all, by
//! storages, or by expensive balancing source/sink pairs. Each published
//! scenario fixes one point of that space.

use crate::data::{peak, read_profile};
use crate::model::{
    Bus, Connector, EnergySystem, InOut, MinMax, ModelError, NodeMeta, SeriesBounds, Sink, Source,
    Storage, Timeframe, Transformer, conversions, flows,
};
use crate::scenarios::GridParams;

/// How a grid variant buffers surplus and shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Buffering {
    /// Copper-plate style: the grid links are the only flexibility.
    None,
    /// Pumped/battery storages on the powerlines, one per voltage level
    /// plus a heat storage on the district heating line.
    Storages,
    /// Expensive balancing sources and sinks instead of storages.
    SourceSinkPairs,
}

/// The hourly load profiles every grid variant draws from.
struct Profiles {
    pv: Vec<f64>,
    w_on: Vec<f64>,
    w_off: Vec<f64>,
    s_t: Vec<f64>,
    h_d: Vec<f64>,
    i_d: Vec<f64>,
    c_d: Vec<f64>,
    dh_d: Vec<f64>,
    cc_d: Vec<f64>,
}

impl Profiles {
    fn load(periods: usize) -> Result<Self, ModelError> {
        Ok(Self {
            pv: read_profile("Renewable_Energy.csv", "pv_load", periods)?,
            w_on: read_profile("Renewable_Energy.csv", "won_load", periods)?,
            w_off: read_profile("Renewable_Energy.csv", "woff_load", periods)?,
            s_t: read_profile("Renewable_Energy.csv", "st_load", periods)?,
            h_d: read_profile("Loads.csv", "household_demand", periods)?,
            i_d: read_profile("Loads.csv", "industrial_demand", periods)?,
            c_d: read_profile("Loads.csv", "commercial_demand", periods)?,
            dh_d: read_profile("Loads.csv", "heat_demand", periods)?,
            cc_d: read_profile("Car_Charging.csv", "cc_demand", periods)?,
        })
    }
}

fn here(sector: &str, carrier: &str, node_type: &str) -> NodeMeta {
    NodeMeta {
        latitude: 42.0,
        longitude: 42.0,
        ..NodeMeta::tagged("Here", sector, carrier, node_type)
    }
}

/// A profile-driven renewable feed-in source.
fn renewable(name: &str, carrier: &str, sector: &str, cost: f64, profile: &[f64]) -> Source {
    Source {
        meta: here(sector, carrier, "Renewable"),
        flow_rates: flows([(carrier, MinMax::new(0.0, peak(profile)))]),
        flow_costs: flows([(carrier, cost)]),
        flow_emissions: flows([(carrier, 0.0)]),
        timeseries: Some(flows([(carrier, SeriesBounds::fixed(profile))])),
        ..Source::new(name, [carrier])
    }
}

/// A profile-driven demand sink.
fn demand(name: &str, carrier: &str, sector: &str, profile: &[f64]) -> Sink {
    Sink {
        meta: here(sector, carrier, "demand"),
        flow_rates: flows([(carrier, MinMax::new(0.0, peak(profile)))]),
        flow_costs: flows([(carrier, 0.0)]),
        flow_emissions: flows([(carrier, 0.0)]),
        timeseries: Some(flows([(carrier, SeriesBounds::fixed(profile))])),
        ..Sink::new(name, [carrier])
    }
}

/// A fuel commodity source with a capped (or unbounded) supply rate.
fn fuel_supply(name: &str, carrier: &str, sector: &str, cap: f64) -> Source {
    Source {
        meta: here(sector, carrier, "source"),
        flow_rates: flows([("fuel", MinMax::new(0.0, cap))]),
        flow_costs: flows([("fuel", 0.0)]),
        flow_emissions: flows([("fuel", 0.0)]),
        ..Source::new(name, ["fuel"])
    }
}

/// An expensive balancing source keeping a powerline solvable.
fn balancing_source(name: &str, carrier: &str) -> Source {
    Source {
        meta: here("Power", "electricity", "source"),
        flow_rates: flows([(carrier, MinMax::unbounded())]),
        flow_costs: flows([(carrier, 999.0)]),
        ..Source::new(name, [carrier])
    }
}

/// An expensive balancing sink absorbing powerline surplus.
fn balancing_sink(name: &str, carrier: &str) -> Sink {
    Sink {
        meta: here("Power", "electricity", "demand"),
        flow_rates: flows([(carrier, MinMax::unbounded())]),
        flow_costs: flows([(carrier, 999.0)]),
        ..Sink::new(name, [carrier])
    }
}

/// A pumped-storage style buffer on one powerline.
fn pumped_storage(name: &str, carrier: &str, efficiency: f64) -> Storage {
    Storage {
        meta: here("Power", "electricity", "storage"),
        flow_rates: flows([(carrier, MinMax::new(0.0, 8_600.0))]),
        flow_efficiencies: flows([(carrier, InOut::new(efficiency, efficiency))]),
        flow_costs: flows([(carrier, 0.0)]),
        flow_emissions: flows([(carrier, 0.0)]),
        ..Storage::new(name, carrier, carrier, 40_000.0, 50.0)
    }
}

/// Builds a grid variant whose voltage levels share one electricity
/// carrier and are coupled by lossless connectors.
pub(crate) fn connector_grid(
    uid: &str,
    buffering: Buffering,
    params: &GridParams,
) -> Result<EnergySystem, ModelError> {
    let timeframe = Timeframe::hourly(2030, 10, 13, params.periods);
    let profiles = Profiles::load(params.periods)?;

    // Low voltage and heat

    let solar_panel = renewable("Solar Panel", "electricity", "Power", 60.85, &profiles.pv);
    let biogas_supply = fuel_supply("Biogas plant", "Gas", "Coupled", 25_987.87879);

    let bhkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 25_987.87879)),
            ("electricity", MinMax::new(0.0, 8_576.0)),
            ("heat", MinMax::new(0.0, 13_513.69697)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 124.4), ("heat", 31.1)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 0.1573), ("heat", 0.0732)]),
        ..Transformer::new(
            "BHKW",
            ["fuel"],
            ["electricity", "heat"],
            conversions([(("fuel", "electricity"), 0.33), (("fuel", "heat"), 0.52)]),
        )
    };

    let household_demand = demand("Household Demand", "electricity", "Power", &profiles.h_d);
    let commercial_demand = demand("Commercial Demand", "electricity", "Power", &profiles.c_d);
    let heat_demand = demand("District Heating Demand", "heat", "Heat", &profiles.dh_d);

    let gas_supply_line = Bus {
        meta: here("Power", "gas", "bus"),
        ..Bus::new("Gaspipeline", ["Gas Station.fuel"], ["GuD.fuel"])
    };

    let biogas_supply_line = Bus {
        meta: here("Coupled", "gas", "bus"),
        ..Bus::new("Biogas", ["Biogas plant.fuel"], ["BHKW.fuel"])
    };

    let mut lv_inputs = vec!["BHKW.electricity".to_string(), "Solar Panel.electricity".to_string()];
    let mut lv_outputs = vec![
        "Household Demand.electricity".to_string(),
        "Commercial Demand.electricity".to_string(),
    ];
    let mut heat_inputs = vec![
        "BHKW.heat".to_string(),
        "Solar Thermal.heat".to_string(),
        "Power to Heat.heat".to_string(),
        "HKW.heat".to_string(),
    ];
    let mut heat_outputs = vec!["District Heating Demand.heat".to_string()];
    let mut hv_inputs = vec![
        "Offshore Wind Power.electricity".to_string(),
        "GuD.electricity".to_string(),
        "HKW.electricity".to_string(),
        "HKW2.electricity".to_string(),
    ];
    let mut hv_outputs = Vec::new();

    let mut storages = Vec::new();
    let mut extra_sources = Vec::new();
    let mut extra_sinks = Vec::new();

    match buffering {
        Buffering::None => {}
        Buffering::Storages => {
            lv_inputs.push("Battery.electricity".to_string());
            lv_outputs.push("Battery.electricity".to_string());
            heat_inputs.push("Heat Storage.heat".to_string());
            heat_outputs.push("Heat Storage.heat".to_string());
            hv_inputs.push("Pumped Storage.electricity".to_string());
            hv_outputs.push("Pumped Storage.electricity".to_string());

            storages.push(pumped_storage("Battery", "electricity", 0.86));
            storages.push(Storage {
                meta: here("Heat", "Hot Water", "storage"),
                flow_rates: flows([("heat", MinMax::new(0.0, 8_600.0))]),
                flow_efficiencies: flows([("heat", InOut::new(0.95, 0.95))]),
                flow_costs: flows([("heat", 0.0)]),
                flow_emissions: flows([("heat", 0.0)]),
                ..Storage::new("Heat Storage", "heat", "heat", 40_000.0, 50.0)
            });
            storages.push(pumped_storage("Pumped Storage", "electricity", 0.86));
        }
        Buffering::SourceSinkPairs => {
            lv_inputs.push("Power Source.electricity".to_string());
            hv_outputs.push("Power Sink.electricity".to_string());
            extra_sources.push(balancing_source("Power Source", "electricity"));
            extra_sinks.push(balancing_sink("Power Sink", "electricity"));
        }
    }

    let low_electricity_line = Bus {
        inputs: lv_inputs,
        outputs: lv_outputs,
        meta: here("Power", "electricity", "bus"),
        ..Bus::new("Low Voltage Powerline", [], [])
    };

    let heat_line = Bus {
        inputs: heat_inputs,
        outputs: heat_outputs,
        meta: here("Heat", "hot Water", "bus"),
        ..Bus::new("District Heating", [], [])
    };

    // Medium voltage

    let onshore_wind_power =
        renewable("Onshore Wind Power", "electricity", "Power", 61.1, &profiles.w_on);
    let solar_thermal = renewable("Solar Thermal", "heat", "Heat", 73.0, &profiles.s_t);
    let industrial_demand = demand("Industrial Demand", "electricity", "Power", &profiles.i_d);
    let car_charging_station_demand =
        demand("Car charging Station", "electricity", "Power", &profiles.cc_d);

    let power_to_heat = Transformer {
        meta: here("", "Hot Water", "transformer"),
        flow_rates: flows([
            ("electricity", MinMax::new(0.0, 50_000.0)),
            ("heat", MinMax::new(0.0, 50_000.0)),
        ]),
        flow_costs: flows([("electricity", 0.0), ("heat", 0.0)]),
        flow_emissions: flows([("electricity", 0.0), ("heat", 0.0)]),
        ..Transformer::new(
            "Power to Heat",
            ["electricity"],
            ["heat"],
            conversions([(("electricity", "heat"), 1.0)]),
        )
    };

    let medium_electricity_line = Bus {
        meta: here("Power", "electricity", "bus"),
        ..Bus::new(
            "Medium Voltage Powerline",
            ["Onshore Wind Power.electricity"],
            [
                "Car charging Station.electricity",
                "Industrial Demand.electricity",
                "Power to Heat.electricity",
            ],
        )
    };

    let low_medium_transformator = Connector {
        meta: NodeMeta {
            node_type: "connector".to_string(),
            ..NodeMeta::default()
        },
        ..Connector::new(
            "Low Voltage Transformator",
            ("Medium Voltage Powerline", "Low Voltage Powerline"),
        )
    };

    // High voltage

    let offshore_wind_power =
        renewable("Offshore Wind Power", "electricity", "Power", 106.4, &profiles.w_off);
    let coal_supply = fuel_supply("Coal Supply", "Coal", "Coupled", 102_123.3);
    let gas_supply = fuel_supply("Gas Station", "Gas", "Power", f64::INFINITY);

    let hkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 102_123.3)),
            ("electricity", MinMax::new(0.0, 24_509.6)),
            ("heat", MinMax::new(0.0, 61_273.96)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 80.65), ("heat", 20.1625)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 0.5136), ("heat", 0.293)]),
        ..Transformer::new(
            "HKW",
            ["fuel"],
            ["electricity", "heat"],
            conversions([(("fuel", "electricity"), 0.24), (("fuel", "heat"), 0.6)]),
        )
    };

    let hkw_generator_2 = Transformer {
        meta: here("Power", "electricity", "connector"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 102_123.3)),
            ("electricity", MinMax::new(0.0, 43_913.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 80.65)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 0.5136)]),
        ..Transformer::new(
            "HKW2",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.43)]),
        )
    };

    let gud_generator = Transformer {
        meta: here("Power", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 45_325.42373)),
            ("electricity", MinMax::new(0.0, 26_742.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 88.7)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 0.3366)]),
        ..Transformer::new(
            "GuD",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.59)]),
        )
    };

    let coal_supply_line = Bus {
        meta: here("Coupled", "Coal", "bus"),
        ..Bus::new("Coal Supply Line", ["Coal Supply.fuel"], ["HKW.fuel", "HKW2.fuel"])
    };

    let high_electricity_line = Bus {
        inputs: hv_inputs,
        outputs: hv_outputs,
        meta: here("Power", "electricity", "bus"),
        ..Bus::new("High Voltage Powerline", [], [])
    };

    let high_medium_transformator = Connector {
        meta: NodeMeta {
            node_type: "connector".to_string(),
            ..NodeMeta::default()
        },
        ..Connector::new(
            "High Voltage Transformator",
            ("Medium Voltage Powerline", "High Voltage Powerline"),
        )
    };

    let mut sources = vec![
        solar_panel,
        gas_supply,
        onshore_wind_power,
        offshore_wind_power,
        coal_supply,
        solar_thermal,
        biogas_supply,
    ];
    sources.extend(extra_sources);

    let mut sinks = vec![
        household_demand,
        commercial_demand,
        heat_demand,
        industrial_demand,
        car_charging_station_demand,
    ];
    sinks.extend(extra_sinks);

    Ok(EnergySystem {
        busses: vec![
            gas_supply_line,
            low_electricity_line,
            heat_line,
            medium_electricity_line,
            high_electricity_line,
            coal_supply_line,
            biogas_supply_line,
        ],
        sinks,
        sources,
        transformers: vec![
            bhkw_generator,
            power_to_heat,
            gud_generator,
            hkw_generator,
            hkw_generator_2,
        ],
        storages,
        connectors: vec![low_medium_transformator, high_medium_transformator],
        ..EnergySystem::new(uid, timeframe)
    })
}

/// Builds a grid variant with one electricity carrier per voltage level,
/// coupled by directed grid transformers with losses and capacity limits.
pub(crate) fn transformer_grid(
    uid: &str,
    buffering: Buffering,
    params: &GridParams,
) -> Result<EnergySystem, ModelError> {
    let timeframe = Timeframe::hourly(2030, 10, 13, params.periods);
    let profiles = Profiles::load(params.periods)?;
    let eta = params.transformer_efficiency;
    let gridcap = params.gridcapacity;

    // Low voltage and heat

    let solar_panel = renewable(
        "Solar Panel",
        "low-voltage-electricity",
        "Power",
        60.85,
        &profiles.pv,
    );
    let gas_supply = fuel_supply("Gas Station", "Gas", "Power", f64::INFINITY);
    let biogas_supply = fuel_supply("Biogas plant", "Gas", "Coupled", f64::INFINITY);

    let bhkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 25_987.87879)),
            ("low-voltage-electricity", MinMax::new(0.0, 8_576.0)),
            ("heat", MinMax::new(0.0, 13_513.69697)),
        ]),
        flow_costs: flows([
            ("fuel", 0.0),
            ("low-voltage-electricity", 124.4),
            ("heat", 31.1),
        ]),
        flow_emissions: flows([
            ("fuel", 0.0),
            ("low-voltage-electricity", 0.1573),
            ("heat", 0.0732),
        ]),
        ..Transformer::new(
            "BHKW",
            ["fuel"],
            ["low-voltage-electricity", "heat"],
            conversions([
                (("fuel", "low-voltage-electricity"), 0.33),
                (("fuel", "heat"), 0.52),
            ]),
        )
    };

    let household_demand = demand(
        "Household Demand",
        "low-voltage-electricity",
        "Power",
        &profiles.h_d,
    );
    let commercial_demand = demand(
        "Commercial Demand",
        "low-voltage-electricity",
        "Power",
        &profiles.c_d,
    );
    let heat_demand = demand("District Heating Demand", "heat", "Heat", &profiles.dh_d);

    let gas_supply_line = Bus {
        meta: here("Power", "gas", "bus"),
        ..Bus::new("Gaspipeline", ["Gas Station.fuel"], ["GuD.fuel"])
    };

    let biogas_supply_line = Bus {
        meta: here("Coupled", "gas", "bus"),
        ..Bus::new("Biogas", ["Biogas plant.fuel"], ["BHKW.fuel"])
    };

    let mut lv_buffer_in: Option<String> = None;
    let mut lv_buffer_out: Option<String> = None;
    let mut mv_buffer_in: Option<String> = None;
    let mut mv_buffer_out: Option<String> = None;
    let mut hv_buffer_in: Option<String> = None;
    let mut hv_buffer_out: Option<String> = None;
    let mut storages = Vec::new();
    let mut extra_sources = Vec::new();
    let mut extra_sinks = Vec::new();

    match buffering {
        Buffering::None => {}
        Buffering::Storages => {
            lv_buffer_in = Some("Pumped Storage LV.low-voltage-electricity".to_string());
            lv_buffer_out = Some("Pumped Storage LV.low-voltage-electricity".to_string());
            mv_buffer_in = Some("Pumped Storage MV.medium-voltage-electricity".to_string());
            mv_buffer_out = Some("Pumped Storage MV.medium-voltage-electricity".to_string());
            hv_buffer_in = Some("Pumped Storage HV.high-voltage-electricity".to_string());
            hv_buffer_out = Some("Pumped Storage HV.high-voltage-electricity".to_string());

            storages.push(pumped_storage(
                "Pumped Storage LV",
                "low-voltage-electricity",
                0.86,
            ));
            storages.push(pumped_storage(
                "Pumped Storage MV",
                "medium-voltage-electricity",
                0.86,
            ));
            storages.push(pumped_storage(
                "Pumped Storage HV",
                "high-voltage-electricity",
                0.86,
            ));
        }
        Buffering::SourceSinkPairs => {
            lv_buffer_in = Some("Power Source LV.low-voltage-electricity".to_string());
            lv_buffer_out = Some("Power Sink LV.low-voltage-electricity".to_string());
            mv_buffer_in = Some("Power Source MV.medium-voltage-electricity".to_string());
            mv_buffer_out = Some("Power Sink MV.medium-voltage-electricity".to_string());
            hv_buffer_in = Some("Power Source HV.high-voltage-electricity".to_string());
            hv_buffer_out = Some("Power Sink HV.high-voltage-electricity".to_string());

            extra_sources.push(balancing_source("Power Source LV", "low-voltage-electricity"));
            extra_sources.push(balancing_source(
                "Power Source MV",
                "medium-voltage-electricity",
            ));
            extra_sources.push(balancing_source(
                "Power Source HV",
                "high-voltage-electricity",
            ));
            extra_sinks.push(balancing_sink("Power Sink LV", "low-voltage-electricity"));
            extra_sinks.push(balancing_sink("Power Sink MV", "medium-voltage-electricity"));
            extra_sinks.push(balancing_sink("Power Sink HV", "high-voltage-electricity"));
        }
    }

    let mut lv_inputs = vec![
        "BHKW.low-voltage-electricity".to_string(),
        "Solar Panel.low-voltage-electricity".to_string(),
        "Medium Low Transformator.low-voltage-electricity".to_string(),
    ];
    lv_inputs.extend(lv_buffer_in.clone());
    let mut lv_outputs = vec![
        "Household Demand.low-voltage-electricity".to_string(),
        "Commercial Demand.low-voltage-electricity".to_string(),
        "Low Medium Transformator.low-voltage-electricity".to_string(),
    ];
    lv_outputs.extend(lv_buffer_out.clone());

    let low_electricity_line = Bus {
        inputs: lv_inputs,
        outputs: lv_outputs,
        meta: here("Power", "electricity", "bus"),
        ..Bus::new("Low Voltage Powerline", [], [])
    };

    let heat_line = Bus {
        meta: here("Heat", "hot Water", "bus"),
        ..Bus::new(
            "District Heating",
            [
                "BHKW.heat",
                "Solar Thermal.heat",
                "Power to Heat.heat",
                "HKW.heat",
            ],
            ["District Heating Demand.heat"],
        )
    };

    // Medium voltage

    let onshore_wind_power = renewable(
        "Onshore Wind Power",
        "medium-voltage-electricity",
        "power",
        61.1,
        &profiles.w_on,
    );
    let solar_thermal = renewable("Solar Thermal", "heat", "Heat", 73.0, &profiles.s_t);
    let industrial_demand = demand(
        "Industrial Demand",
        "medium-voltage-electricity",
        "Power",
        &profiles.i_d,
    );
    let car_charging_station_demand = demand(
        "Car charging Station",
        "medium-voltage-electricity",
        "Power",
        &profiles.cc_d,
    );

    let power_to_heat = Transformer {
        meta: here("", "Hot Water", "transformer"),
        flow_rates: flows([
            ("medium-voltage-electricity", MinMax::unbounded()),
            ("heat", MinMax::unbounded()),
        ]),
        flow_costs: flows([("medium-voltage-electricity", 0.0), ("heat", 0.0)]),
        flow_emissions: flows([("medium-voltage-electricity", 0.0), ("heat", 0.0)]),
        ..Transformer::new(
            "Power to Heat",
            ["medium-voltage-electricity"],
            ["heat"],
            conversions([(("medium-voltage-electricity", "heat"), 1.0)]),
        )
    };

    let mut mv_inputs = vec![
        "Onshore Wind Power.medium-voltage-electricity".to_string(),
        "High Medium Transformator.medium-voltage-electricity".to_string(),
        "Low Medium Transformator.medium-voltage-electricity".to_string(),
    ];
    mv_inputs.extend(mv_buffer_in.clone());
    let mut mv_outputs = vec![
        "Car charging Station.medium-voltage-electricity".to_string(),
        "Industrial Demand.medium-voltage-electricity".to_string(),
        "Power to Heat.medium-voltage-electricity".to_string(),
        "Medium High Transformator.medium-voltage-electricity".to_string(),
        "Medium Low Transformator.medium-voltage-electricity".to_string(),
    ];
    mv_outputs.extend(mv_buffer_out.clone());

    let medium_electricity_line = Bus {
        inputs: mv_inputs,
        outputs: mv_outputs,
        meta: here("Power", "electricity", "bus"),
        ..Bus::new("Medium Voltage Powerline", [], [])
    };

    // High voltage

    let offshore_wind_power = renewable(
        "Offshore Wind Power",
        "high-voltage-electricity",
        "Power",
        106.4,
        &profiles.w_off,
    );
    let coal_supply = fuel_supply("Coal Supply", "Coal", "Coupled", 102_123.3);

    let hkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 102_123.3)),
            ("high-voltage-electricity", MinMax::new(0.0, 24_509.6)),
            ("heat", MinMax::new(0.0, 61_273.96)),
        ]),
        flow_costs: flows([
            ("fuel", 0.0),
            ("high-voltage-electricity", 80.65),
            ("heat", 20.1625),
        ]),
        flow_emissions: flows([
            ("fuel", 0.0),
            ("high-voltage-electricity", 0.5136),
            ("heat", 0.293),
        ]),
        ..Transformer::new(
            "HKW",
            ["fuel"],
            ["high-voltage-electricity", "heat"],
            conversions([
                (("fuel", "high-voltage-electricity"), 0.24),
                (("fuel", "heat"), 0.6),
            ]),
        )
    };

    let hkw_generator_2 = Transformer {
        meta: here("Coupled", "electricity", "connector"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 102_123.3)),
            ("high-voltage-electricity", MinMax::new(0.0, 43_913.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("high-voltage-electricity", 80.65)]),
        flow_emissions: flows([("fuel", 0.0), ("high-voltage-electricity", 0.5136)]),
        ..Transformer::new(
            "HKW2",
            ["fuel"],
            ["high-voltage-electricity"],
            conversions([(("fuel", "high-voltage-electricity"), 0.43)]),
        )
    };

    let gud_generator = Transformer {
        meta: here("Power", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 45_325.42373)),
            ("high-voltage-electricity", MinMax::new(0.0, 26_742.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("high-voltage-electricity", 88.7)]),
        flow_emissions: flows([("fuel", 0.0), ("high-voltage-electricity", 0.3366)]),
        ..Transformer::new(
            "GuD",
            ["fuel"],
            ["high-voltage-electricity"],
            conversions([(("fuel", "high-voltage-electricity"), 0.59)]),
        )
    };

    let coal_supply_line = Bus {
        meta: here("Coupled", "Coal", "bus"),
        ..Bus::new("Coal Supply Line", ["Coal Supply.fuel"], ["HKW.fuel", "HKW2.fuel"])
    };

    let mut hv_inputs = vec![
        "Offshore Wind Power.high-voltage-electricity".to_string(),
        "HKW2.high-voltage-electricity".to_string(),
        "GuD.high-voltage-electricity".to_string(),
        "HKW.high-voltage-electricity".to_string(),
        "Medium High Transformator.high-voltage-electricity".to_string(),
    ];
    hv_inputs.extend(hv_buffer_in.clone());
    let mut hv_outputs =
        vec!["High Medium Transformator.high-voltage-electricity".to_string()];
    hv_outputs.extend(hv_buffer_out.clone());

    let high_electricity_line = Bus {
        inputs: hv_inputs,
        outputs: hv_outputs,
        meta: here("Power", "electricity", "bus"),
        ..Bus::new("High Voltage Powerline", [], [])
    };

    // Grid structure: one directed coupling transformer per direction

    let grid_link = |name: &str, from: &str, to: &str| Transformer {
        meta: here("Power", "electricity", "connector"),
        flow_rates: flows([
            (from, MinMax::new(0.0, gridcap)),
            (to, MinMax::new(0.0, eta * gridcap)),
        ]),
        flow_costs: flows([(from, 0.0), (to, 0.0)]),
        flow_emissions: flows([(from, 0.0), (to, 0.0)]),
        ..Transformer::new(name, [from], [to], conversions([((from, to), eta)]))
    };

    let low_medium_transformator = grid_link(
        "Low Medium Transformator",
        "low-voltage-electricity",
        "medium-voltage-electricity",
    );
    let medium_low_transformator = grid_link(
        "Medium Low Transformator",
        "medium-voltage-electricity",
        "low-voltage-electricity",
    );
    let medium_high_transformator = grid_link(
        "Medium High Transformator",
        "medium-voltage-electricity",
        "high-voltage-electricity",
    );
    let high_medium_transformator = grid_link(
        "High Medium Transformator",
        "high-voltage-electricity",
        "medium-voltage-electricity",
    );

    let mut sources = vec![
        solar_panel,
        gas_supply,
        onshore_wind_power,
        offshore_wind_power,
        coal_supply,
        solar_thermal,
        biogas_supply,
    ];
    sources.extend(extra_sources);

    let mut sinks = vec![
        household_demand,
        commercial_demand,
        heat_demand,
        industrial_demand,
        car_charging_station_demand,
    ];
    sinks.extend(extra_sinks);

    Ok(EnergySystem {
        busses: vec![
            gas_supply_line,
            low_electricity_line,
            heat_line,
            medium_electricity_line,
            high_electricity_line,
            coal_supply_line,
            biogas_supply_line,
        ],
        sinks,
        sources,
        transformers: vec![
            bhkw_generator,
            power_to_heat,
            gud_generator,
            hkw_generator,
            high_medium_transformator,
            low_medium_transformator,
            medium_low_transformator,
            medium_high_transformator,
            hkw_generator_2,
        ],
        storages,
        ..EnergySystem::new(uid, timeframe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_variants_validate() {
        let params = GridParams::default();
        for buffering in [Buffering::None, Buffering::Storages, Buffering::SourceSinkPairs] {
            let es = connector_grid("grid", buffering, &params).unwrap();
            assert!(es.validate().is_empty(), "{buffering:?}");
            assert_eq!(es.connectors.len(), 2);
        }
    }

    #[test]
    fn transformer_variants_validate() {
        let params = GridParams::default();
        for buffering in [Buffering::Storages, Buffering::SourceSinkPairs] {
            let es = transformer_grid("grid", buffering, &params).unwrap();
            assert!(es.validate().is_empty(), "{buffering:?}");
            assert!(es.connectors.is_empty());
        }
    }

    #[test]
    fn grid_links_scale_with_parameters() {
        let params = GridParams {
            transformer_efficiency: 0.9,
            gridcapacity: 1_000.0,
            ..GridParams::default()
        };
        let es = transformer_grid("grid", Buffering::Storages, &params).unwrap();
        let link = es
            .transformers
            .iter()
            .find(|t| t.name == "Low Medium Transformator")
            .unwrap();
        assert_eq!(link.flow_rates["low-voltage-electricity"].max, 1_000.0);
        assert_eq!(link.flow_rates["medium-voltage-electricity"].max, 900.0);
    }
}
