//! Fully parameterized three-level grid over three hourly steps.

use crate::model::{
    Bus, Connector, EnergySystem, InOut, MinMax, NodeMeta, OnOff, PositiveNegative, SeriesBounds,
    Sink, Source, Storage, Timeframe, Transformer, conversions, flows,
};

fn here(sector: &str, carrier: &str, node_type: &str) -> NodeMeta {
    NodeMeta {
        latitude: 42.0,
        longitude: 42.0,
        ..NodeMeta::tagged("Here", sector, carrier, node_type)
    }
}

/// Builds the small-number grid scenario: every component is spelled out
/// with the complete parameter set (accumulated amounts, gradients, status
/// parameters), making it the reference for attribute coverage across the
/// grid topology.
pub fn create_grid_es() -> EnergySystem {
    let timeframe = Timeframe::hourly(1990, 7, 13, 3);

    let solar_panel = Source {
        meta: here("Power", "Electricity", "Renewable"),
        accumulated_amounts: flows([("electricity", MinMax::new(0.0, 1000.0))]),
        flow_rates: flows([("electricity", MinMax::new(0.0, 25.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::new(42.0, 42.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[12.0, 22.0, 7.0]),
        )])),
        expandable: flows([("electricity", false)]),
        expansion_costs: flows([("electricity", 5.0)]),
        expansion_limits: flows([("electricity", MinMax::unbounded())]),
        milp: flows([("electricity", false)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Solar Panel", ["electricity"])
    };

    let gas_supply = Source {
        meta: here("Power", "Gas", "source"),
        flow_rates: flows([("fuel", MinMax::new(0.0, 1000.0))]),
        flow_costs: flows([("fuel", 10.0)]),
        flow_emissions: flows([("fuel", 3.0)]),
        flow_gradients: flows([("fuel", PositiveNegative::new(1000.0, 1000.0))]),
        gradient_costs: flows([("fuel", PositiveNegative::new(0.0, 0.0))]),
        expansion_costs: flows([("fuel", 5.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Gas Station", ["fuel"])
    };

    let biogas_supply = Source {
        meta: here("Coupled", "Gas", "source"),
        flow_rates: flows([("fuel", MinMax::new(0.0, 1000.0))]),
        flow_costs: flows([("fuel", 0.0)]),
        flow_emissions: flows([("fuel", 0.0)]),
        flow_gradients: flows([("fuel", PositiveNegative::new(1000.0, 1000.0))]),
        gradient_costs: flows([("fuel", PositiveNegative::new(0.0, 0.0))]),
        expansion_costs: flows([("fuel", 5.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Biogas plant", ["fuel"])
    };

    let bhkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 100.0)),
            ("electricity", MinMax::new(0.0, 30.0)),
            ("heat", MinMax::new(0.0, 100.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 10.0), ("heat", 5.0)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 10.0), ("heat", 5.0)]),
        flow_gradients: flows([
            ("fuel", PositiveNegative::new(100.0, 100.0)),
            ("electricity", PositiveNegative::new(30.0, 30.0)),
            ("heat", PositiveNegative::new(100.0, 100.0)),
        ]),
        gradient_costs: flows([
            ("fuel", PositiveNegative::new(0.0, 0.0)),
            ("electricity", PositiveNegative::new(0.0, 0.0)),
            ("heat", PositiveNegative::new(0.0, 0.0)),
        ]),
        status_inertia: OnOff::new(0.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 9.0),
        ..Transformer::new(
            "BHKW",
            ["fuel"],
            ["electricity", "heat"],
            conversions([(("fuel", "electricity"), 0.35), (("fuel", "heat"), 0.55)]),
        )
    };

    let household_demand = Sink {
        meta: here("Power", "electricity", "demand"),
        flow_rates: flows([("electricity", MinMax::fixed(190.0))]),
        flow_gradients: flows([("electricity", PositiveNegative::new(200.0, 200.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        status_inertia: OnOff::new(2.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        ..Sink::new("Household Demand", ["electricity"])
    };

    let commercial_demand = Sink {
        meta: here("Power", "electricity", "demand"),
        flow_rates: flows([("electricity", MinMax::new(0.0, 200.0))]),
        flow_gradients: flows([("electricity", PositiveNegative::new(200.0, 200.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[80.0, 20.0, 130.0]),
        )])),
        status_inertia: OnOff::new(2.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        ..Sink::new("Commercial Demand", ["electricity"])
    };

    let heat_demand = Sink {
        meta: here("Heat", "hot Water", "demand"),
        flow_rates: flows([("heat", MinMax::new(300.0, 500.0))]),
        flow_gradients: flows([("heat", PositiveNegative::new(500.0, 500.0))]),
        gradient_costs: flows([("heat", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "heat",
            SeriesBounds::fixed(&[340.0, 300.0, 380.0]),
        )])),
        status_inertia: OnOff::new(2.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        ..Sink::new("District Heating Demand", ["heat"])
    };

    let battery_storage = Storage {
        meta: here("Power", "electricity", "storage"),
        idle_changes: PositiveNegative::new(0.0, 1.0),
        flow_rates: flows([("electricity", MinMax::new(0.0, 30.0))]),
        flow_efficiencies: flows([("electricity", InOut::new(1.0, 1.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::symmetric(f64::INFINITY))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        expandable: flows([("capacity", false), ("electricity", false)]),
        expansion_costs: flows([("capacity", 2.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
        ]),
        status_inertia: OnOff::new(0.0, 2.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 42.0),
        ..Storage::new("Battery", "electricity", "electricity", 20.0, 10.0)
    };

    let heat_storage = Storage {
        meta: here("Heat", "Hot Water", "storage"),
        idle_changes: PositiveNegative::new(0.0, 0.15),
        flow_rates: flows([("heat", MinMax::new(0.0, 50.0))]),
        flow_efficiencies: flows([("heat", InOut::new(0.95, 0.95))]),
        flow_costs: flows([("heat", 0.0)]),
        flow_emissions: flows([("heat", 0.0)]),
        flow_gradients: flows([("heat", PositiveNegative::symmetric(f64::INFINITY))]),
        gradient_costs: flows([("heat", PositiveNegative::new(0.0, 0.0))]),
        expandable: flows([("capacity", false), ("heat", false)]),
        expansion_costs: flows([("capacity", 2.0), ("heat", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::unbounded()),
            ("heat", MinMax::unbounded()),
        ]),
        status_inertia: OnOff::new(0.0, 2.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 42.0),
        ..Storage::new("Heat Storage", "heat", "heat", 50.0, 10.0)
    };

    let pumped_storage = Storage {
        meta: here("Power", "electricity", "storage"),
        flow_rates: flows([("electricity", MinMax::new(0.0, 100.0))]),
        flow_efficiencies: flows([("electricity", InOut::new(0.9, 0.9))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::symmetric(f64::INFINITY))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        expandable: flows([("capacity", false), ("electricity", false)]),
        expansion_costs: flows([("capacity", 2.0), ("electricity", 0.0)]),
        expansion_limits: flows([
            ("capacity", MinMax::unbounded()),
            ("electricity", MinMax::unbounded()),
        ]),
        status_inertia: OnOff::new(0.0, 2.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 42.0),
        ..Storage::new("Pumped Storage", "electricity", "electricity", 400.0, 50.0)
    };

    let gas_supply_line = Bus {
        meta: here("Power", "gas", "bus"),
        ..Bus::new("Gaspipeline", ["Gas Station.fuel"], ["GuD.fuel"])
    };

    let biogas_supply_line = Bus {
        meta: here("Coupled", "gas", "bus"),
        ..Bus::new("Biogas", ["Biogas plant.fuel"], ["BHKW.fuel"])
    };

    let low_electricity_line = Bus {
        meta: here("Power", "electricity", "bus"),
        ..Bus::new(
            "Low Voltage Powerline",
            [
                "BHKW.electricity",
                "Battery.electricity",
                "Solar Panel.electricity",
            ],
            [
                "Household Demand.electricity",
                "Commercial Demand.electricity",
                "Battery.electricity",
            ],
        )
    };

    let heat_line = Bus {
        meta: here("Heat", "hot Water", "bus"),
        ..Bus::new(
            "District Heating",
            [
                "BHKW.heat",
                "Solar Thermal.heat",
                "Heat Storage.heat",
                "Power to Heat.heat",
                "HKW.heat",
            ],
            ["District Heating Demand.heat", "Heat Storage.heat"],
        )
    };

    let onshore_wind_power = Source {
        meta: here("Power", "Electricity", "Renewable"),
        accumulated_amounts: flows([("electricity", MinMax::new(0.0, 2000.0))]),
        flow_rates: flows([("electricity", MinMax::new(0.0, 100.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::new(100.0, 100.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[60.0, 80.0, 34.0]),
        )])),
        expansion_costs: flows([("electricity", 8.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Onshore Wind Power", ["electricity"])
    };

    let solar_thermal = Source {
        meta: here("Heat", "Hot Water", "Renewable"),
        accumulated_amounts: flows([("heat", MinMax::new(0.0, 1000.0))]),
        flow_rates: flows([("heat", MinMax::new(0.0, 50.0))]),
        flow_costs: flows([("heat", 0.0)]),
        flow_emissions: flows([("heat", 0.0)]),
        flow_gradients: flows([("heat", PositiveNegative::new(42.0, 42.0))]),
        gradient_costs: flows([("heat", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "heat",
            SeriesBounds::fixed(&[24.0, 44.0, 14.0]),
        )])),
        expansion_costs: flows([("heat", 4.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Solar Thermal", ["heat"])
    };

    let industrial_demand = Sink {
        meta: here("Power", "electricity", "demand"),
        flow_rates: flows([("electricity", MinMax::new(0.0, 400.0))]),
        flow_gradients: flows([("electricity", PositiveNegative::new(400.0, 400.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[160.0, 160.0, 120.0]),
        )])),
        status_inertia: OnOff::new(2.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        ..Sink::new("Industrial Demand", ["electricity"])
    };

    let car_charging_station_demand = Sink {
        meta: here("Power", "electricity", "demand"),
        flow_rates: flows([("electricity", MinMax::new(0.0, 1000.0))]),
        flow_gradients: flows([("electricity", PositiveNegative::new(1000.0, 1000.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[0.0, 0.0, 100.0]),
        )])),
        status_inertia: OnOff::new(2.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 8.0),
        ..Sink::new("Car charging Station", ["electricity"])
    };

    let power_to_heat = Transformer {
        meta: here("coupled", "Hot Water", "transformer"),
        flow_rates: flows([
            ("electricity", MinMax::new(0.0, 100.0)),
            ("heat", MinMax::new(0.0, 100.0)),
        ]),
        flow_costs: flows([("electricity", 0.0), ("heat", 1.0)]),
        flow_emissions: flows([("electricity", 0.0), ("heat", 1.0)]),
        flow_gradients: flows([
            ("electricity", PositiveNegative::new(100.0, 100.0)),
            ("heat", PositiveNegative::new(100.0, 100.0)),
        ]),
        gradient_costs: flows([
            ("electricity", PositiveNegative::new(0.0, 0.0)),
            ("heat", PositiveNegative::new(0.0, 0.0)),
        ]),
        status_inertia: OnOff::new(0.0, 0.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 9.0),
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
            sector: "power".to_string(),
            node_type: "connector".to_string(),
            ..NodeMeta::default()
        },
        ..Connector::new(
            "Low Voltage Transformator",
            ("Medium Voltage Powerline", "Low Voltage Powerline"),
        )
    };

    let offshore_wind_power = Source {
        meta: here("Power", "Electricity", "Renewable"),
        accumulated_amounts: flows([("electricity", MinMax::new(0.0, 4000.0))]),
        flow_rates: flows([("electricity", MinMax::new(0.0, 200.0))]),
        flow_costs: flows([("electricity", 0.0)]),
        flow_emissions: flows([("electricity", 0.0)]),
        flow_gradients: flows([("electricity", PositiveNegative::new(200.0, 200.0))]),
        gradient_costs: flows([("electricity", PositiveNegative::new(0.0, 0.0))]),
        timeseries: Some(flows([(
            "electricity",
            SeriesBounds::fixed(&[120.0, 140.0, 70.0]),
        )])),
        expansion_costs: flows([("electricity", 9.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Offshore Wind Power", ["electricity"])
    };

    let coal_supply = Source {
        meta: here("Coupled", "Coal", "source"),
        flow_rates: flows([("fuel", MinMax::new(0.0, 500.0))]),
        flow_costs: flows([("fuel", 8.0)]),
        flow_emissions: flows([("fuel", 5.0)]),
        flow_gradients: flows([("fuel", PositiveNegative::new(500.0, 500.0))]),
        gradient_costs: flows([("fuel", PositiveNegative::new(0.0, 0.0))]),
        expansion_costs: flows([("fuel", 5.0)]),
        status_inertia: OnOff::new(1.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 10.0),
        ..Source::new("Coal Supply", ["fuel"])
    };

    let hkw_generator = Transformer {
        meta: here("Coupled", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 500.0)),
            ("electricity", MinMax::new(0.0, 500.0)),
            ("heat", MinMax::new(0.0, 500.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 5.0), ("heat", 5.0)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 5.0), ("heat", 5.0)]),
        flow_gradients: flows([
            ("fuel", PositiveNegative::new(500.0, 500.0)),
            ("electricity", PositiveNegative::new(500.0, 500.0)),
            ("heat", PositiveNegative::new(500.0, 500.0)),
        ]),
        gradient_costs: flows([
            ("fuel", PositiveNegative::new(0.0, 0.0)),
            ("electricity", PositiveNegative::new(0.0, 0.0)),
            ("heat", PositiveNegative::new(0.0, 0.0)),
        ]),
        status_inertia: OnOff::new(0.0, 1.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 9.0),
        ..Transformer::new(
            "HKW",
            ["fuel"],
            ["electricity", "heat"],
            conversions([(("fuel", "electricity"), 0.35), (("fuel", "heat"), 0.53)]),
        )
    };

    let gud_generator = Transformer {
        meta: here("Power", "electricity", "transformer"),
        flow_rates: flows([
            ("fuel", MinMax::new(0.0, 500.0)),
            ("electricity", MinMax::new(0.0, 500.0)),
        ]),
        flow_costs: flows([("fuel", 0.0), ("electricity", 5.0)]),
        flow_emissions: flows([("fuel", 0.0), ("electricity", 5.0)]),
        flow_gradients: flows([
            ("fuel", PositiveNegative::new(500.0, 500.0)),
            ("electricity", PositiveNegative::new(500.0, 500.0)),
        ]),
        gradient_costs: flows([
            ("fuel", PositiveNegative::new(0.0, 0.0)),
            ("electricity", PositiveNegative::new(0.0, 0.0)),
        ]),
        status_inertia: OnOff::new(0.0, 2.0),
        number_of_status_changes: OnOff::new(f64::INFINITY, 9.0),
        ..Transformer::new(
            "GuD",
            ["fuel"],
            ["electricity"],
            conversions([(("fuel", "electricity"), 0.6)]),
        )
    };

    let coal_supply_line = Bus {
        meta: here("Coupled", "Coal", "bus"),
        ..Bus::new("Coal Supply Line", ["Coal Supply.fuel"], ["HKW.fuel"])
    };

    let high_electricity_line = Bus {
        meta: here("Power", "electricity", "bus"),
        ..Bus::new(
            "High Voltage Powerline",
            [
                "Offshore Wind Power.electricity",
                "Pumped Storage.electricity",
                "GuD.electricity",
                "HKW.electricity",
            ],
            ["Pumped Storage.electricity"],
        )
    };

    let high_medium_transformator = Connector {
        meta: NodeMeta {
            sector: "coupled".to_string(),
            node_type: "connector".to_string(),
            ..NodeMeta::default()
        },
        ..Connector::new(
            "High Voltage Transformator",
            ("Medium Voltage Powerline", "High Voltage Powerline"),
        )
    };

    EnergySystem {
        busses: vec![
            gas_supply_line,
            low_electricity_line,
            heat_line,
            medium_electricity_line,
            high_electricity_line,
            coal_supply_line,
            biogas_supply_line,
        ],
        sinks: vec![
            household_demand,
            commercial_demand,
            heat_demand,
            industrial_demand,
            car_charging_station_demand,
        ],
        sources: vec![
            solar_panel,
            gas_supply,
            onshore_wind_power,
            offshore_wind_power,
            coal_supply,
            solar_thermal,
            biogas_supply,
        ],
        transformers: vec![bhkw_generator, power_to_heat, gud_generator, hkw_generator],
        storages: vec![battery_storage, heat_storage, pumped_storage],
        connectors: vec![low_medium_transformator, high_medium_transformator],
        ..EnergySystem::new("my_energy_system", timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_validates() {
        let es = create_grid_es();
        assert_eq!(es.uid, "my_energy_system");
        assert!(es.validate().is_empty());
    }

    #[test]
    fn covers_every_component_kind() {
        let es = create_grid_es();
        assert_eq!(es.busses.len(), 7);
        assert_eq!(es.sinks.len(), 5);
        assert_eq!(es.sources.len(), 7);
        assert_eq!(es.transformers.len(), 4);
        assert_eq!(es.storages.len(), 3);
        assert_eq!(es.connectors.len(), 2);
    }

    #[test]
    fn battery_loses_charge_when_idle() {
        let es = create_grid_es();
        let battery = es.storages.iter().find(|s| s.name == "Battery").unwrap();
        assert_eq!(battery.idle_changes.negative, 1.0);
        assert_eq!(battery.idle_changes.positive, 0.0);
    }
}
