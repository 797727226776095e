//! Energy-system component data structs.
//!
//! Components are plain data: every parameter a builder can set is a public
//! field with a neutral default, so example constructions read as struct
//! updates over [`Default`] (or over the minimal `new` constructors). Flow
//! parameters are maps keyed by carrier name; absent entries mean
//! "unconstrained" (rates, limits) or "zero" (costs, emissions).

use std::collections::HashMap;

use super::ratings::{Efficiency, InOut, MinMax, OnOff, PositiveNegative, SeriesBounds};

/// Per-carrier parameter map.
pub type FlowMap<T> = HashMap<String, T>;

/// Conversion factors keyed by `(input_carrier, output_carrier)`.
pub type ConversionMap = HashMap<(String, String), Efficiency>;

/// Builds a [`FlowMap`] from `(carrier, value)` pairs.
pub fn flows<V, const N: usize>(entries: [(&str, V); N]) -> FlowMap<V> {
    entries
        .into_iter()
        .map(|(carrier, value)| (carrier.to_string(), value))
        .collect()
}

/// Builds a [`ConversionMap`] from `((input, output), factor)` pairs.
///
/// Factors can be scalars or per-timestep series (anything convertible
/// into [`Efficiency`]).
pub fn conversions<E, const N: usize>(entries: [((&str, &str), E); N]) -> ConversionMap
where
    E: Into<Efficiency>,
{
    entries
        .into_iter()
        .map(|((input, output), factor)| ((input.to_string(), output.to_string()), factor.into()))
        .collect()
}

/// Builds the bidirectional factor map of a [`Connector`].
pub fn couplings<const N: usize>(entries: [((&str, &str), f64); N]) -> HashMap<(String, String), f64> {
    entries
        .into_iter()
        .map(|((from, to), factor)| ((from.to_string(), to.to_string()), factor))
        .collect()
}

/// Builds an owned name list from string literals.
pub fn names<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

/// Descriptive node attributes shared by every component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMeta {
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub sector: String,
    pub carrier: String,
    pub node_type: String,
    pub component: String,
}

impl NodeMeta {
    /// Convenience for builders that only tag region/sector/carrier/type.
    pub fn tagged(region: &str, sector: &str, carrier: &str, node_type: &str) -> Self {
        Self {
            region: region.to_string(),
            sector: sector.to_string(),
            carrier: carrier.to_string(),
            node_type: node_type.to_string(),
            ..Self::default()
        }
    }
}

/// A node producing one or more carriers.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub name: String,
    pub outputs: Vec<String>,
    pub meta: NodeMeta,
    pub accumulated_amounts: FlowMap<MinMax>,
    pub flow_rates: FlowMap<MinMax>,
    pub flow_costs: FlowMap<f64>,
    pub flow_emissions: FlowMap<f64>,
    pub flow_gradients: FlowMap<PositiveNegative>,
    pub gradient_costs: FlowMap<PositiveNegative>,
    /// Explicit per-timestep bounds overriding `flow_rates`.
    pub timeseries: Option<FlowMap<SeriesBounds>>,
    pub expandable: FlowMap<bool>,
    pub expansion_costs: FlowMap<f64>,
    pub expansion_limits: FlowMap<MinMax>,
    pub milp: FlowMap<bool>,
    pub initial_status: bool,
    pub status_inertia: OnOff,
    pub status_changing_costs: OnOff,
    pub number_of_status_changes: OnOff,
    pub costs_for_being_active: f64,
}

impl Source {
    pub fn new<const N: usize>(name: &str, outputs: [&str; N]) -> Self {
        Self {
            name: name.to_string(),
            outputs: names(outputs),
            ..Self::default()
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self {
            name: String::new(),
            outputs: Vec::new(),
            meta: NodeMeta::default(),
            accumulated_amounts: FlowMap::new(),
            flow_rates: FlowMap::new(),
            flow_costs: FlowMap::new(),
            flow_emissions: FlowMap::new(),
            flow_gradients: FlowMap::new(),
            gradient_costs: FlowMap::new(),
            timeseries: None,
            expandable: FlowMap::new(),
            expansion_costs: FlowMap::new(),
            expansion_limits: FlowMap::new(),
            milp: FlowMap::new(),
            initial_status: true,
            status_inertia: OnOff::default(),
            status_changing_costs: OnOff::default(),
            number_of_status_changes: OnOff::new(f64::INFINITY, f64::INFINITY),
            costs_for_being_active: 0.0,
        }
    }
}

/// A node consuming one or more carriers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sink {
    pub name: String,
    pub inputs: Vec<String>,
    pub meta: NodeMeta,
    pub accumulated_amounts: FlowMap<MinMax>,
    pub flow_rates: FlowMap<MinMax>,
    pub flow_costs: FlowMap<f64>,
    pub flow_emissions: FlowMap<f64>,
    pub flow_gradients: FlowMap<PositiveNegative>,
    pub gradient_costs: FlowMap<PositiveNegative>,
    pub timeseries: Option<FlowMap<SeriesBounds>>,
    pub expandable: FlowMap<bool>,
    pub expansion_costs: FlowMap<f64>,
    pub expansion_limits: FlowMap<MinMax>,
    pub milp: FlowMap<bool>,
    pub initial_status: bool,
    pub status_inertia: OnOff,
    pub status_changing_costs: OnOff,
    pub number_of_status_changes: OnOff,
    pub costs_for_being_active: f64,
}

impl Sink {
    pub fn new<const N: usize>(name: &str, inputs: [&str; N]) -> Self {
        Self {
            name: name.to_string(),
            inputs: names(inputs),
            ..Self::default()
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self {
            name: String::new(),
            inputs: Vec::new(),
            meta: NodeMeta::default(),
            accumulated_amounts: FlowMap::new(),
            flow_rates: FlowMap::new(),
            flow_costs: FlowMap::new(),
            flow_emissions: FlowMap::new(),
            flow_gradients: FlowMap::new(),
            gradient_costs: FlowMap::new(),
            timeseries: None,
            expandable: FlowMap::new(),
            expansion_costs: FlowMap::new(),
            expansion_limits: FlowMap::new(),
            milp: FlowMap::new(),
            initial_status: true,
            status_inertia: OnOff::default(),
            status_changing_costs: OnOff::default(),
            number_of_status_changes: OnOff::new(f64::INFINITY, f64::INFINITY),
            costs_for_being_active: 0.0,
        }
    }
}

/// A node converting input carriers into output carriers at fixed (or
/// per-timestep) conversion factors.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformer {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub conversions: ConversionMap,
    pub meta: NodeMeta,
    pub flow_rates: FlowMap<MinMax>,
    pub flow_costs: FlowMap<f64>,
    pub flow_emissions: FlowMap<f64>,
    pub flow_gradients: FlowMap<PositiveNegative>,
    pub gradient_costs: FlowMap<PositiveNegative>,
    pub timeseries: Option<FlowMap<SeriesBounds>>,
    pub expandable: FlowMap<bool>,
    pub expansion_costs: FlowMap<f64>,
    pub expansion_limits: FlowMap<MinMax>,
    pub milp: FlowMap<bool>,
    pub initial_status: bool,
    pub status_inertia: OnOff,
    pub status_changing_costs: OnOff,
    pub number_of_status_changes: OnOff,
    pub costs_for_being_active: f64,
}

impl Transformer {
    pub fn new<const I: usize, const O: usize>(
        name: &str,
        inputs: [&str; I],
        outputs: [&str; O],
        conversions: ConversionMap,
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs: names(inputs),
            outputs: names(outputs),
            conversions,
            ..Self::default()
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            name: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            conversions: ConversionMap::new(),
            meta: NodeMeta::default(),
            flow_rates: FlowMap::new(),
            flow_costs: FlowMap::new(),
            flow_emissions: FlowMap::new(),
            flow_gradients: FlowMap::new(),
            gradient_costs: FlowMap::new(),
            timeseries: None,
            expandable: FlowMap::new(),
            expansion_costs: FlowMap::new(),
            expansion_limits: FlowMap::new(),
            milp: FlowMap::new(),
            initial_status: true,
            status_inertia: OnOff::default(),
            status_changing_costs: OnOff::default(),
            number_of_status_changes: OnOff::new(f64::INFINITY, f64::INFINITY),
            costs_for_being_active: 0.0,
        }
    }
}

/// Combined-heat-and-power transformer with extraction-condensing extras.
///
/// All extra fields are optional; a `Chp` with none of them set behaves
/// like a two-output [`Transformer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chp {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub conversions: ConversionMap,
    /// Electrical conversion factor when no district heat is extracted.
    pub conversion_factor_full_condensation: HashMap<(String, String), f64>,
    pub enthalpy_loss: Option<SeriesBounds>,
    pub power_wo_dist_heat: Option<SeriesBounds>,
    pub el_efficiency_wo_dist_heat: Option<SeriesBounds>,
    pub min_condenser_load: Option<Vec<f64>>,
    pub power_loss_index: Option<Vec<f64>>,
    pub back_pressure: Option<bool>,
    pub meta: NodeMeta,
    pub flow_rates: FlowMap<MinMax>,
    pub flow_costs: FlowMap<f64>,
    pub flow_emissions: FlowMap<f64>,
    pub flow_gradients: FlowMap<PositiveNegative>,
    pub gradient_costs: FlowMap<PositiveNegative>,
    pub timeseries: Option<FlowMap<SeriesBounds>>,
    pub expandable: FlowMap<bool>,
    pub expansion_costs: FlowMap<f64>,
    pub expansion_limits: FlowMap<MinMax>,
    pub milp: FlowMap<bool>,
    pub initial_status: bool,
    pub status_inertia: OnOff,
    pub status_changing_costs: OnOff,
    pub number_of_status_changes: OnOff,
    pub costs_for_being_active: f64,
}

impl Chp {
    pub fn new<const I: usize, const O: usize>(
        name: &str,
        inputs: [&str; I],
        outputs: [&str; O],
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs: names(inputs),
            outputs: names(outputs),
            ..Self::default()
        }
    }
}

impl Default for Chp {
    fn default() -> Self {
        Self {
            name: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            conversions: ConversionMap::new(),
            conversion_factor_full_condensation: HashMap::new(),
            enthalpy_loss: None,
            power_wo_dist_heat: None,
            el_efficiency_wo_dist_heat: None,
            min_condenser_load: None,
            power_loss_index: None,
            back_pressure: None,
            meta: NodeMeta::default(),
            flow_rates: FlowMap::new(),
            flow_costs: FlowMap::new(),
            flow_emissions: FlowMap::new(),
            flow_gradients: FlowMap::new(),
            gradient_costs: FlowMap::new(),
            timeseries: None,
            expandable: FlowMap::new(),
            expansion_costs: FlowMap::new(),
            expansion_limits: FlowMap::new(),
            milp: FlowMap::new(),
            initial_status: true,
            status_inertia: OnOff::default(),
            status_changing_costs: OnOff::default(),
            number_of_status_changes: OnOff::new(f64::INFINITY, f64::INFINITY),
            costs_for_being_active: 0.0,
        }
    }
}

/// An energy store with a single charge/discharge carrier.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    pub name: String,
    pub input: String,
    pub output: String,
    /// Total energy capacity.
    pub capacity: f64,
    /// Initial state of charge, in capacity units.
    pub initial_soc: f64,
    pub meta: NodeMeta,
    /// Idle gains (`positive`) and losses (`negative`) per timestep.
    pub idle_changes: PositiveNegative,
    pub flow_rates: FlowMap<MinMax>,
    pub flow_efficiencies: FlowMap<InOut>,
    pub flow_costs: FlowMap<f64>,
    pub flow_emissions: FlowMap<f64>,
    pub flow_gradients: FlowMap<PositiveNegative>,
    pub gradient_costs: FlowMap<PositiveNegative>,
    pub timeseries: Option<FlowMap<SeriesBounds>>,
    pub expandable: FlowMap<bool>,
    /// Ties flow-rate expansion to capacity expansion when set.
    pub fixed_expansion_ratios: FlowMap<bool>,
    pub expansion_costs: FlowMap<f64>,
    pub expansion_limits: FlowMap<MinMax>,
    pub milp: FlowMap<bool>,
    pub initial_status: bool,
    pub status_inertia: OnOff,
    pub status_changing_costs: OnOff,
    pub number_of_status_changes: OnOff,
    pub costs_for_being_active: f64,
}

impl Storage {
    pub fn new(name: &str, input: &str, output: &str, capacity: f64, initial_soc: f64) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            output: output.to_string(),
            capacity,
            initial_soc,
            ..Self::default()
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            name: String::new(),
            input: String::new(),
            output: String::new(),
            capacity: 0.0,
            initial_soc: 0.0,
            meta: NodeMeta::default(),
            idle_changes: PositiveNegative::new(0.0, 0.0),
            flow_rates: FlowMap::new(),
            flow_efficiencies: FlowMap::new(),
            flow_costs: FlowMap::new(),
            flow_emissions: FlowMap::new(),
            flow_gradients: FlowMap::new(),
            gradient_costs: FlowMap::new(),
            timeseries: None,
            expandable: FlowMap::new(),
            fixed_expansion_ratios: FlowMap::new(),
            expansion_costs: FlowMap::new(),
            expansion_limits: FlowMap::new(),
            milp: FlowMap::new(),
            initial_status: true,
            status_inertia: OnOff::default(),
            status_changing_costs: OnOff::default(),
            number_of_status_changes: OnOff::new(f64::INFINITY, f64::INFINITY),
            costs_for_being_active: 0.0,
        }
    }
}

/// A carrier-specific junction routing flows between nodes.
///
/// Endpoints are `"Node.carrier"` strings: `inputs` name the flows feeding
/// the bus, `outputs` the flows it serves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bus {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub meta: NodeMeta,
}

impl Bus {
    pub fn new<const I: usize, const O: usize>(
        name: &str,
        inputs: [&str; I],
        outputs: [&str; O],
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs: names(inputs),
            outputs: names(outputs),
            meta: NodeMeta::default(),
        }
    }
}

/// A bidirectional coupling between two busses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connector {
    pub name: String,
    /// The pair of bus names being coupled.
    pub interfaces: (String, String),
    /// Transfer factor per direction; defaults to 1.0 both ways.
    pub conversions: HashMap<(String, String), f64>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub meta: NodeMeta,
}

impl Connector {
    pub fn new(name: &str, interfaces: (&str, &str)) -> Self {
        let (a, b) = interfaces;
        Self {
            name: name.to_string(),
            interfaces: (a.to_string(), b.to_string()),
            conversions: couplings([((a, b), 1.0), ((b, a), 1.0)]),
            inputs: names([a, b]),
            outputs: names([a, b]),
            meta: NodeMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_update_over_new_keeps_name_and_outputs() {
        let source = Source {
            flow_costs: flows([("electricity", 10.0)]),
            ..Source::new("Gas Station", ["electricity"])
        };
        assert_eq!(source.name, "Gas Station");
        assert_eq!(source.outputs, vec!["electricity".to_string()]);
        assert_eq!(source.flow_costs["electricity"], 10.0);
        assert!(source.initial_status);
    }

    #[test]
    fn default_status_changes_are_unlimited() {
        let sink = Sink::new("Demand", ["electricity"]);
        assert!(sink.number_of_status_changes.on.is_infinite());
        assert!(sink.number_of_status_changes.off.is_infinite());
    }

    #[test]
    fn connector_defaults_to_unit_factors_both_ways() {
        let connector = Connector::new("link", ("bus a", "bus b"));
        let ab = ("bus a".to_string(), "bus b".to_string());
        let ba = ("bus b".to_string(), "bus a".to_string());
        assert_eq!(connector.conversions[&ab], 1.0);
        assert_eq!(connector.conversions[&ba], 1.0);
    }

    #[test]
    fn conversions_accepts_scalars_and_series() {
        let map = conversions([(("fuel", "electricity"), 0.42)]);
        let key = ("fuel".to_string(), "electricity".to_string());
        assert_eq!(map[&key], Efficiency::Scalar(0.42));

        let varying = conversions([(("fuel", "electricity"), vec![0.6, 0.8, 0.4])]);
        assert_eq!(varying[&key], Efficiency::Series(vec![0.6, 0.8, 0.4]));
    }

    #[test]
    fn storage_new_sets_capacity_and_soc() {
        let storage = Storage::new("Battery", "electricity", "electricity", 10.0, 10.0);
        assert_eq!(storage.capacity, 10.0);
        assert_eq!(storage.initial_soc, 10.0);
        assert_eq!(storage.idle_changes, PositiveNegative::new(0.0, 0.0));
    }
}
