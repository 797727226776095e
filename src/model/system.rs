//! Energy-system container and structural validation.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::components::{Bus, Chp, Connector, Sink, Source, Storage, Transformer};
use super::ratings::{Efficiency, MinMax, SeriesBounds};
use super::timeframe::Timeframe;

/// System-wide optimization limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConstraints {
    pub name: String,
    pub emissions: f64,
    pub resources: f64,
}

impl Default for GlobalConstraints {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            emissions: f64::INFINITY,
            resources: f64::INFINITY,
        }
    }
}

/// Structural model error with field path and constraint description.
#[derive(Debug, Clone)]
pub struct ModelError {
    /// Dotted field path (e.g., `"busses.Powerline.inputs[0]"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ModelError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ModelError {}

/// A complete example energy-system graph.
///
/// Holds typed component collections plus the timeframe and global
/// constraints they were parameterized for. The container never computes
/// anything; [`EnergySystem::validate`] only checks that the graph is
/// referentially consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySystem {
    pub uid: String,
    pub busses: Vec<Bus>,
    pub sinks: Vec<Sink>,
    pub sources: Vec<Source>,
    pub transformers: Vec<Transformer>,
    pub chps: Vec<Chp>,
    pub storages: Vec<Storage>,
    pub connectors: Vec<Connector>,
    pub timeframe: Timeframe,
    pub global_constraints: GlobalConstraints,
}

impl EnergySystem {
    /// Empty system with the given uid and timeframe; builders fill the
    /// component collections via struct update.
    pub fn new(uid: &str, timeframe: Timeframe) -> Self {
        Self {
            uid: uid.to_string(),
            busses: Vec::new(),
            sinks: Vec::new(),
            sources: Vec::new(),
            transformers: Vec::new(),
            chps: Vec::new(),
            storages: Vec::new(),
            connectors: Vec::new(),
            timeframe,
            global_constraints: GlobalConstraints::default(),
        }
    }

    /// Iterator over every node name, grouped by component kind.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.busses
            .iter()
            .map(|b| b.name.as_str())
            .chain(self.sources.iter().map(|s| s.name.as_str()))
            .chain(self.sinks.iter().map(|s| s.name.as_str()))
            .chain(self.transformers.iter().map(|t| t.name.as_str()))
            .chain(self.chps.iter().map(|c| c.name.as_str()))
            .chain(self.storages.iter().map(|s| s.name.as_str()))
            .chain(self.connectors.iter().map(|c| c.name.as_str()))
    }

    /// Total node count across all component kinds.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Checks referential consistency and returns every violation found.
    ///
    /// Verified: node names are unique; bus endpoints reference an existing
    /// node and one of its carriers; connector interfaces reference existing
    /// busses; profile and series-efficiency lengths match the timeframe;
    /// finite bounds are ordered; storage state of charge fits the capacity.
    pub fn validate(&self) -> Vec<ModelError> {
        let mut errors = Vec::new();

        self.check_unique_names(&mut errors);
        self.check_bus_endpoints(&mut errors);
        self.check_connectors(&mut errors);
        self.check_series_lengths(&mut errors);
        self.check_bounds(&mut errors);

        for storage in &self.storages {
            if storage.initial_soc > storage.capacity {
                errors.push(ModelError::new(
                    format!("storages.{}.initial_soc", storage.name),
                    format!(
                        "must be <= capacity ({} > {})",
                        storage.initial_soc, storage.capacity
                    ),
                ));
            }
        }

        errors
    }

    fn check_unique_names(&self, errors: &mut Vec<ModelError>) {
        let mut seen = HashSet::new();
        for name in self.nodes() {
            if !seen.insert(name) {
                errors.push(ModelError::new(
                    format!("nodes.{name}"),
                    "node name is not unique",
                ));
            }
        }
    }

    /// Map of node name to the carriers it can exchange with a bus.
    fn carrier_table(&self) -> HashMap<&str, HashSet<&str>> {
        let mut table: HashMap<&str, HashSet<&str>> = HashMap::new();
        for source in &self.sources {
            table
                .entry(source.name.as_str())
                .or_default()
                .extend(source.outputs.iter().map(String::as_str));
        }
        for sink in &self.sinks {
            table
                .entry(sink.name.as_str())
                .or_default()
                .extend(sink.inputs.iter().map(String::as_str));
        }
        for transformer in &self.transformers {
            let entry = table.entry(transformer.name.as_str()).or_default();
            entry.extend(transformer.inputs.iter().map(String::as_str));
            entry.extend(transformer.outputs.iter().map(String::as_str));
        }
        for chp in &self.chps {
            let entry = table.entry(chp.name.as_str()).or_default();
            entry.extend(chp.inputs.iter().map(String::as_str));
            entry.extend(chp.outputs.iter().map(String::as_str));
        }
        for storage in &self.storages {
            let entry = table.entry(storage.name.as_str()).or_default();
            entry.insert(storage.input.as_str());
            entry.insert(storage.output.as_str());
        }
        table
    }

    fn check_bus_endpoints(&self, errors: &mut Vec<ModelError>) {
        let table = self.carrier_table();
        for bus in &self.busses {
            for (direction, endpoints) in [("inputs", &bus.inputs), ("outputs", &bus.outputs)] {
                for (i, endpoint) in endpoints.iter().enumerate() {
                    let field = format!("busses.{}.{direction}[{i}]", bus.name);
                    let Some((node, carrier)) = endpoint.rsplit_once('.') else {
                        errors.push(ModelError::new(
                            field,
                            format!("endpoint \"{endpoint}\" is not of the form \"Node.carrier\""),
                        ));
                        continue;
                    };
                    match table.get(node) {
                        None => errors.push(ModelError::new(
                            field,
                            format!("references unknown node \"{node}\""),
                        )),
                        Some(carriers) if !carriers.contains(carrier) => {
                            errors.push(ModelError::new(
                                field,
                                format!("node \"{node}\" has no carrier \"{carrier}\""),
                            ));
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }

    fn check_connectors(&self, errors: &mut Vec<ModelError>) {
        let bus_names: HashSet<&str> = self.busses.iter().map(|b| b.name.as_str()).collect();
        for connector in &self.connectors {
            for interface in [&connector.interfaces.0, &connector.interfaces.1] {
                if !bus_names.contains(interface.as_str()) {
                    errors.push(ModelError::new(
                        format!("connectors.{}.interfaces", connector.name),
                        format!("references unknown bus \"{interface}\""),
                    ));
                }
            }
        }
    }

    fn check_series_lengths(&self, errors: &mut Vec<ModelError>) {
        let periods = self.timeframe.len();

        let mut check_timeseries = |kind: &str,
                                    name: &str,
                                    timeseries: &Option<HashMap<String, SeriesBounds>>,
                                    errors: &mut Vec<ModelError>| {
            let Some(map) = timeseries else { return };
            for (carrier, bounds) in map {
                if bounds.min.len() != periods || bounds.max.len() != periods {
                    errors.push(ModelError::new(
                        format!("{kind}.{name}.timeseries.{carrier}"),
                        format!(
                            "profile length {} does not match timeframe length {periods}",
                            bounds.len()
                        ),
                    ));
                }
            }
        };

        for source in &self.sources {
            check_timeseries("sources", &source.name, &source.timeseries, errors);
        }
        for sink in &self.sinks {
            check_timeseries("sinks", &sink.name, &sink.timeseries, errors);
        }
        for storage in &self.storages {
            check_timeseries("storages", &storage.name, &storage.timeseries, errors);
        }
        for transformer in &self.transformers {
            check_timeseries("transformers", &transformer.name, &transformer.timeseries, errors);
            for ((input, output), factor) in &transformer.conversions {
                if let Efficiency::Series(values) = factor {
                    if values.len() != periods {
                        errors.push(ModelError::new(
                            format!("transformers.{}.conversions.{input}.{output}", transformer.name),
                            format!(
                                "series length {} does not match timeframe length {periods}",
                                values.len()
                            ),
                        ));
                    }
                }
            }
        }
        for chp in &self.chps {
            check_timeseries("chps", &chp.name, &chp.timeseries, errors);
            for (field, series) in [
                ("min_condenser_load", &chp.min_condenser_load),
                ("power_loss_index", &chp.power_loss_index),
            ] {
                if let Some(values) = series {
                    if values.len() != periods {
                        errors.push(ModelError::new(
                            format!("chps.{}.{field}", chp.name),
                            format!(
                                "series length {} does not match timeframe length {periods}",
                                values.len()
                            ),
                        ));
                    }
                }
            }
            for (field, bounds) in [
                ("enthalpy_loss", &chp.enthalpy_loss),
                ("power_wo_dist_heat", &chp.power_wo_dist_heat),
                ("el_efficiency_wo_dist_heat", &chp.el_efficiency_wo_dist_heat),
            ] {
                if let Some(sb) = bounds {
                    if sb.min.len() != periods || sb.max.len() != periods {
                        errors.push(ModelError::new(
                            format!("chps.{}.{field}", chp.name),
                            format!(
                                "series length {} does not match timeframe length {periods}",
                                sb.len()
                            ),
                        ));
                    }
                }
            }
        }
    }

    fn check_bounds(&self, errors: &mut Vec<ModelError>) {
        let mut check_map = |kind: &str,
                             name: &str,
                             field: &str,
                             map: &HashMap<String, MinMax>,
                             errors: &mut Vec<ModelError>| {
            for (carrier, mm) in map {
                if mm.min > mm.max {
                    errors.push(ModelError::new(
                        format!("{kind}.{name}.{field}.{carrier}"),
                        format!("min {} exceeds max {}", mm.min, mm.max),
                    ));
                }
            }
        };

        for source in &self.sources {
            check_map("sources", &source.name, "flow_rates", &source.flow_rates, errors);
            check_map(
                "sources",
                &source.name,
                "accumulated_amounts",
                &source.accumulated_amounts,
                errors,
            );
            check_map(
                "sources",
                &source.name,
                "expansion_limits",
                &source.expansion_limits,
                errors,
            );
        }
        for sink in &self.sinks {
            check_map("sinks", &sink.name, "flow_rates", &sink.flow_rates, errors);
            check_map(
                "sinks",
                &sink.name,
                "accumulated_amounts",
                &sink.accumulated_amounts,
                errors,
            );
            check_map("sinks", &sink.name, "expansion_limits", &sink.expansion_limits, errors);
        }
        for transformer in &self.transformers {
            check_map(
                "transformers",
                &transformer.name,
                "flow_rates",
                &transformer.flow_rates,
                errors,
            );
            check_map(
                "transformers",
                &transformer.name,
                "expansion_limits",
                &transformer.expansion_limits,
                errors,
            );
        }
        for chp in &self.chps {
            check_map("chps", &chp.name, "flow_rates", &chp.flow_rates, errors);
            check_map("chps", &chp.name, "expansion_limits", &chp.expansion_limits, errors);
        }
        for storage in &self.storages {
            check_map("storages", &storage.name, "flow_rates", &storage.flow_rates, errors);
            check_map(
                "storages",
                &storage.name,
                "expansion_limits",
                &storage.expansion_limits,
                errors,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::components::flows;
    use crate::model::ratings::MinMax;

    fn minimal_system() -> EnergySystem {
        let demand = Sink {
            flow_rates: flows([("electricity", MinMax::fixed(10.0))]),
            ..Sink::new("Demand", ["electricity"])
        };
        let supply = Source::new("Supply", ["electricity"]);
        let powerline = Bus::new("Powerline", ["Supply.electricity"], ["Demand.electricity"]);
        EnergySystem {
            busses: vec![powerline],
            sinks: vec![demand],
            sources: vec![supply],
            ..EnergySystem::new("minimal", Timeframe::hourly(1990, 7, 13, 4))
        }
    }

    #[test]
    fn minimal_system_validates() {
        let es = minimal_system();
        let errors = es.validate();
        assert!(errors.is_empty(), "expected clean validation: {errors:?}");
    }

    #[test]
    fn nodes_lists_every_component() {
        let es = minimal_system();
        let nodes: Vec<_> = es.nodes().collect();
        assert_eq!(nodes, vec!["Powerline", "Supply", "Demand"]);
        assert_eq!(es.node_count(), 3);
    }

    #[test]
    fn duplicate_names_are_reported() {
        let mut es = minimal_system();
        es.sources.push(Source::new("Demand", ["electricity"]));
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.field == "nodes.Demand"));
    }

    #[test]
    fn unknown_bus_endpoint_is_reported() {
        let mut es = minimal_system();
        es.busses[0].inputs.push("Ghost.electricity".to_string());
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.message.contains("unknown node \"Ghost\"")));
    }

    #[test]
    fn wrong_carrier_is_reported() {
        let mut es = minimal_system();
        es.busses[0].inputs.push("Supply.heat".to_string());
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.message.contains("no carrier \"heat\"")));
    }

    #[test]
    fn connector_must_reference_busses() {
        let mut es = minimal_system();
        es.connectors.push(Connector::new("link", ("Powerline", "Ghost Bus")));
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.field == "connectors.link.interfaces"));
    }

    #[test]
    fn timeseries_length_must_match_timeframe() {
        let mut es = minimal_system();
        es.sources[0].timeseries = Some(flows([(
            "electricity",
            crate::model::ratings::SeriesBounds::fixed(&[1.0, 2.0]),
        )]));
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.field == "sources.Supply.timeseries.electricity"));
    }

    #[test]
    fn inverted_bounds_are_reported() {
        let mut es = minimal_system();
        es.sinks[0]
            .flow_rates
            .insert("electricity".to_string(), MinMax::new(5.0, 1.0));
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.field == "sinks.Demand.flow_rates.electricity"));
    }

    #[test]
    fn soc_above_capacity_is_reported() {
        let mut es = minimal_system();
        es.storages
            .push(Storage::new("Battery", "electricity", "electricity", 5.0, 9.0));
        es.busses[0].inputs.push("Battery.electricity".to_string());
        es.busses[0].outputs.push("Battery.electricity".to_string());
        let errors = es.validate();
        assert!(errors.iter().any(|e| e.field == "storages.Battery.initial_soc"));
    }

    #[test]
    fn display_includes_field_path() {
        let err = ModelError::new("sinks.Demand.flow_rates", "min exceeds max");
        let text = err.to_string();
        assert!(text.contains("sinks.Demand.flow_rates"));
    }
}
