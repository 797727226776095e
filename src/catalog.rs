//! Name-based access to every example builder.

use tracing::debug;

use crate::model::{EnergySystem, ModelError};
use crate::scenarios::GridParams;
use crate::{basic, plausibility, scenarios, scientific, specialized};

/// Every example reachable through [`create`], in catalog order.
///
/// Builders taking a size or seed argument are listed with their defaults
/// applied; call them directly for other parameterizations.
pub const EXAMPLES: &[&str] = &[
    "mwe",
    "fpwe",
    "emission_objective",
    "connected_es",
    "chp",
    "variable_chp",
    "storage_example",
    "storage_fixed_ratio_expansion_example",
    "expansion_plan_example",
    "simple_transformer_grid_es",
    "time_varying_efficiency_transformer",
    "zero_costs_es",
    "mssesu",
    "self_similar_energy_system",
    "statistical_identification_example",
    "generic_grid",
    "grid_es",
    "hhes",
    "grid_kp_es",
    "grid_cs_es",
    "grid_cp_es",
    "grid_ts_es",
    "grid_tp_es",
    "self_similar_system_model",
    "chp_emissions",
    "storage_emissions",
    "hamburg_inspired_hnp_msc",
];

/// Builds the example registered under `name`, using default parameters
/// for the builders that take any.
///
/// # Errors
///
/// Returns a `ModelError` for unknown names and passes through any error
/// of the underlying builder.
pub fn create(name: &str) -> Result<EnergySystem, ModelError> {
    debug!(example = name, "building catalog example");

    let grid_defaults = GridParams::default();
    match name {
        "mwe" => Ok(basic::create_mwe()),
        "fpwe" => Ok(basic::create_fpwe()),
        "emission_objective" => Ok(basic::create_emission_objective()),
        "connected_es" => Ok(basic::create_connected_es()),
        "chp" => Ok(basic::create_chp()),
        "variable_chp" => Ok(basic::create_variable_chp()),
        "storage_example" => Ok(basic::create_storage_example()),
        "storage_fixed_ratio_expansion_example" => {
            Ok(basic::create_storage_fixed_ratio_expansion_example())
        }
        "expansion_plan_example" => Ok(basic::create_expansion_plan_example()),
        "simple_transformer_grid_es" => Ok(basic::create_simple_transformer_grid_es()),
        "time_varying_efficiency_transformer" => {
            Ok(basic::create_time_varying_efficiency_transformer())
        }
        "zero_costs_es" => Ok(basic::create_zero_costs_es()),
        "mssesu" => Ok(basic::create_mssesu(0, Some(42))),
        "self_similar_energy_system" => Ok(basic::create_self_similar_energy_system(2, None)),
        "statistical_identification_example" => {
            basic::create_statistical_identification_example(24)
        }
        "generic_grid" => Ok(scenarios::create_generic_grid()),
        "grid_es" => Ok(scenarios::create_grid_es()),
        "hhes" => scenarios::create_hhes(24),
        "grid_kp_es" => scenarios::create_grid_kp_es(&grid_defaults),
        "grid_cs_es" => scenarios::create_grid_cs_es(&grid_defaults),
        "grid_cp_es" => scenarios::create_grid_cp_es(&grid_defaults),
        "grid_ts_es" => scenarios::create_grid_ts_es(&grid_defaults),
        "grid_tp_es" => scenarios::create_grid_tp_es(&grid_defaults),
        "self_similar_system_model" => {
            Ok(specialized::create_self_similar_system_model(2, None))
        }
        "chp_emissions" => Ok(plausibility::create_chp_emissions()),
        "storage_emissions" => Ok(plausibility::create_storage_emissions()),
        "hamburg_inspired_hnp_msc" => scientific::create_hamburg_inspired_hnp_msc(24),
        _ => Err(ModelError::new(
            "catalog",
            format!("unknown example \"{name}\" (see --list for valid names)"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_example_builds_and_validates() {
        for name in EXAMPLES {
            let es = create(name).unwrap();
            assert!(
                es.validate().is_empty(),
                "example {name} produced an invalid system",
            );
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = create("fusion_reactor").unwrap_err();
        assert!(err.to_string().contains("fusion_reactor"));
    }
}
