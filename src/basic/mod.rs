//! Small didactic energy system models.
//!
//! Each builder returns a fully parameterized
//! [`EnergySystem`](crate::model::EnergySystem) spanning a handful of hourly
//! steps, sized so its optimization results stay verifiable by hand.

mod chp;
mod connected_es;
mod emission_objective;
mod expansion_plan;
mod fpwe;
mod mssesu;
mod mwe;
mod self_similar;
mod simple_transformer_grid;
mod statistical_identification;
mod storage_example;
mod storage_fixed_ratio;
mod time_varying_efficiency_transformer;
mod variable_chp;
mod zero_costs;

pub use chp::create_chp;
pub use connected_es::create_connected_es;
pub use emission_objective::create_emission_objective;
pub use expansion_plan::create_expansion_plan_example;
pub use fpwe::create_fpwe;
pub use mssesu::create_mssesu;
pub use mwe::create_mwe;
pub use self_similar::create_self_similar_energy_system;
pub use simple_transformer_grid::create_simple_transformer_grid_es;
pub use statistical_identification::create_statistical_identification_example;
pub use storage_example::create_storage_example;
pub use storage_fixed_ratio::create_storage_fixed_ratio_expansion_example;
pub use time_varying_efficiency_transformer::create_time_varying_efficiency_transformer;
pub use variable_chp::create_variable_chp;
pub use zero_costs::create_zero_costs_es;
