//! Catalog of ready-made energy system models.
//!
//! Every public `create_*` function returns a fully parameterized
//! [`EnergySystem`](model::EnergySystem): nodes, flow parameters, a
//! timeframe and global constraints, ready to be handed to an optimizer
//! frontend or inspected as-is. [`catalog::create`] dispatches by name.

pub mod basic;
pub mod catalog;
pub mod data;
pub mod io;
/// Component and system types shared by all examples.
pub mod model;
pub mod plausibility;
pub mod scenarios;
pub mod scientific;
pub mod specialized;
pub mod utils;
