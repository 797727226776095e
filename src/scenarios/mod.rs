//! Application-scale grid scenarios.
//!
//! Unlike the [`basic`](crate::basic) models these systems span dozens of
//! nodes across several voltage levels and sectors. The grid family shares
//! one topology and varies how voltage levels are coupled and how surplus
//! energy is buffered; [`GridParams`] tunes its size.

mod generic_grid;
mod grid_cp_es;
mod grid_cs_es;
mod grid_es;
mod grid_family;
mod grid_kp_es;
mod grid_tp_es;
mod grid_ts_es;
mod hhes;
mod params;

pub use generic_grid::create_generic_grid;
pub use grid_cp_es::create_grid_cp_es;
pub use grid_cs_es::create_grid_cs_es;
pub use grid_es::create_grid_es;
pub use grid_kp_es::create_grid_kp_es;
pub use grid_tp_es::create_grid_tp_es;
pub use grid_ts_es::create_grid_ts_es;
pub use hhes::create_hhes;
pub use params::{GridParams, HamburgParams};
