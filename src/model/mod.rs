//! Thin energy-system model layer targeted by the example builders.
//!
//! Components are data-only structs; [`EnergySystem`] ties them together
//! and checks referential consistency. No solving or simulation happens
//! here or anywhere else in this crate.

pub mod components;
pub mod ratings;
pub mod system;
pub mod timeframe;

pub use components::{
    Bus, Chp, Connector, NodeMeta, Sink, Source, Storage, Transformer, conversions, couplings,
    flows, names,
};
pub use ratings::{Efficiency, InOut, MinMax, OnOff, PositiveNegative, SeriesBounds};
pub use system::{EnergySystem, GlobalConstraints, ModelError};
pub use timeframe::Timeframe;
