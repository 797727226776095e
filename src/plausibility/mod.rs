//! Minimal scenario combinations probing constraint plausibility.
//!
//! These systems pair a cheap but emitting supply with an emission-free
//! alternative, so an optimizer respecting the global emission cap has to
//! split the dispatch in a predictable way.

mod chp_emissions;
mod storage_emissions;

pub use chp_emissions::create_chp_emissions;
pub use storage_emissions::create_storage_emissions;
