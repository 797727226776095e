//! Parameterizable model generators.
//!
//! Groups the builders whose output scales with a size argument, together
//! with the catalog entries they are usually combined with.

mod self_similar_system_model;

pub use self_similar_system_model::{create_minimal_es_unit, create_self_similar_system_model};

pub use crate::basic::create_variable_chp;
pub use crate::scenarios::create_generic_grid;
