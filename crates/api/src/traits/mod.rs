//! Traits shared by the parameter-set registries

pub mod parameter_set;

pub use parameter_set::{params_from_name, AlgorithmId, ParameterSet};
