//! Heredity model parameter configuration.
//!
//! This crate provides:
//! - Typed Rust structs for the inheritance model constants
//! - Built-in defaults matching the reference model
//! - JSON loading with schema compatibility checks
//! - Semantic validation of the probability tables

pub mod model;

pub use model::{GenePrior, ModelParams, TraitProbs, TraitTable};

/// Schema version for parameter files.
pub const PARAMS_SCHEMA_VERSION: &str = "1.0.0";
