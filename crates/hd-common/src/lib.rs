//! Heredity shared types and errors.
//!
//! This crate provides foundational types shared across hd-* crates:
//! - Discrete model domain types (gene copy counts)
//! - Common error types with stable codes
//! - Output format specifications
//! - Schema versioning for JSON artifacts

pub mod error;
pub mod gene;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use gene::GeneCount;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
