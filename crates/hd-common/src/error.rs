//! Error types for Heredity.

use thiserror::Error;

/// Result type alias for Heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Heredity.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid model parameters: {0}")]
    InvalidParams(String),

    #[error("incompatible parameter schema version {found:?} (expected major {expected})")]
    SchemaVersion { found: String, expected: String },

    // Pedigree data errors (20-29)
    #[error("malformed pedigree data: {0}")]
    Data(String),

    #[error("duplicate person {name:?}")]
    DuplicatePerson { name: String },

    #[error("person {person:?} references unknown parent {parent:?}")]
    UnknownParent { person: String, parent: String },

    #[error("person {name:?} must have both parents or neither")]
    SingleParent { name: String },

    #[error("person {name:?} has invalid trait flag {value:?} (expected \"\", \"0\" or \"1\")")]
    InvalidTraitFlag { name: String, value: String },

    // Inference errors (30-39)
    #[error("contradictory evidence: no admissible scenario for {person:?}")]
    ContradictoryEvidence { person: String },

    #[error("pedigree component of {size} persons exceeds exact-enumeration limit of {max}")]
    ComponentTooLarge { size: usize, max: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns the stable numeric code for this error type.
    /// Used for detailed error reporting in diagnostics.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidParams(_) => 10,
            Error::SchemaVersion { .. } => 11,
            Error::Data(_) => 20,
            Error::DuplicatePerson { .. } => 21,
            Error::UnknownParent { .. } => 22,
            Error::SingleParent { .. } => 23,
            Error::InvalidTraitFlag { .. } => 24,
            Error::ContradictoryEvidence { .. } => 30,
            Error::ComponentTooLarge { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Csv(_) => 62,
        }
    }
}
