//! Exit codes for the heredity CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. Usage errors (wrong argument count) are reported by clap
//! before any of these apply.

use hd_common::Error;

/// Exit codes for heredity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Posteriors computed and printed
    Clean = 0,

    /// Configuration / parameter file error
    ConfigError = 10,

    /// Malformed pedigree data
    DataError = 11,

    /// Inference error (contradictory evidence, oversized component)
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Map an error to its process exit code.
pub fn exit_code_for(err: &Error) -> ExitCode {
    match err {
        Error::InvalidParams(_) | Error::SchemaVersion { .. } => ExitCode::ConfigError,
        Error::Data(_)
        | Error::DuplicatePerson { .. }
        | Error::UnknownParent { .. }
        | Error::SingleParent { .. }
        | Error::InvalidTraitFlag { .. }
        | Error::Csv(_) => ExitCode::DataError,
        Error::ContradictoryEvidence { .. } | Error::ComponentTooLarge { .. } => {
            ExitCode::InferenceError
        }
        Error::Io(_) | Error::Json(_) => ExitCode::IoError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_is_the_only_success() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::DataError.is_success());
        assert!(!ExitCode::InternalError.is_success());
    }

    #[test]
    fn error_mapping_follows_taxonomy() {
        let data = Error::SingleParent {
            name: "Harry".into(),
        };
        let inference = Error::ContradictoryEvidence {
            person: "Harry".into(),
        };
        assert_eq!(exit_code_for(&data), ExitCode::DataError);
        assert_eq!(exit_code_for(&inference), ExitCode::InferenceError);
        assert_eq!(
            exit_code_for(&Error::InvalidParams("bad".into())),
            ExitCode::ConfigError
        );
    }

    #[test]
    fn converts_to_i32() {
        assert_eq!(i32::from(ExitCode::InferenceError), 12);
        assert_eq!(ExitCode::Clean.as_i32(), 0);
    }
}
