//! Schema versioning and compatibility.

/// Current schema version for all JSON outputs.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (field removals, type changes)
/// - MINOR: Additive changes (new optional fields)
/// - PATCH: Bug fixes, documentation
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Check whether `version` shares a major version with `current`.
///
/// A version whose major component does not parse is never compatible.
pub fn is_compatible(version: &str, current: &str) -> bool {
    match (major_of(version), major_of(current)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn major_of(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}
