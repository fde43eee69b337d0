//! Posterior normalization utilities.
//!
//! These helpers turn unnormalized weight vectors into probability
//! distributions. They are intended to be used by hd-core inference so
//! that normalization logic is centralized and degenerate mass surfaces
//! as an explicit error instead of NaN output.

use thiserror::Error;

use super::stable::compensated_sum;

/// Failure modes when normalizing an accumulated weight vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// No weight survived accumulation; the evidence admits no scenario.
    #[error("total mass is zero")]
    ZeroMass,

    /// A weight or the total was NaN or infinite.
    #[error("non-finite total mass {0}")]
    NonFiniteMass(f64),
}

/// Normalize `weights` in place so they sum to 1.
///
/// Returns the pre-normalization mass on success. Applying it a second
/// time is a no-op up to floating-point tolerance, since the mass is
/// already 1.
pub fn normalize_in_place(weights: &mut [f64]) -> Result<f64, NormalizeError> {
    let mass = compensated_sum(weights);
    if !mass.is_finite() {
        return Err(NormalizeError::NonFiniteMass(mass));
    }
    if mass <= 0.0 {
        return Err(NormalizeError::ZeroMass);
    }
    for w in weights.iter_mut() {
        *w /= mass;
    }
    Ok(mass)
}

/// Check that `probs` sums to 1 within `tol`.
pub fn is_normalized(probs: &[f64], tol: f64) -> bool {
    (compensated_sum(probs) - 1.0).abs() <= tol
}
