//! Exact posterior inference over pedigrees.
//!
//! The engine enumerates every joint assignment of gene counts and trait
//! values consistent with observed evidence, scores each with the joint
//! probability evaluator, and accumulates scenario weights into per-person
//! distributions. Observations act as a hard filter: a scenario that
//! contradicts any observed trait contributes zero mass and is never
//! scored.
//!
//! Pedigree components with no ancestry links between them are independent
//! under the model, so enumeration runs per connected component (6^k
//! scenarios for a k-person component rather than 6^n globally). The
//! single-block path over the whole population is retained as the
//! reference implementation (`infer_posteriors_exhaustive`) and the two
//! agree numerically.

pub mod distribution;
pub mod enumerate;
pub mod joint;

pub use distribution::PersonPosterior;
pub use enumerate::{
    infer_posteriors, infer_posteriors_exhaustive, EnumerationStats, InferenceResult,
    MAX_COMPONENT_PERSONS,
};
pub use joint::{joint_probability, ComponentView};
