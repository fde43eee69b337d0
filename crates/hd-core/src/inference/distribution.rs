//! Per-person posterior distributions and accumulation.
//!
//! During enumeration each person owns two weight accumulators: one bucket
//! per gene count and one per trait value. Buckets use compensated sums so
//! the 6^k scenario weights accumulate without order-dependent drift.

use hd_common::GeneCount;
use hd_math::{normalize_in_place, CompensatedSum, NormalizeError};

/// Accumulates scenario weights for one person during enumeration.
#[derive(Debug, Clone, Default)]
pub struct PersonAccumulator {
    gene: [CompensatedSum; 3],
    trait_status: [CompensatedSum; 2],
}

impl PersonAccumulator {
    /// Add one scenario's weight under this person's assignment.
    pub fn add(&mut self, count: GeneCount, has_trait: bool, weight: f64) {
        self.gene[count.index()].add(weight);
        self.trait_status[usize::from(has_trait)].add(weight);
    }

    /// Normalize the accumulated weights into a posterior.
    ///
    /// Fails when no admissible scenario carried mass for this person.
    pub fn into_posterior(self) -> Result<PersonPosterior, NormalizeError> {
        let mut gene = [
            self.gene[0].value(),
            self.gene[1].value(),
            self.gene[2].value(),
        ];
        let mut trait_status = [self.trait_status[0].value(), self.trait_status[1].value()];
        normalize_in_place(&mut gene)?;
        normalize_in_place(&mut trait_status)?;
        Ok(PersonPosterior { gene, trait_status })
    }
}

/// Normalized posterior over gene count and trait for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPosterior {
    /// P(gene count), indexed by copy count.
    pub gene: [f64; 3],
    /// P(trait), indexed absent then present.
    pub trait_status: [f64; 2],
}

impl PersonPosterior {
    pub fn gene_prob(&self, count: GeneCount) -> f64 {
        self.gene[count.index()]
    }

    pub fn trait_prob(&self, present: bool) -> f64 {
        self.trait_status[usize::from(present)]
    }
}
