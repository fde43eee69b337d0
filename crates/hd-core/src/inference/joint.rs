//! Joint probability evaluator.
//!
//! Scores one complete scenario for a pedigree component: a gene-count
//! assignment plus a trait-true subset covering every member. Inputs are
//! guaranteed internally consistent by the enumeration engine, so nothing
//! here can fail.

use hd_common::GeneCount;
use hd_config::ModelParams;

use crate::pedigree::{PersonId, Population};

/// A pedigree component prepared for enumeration.
///
/// `members` lists the component's persons in index order. Parent links
/// are pre-resolved to member-local indices; parents of a member always
/// belong to the same component.
#[derive(Debug)]
pub struct ComponentView {
    pub members: Vec<PersonId>,
    parents: Vec<Option<(usize, usize)>>,
    /// Bit i set when member i has an observed trait.
    observed_mask: u64,
    /// Bit i set when member i is observed trait-present.
    observed_present: u64,
}

impl ComponentView {
    pub fn new(population: &Population, members: Vec<PersonId>) -> Self {
        let mut local_of = vec![None; population.len()];
        for (i, id) in members.iter().enumerate() {
            local_of[id.0] = Some(i);
        }

        let mut parents = Vec::with_capacity(members.len());
        let mut observed_mask = 0u64;
        let mut observed_present = 0u64;
        for (i, &id) in members.iter().enumerate() {
            let person = population.person(id);
            let mother = person.mother.and_then(|p| local_of[p.0]);
            let father = person.father.and_then(|p| local_of[p.0]);
            debug_assert_eq!(person.mother.is_some(), mother.is_some());
            debug_assert_eq!(person.father.is_some(), father.is_some());
            parents.push(mother.zip(father));

            if let Some(observed) = person.observed_trait {
                observed_mask |= 1 << i;
                if observed {
                    observed_present |= 1 << i;
                }
            }
        }

        Self {
            members,
            parents,
            observed_mask,
            observed_present,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a candidate trait-true subset is consistent with every
    /// observed trait. Observed-present members must be in the subset,
    /// observed-absent members must not; unobserved members are free.
    pub fn admits(&self, trait_mask: u64) -> bool {
        trait_mask & self.observed_mask == self.observed_present
    }
}

/// Probability of one complete scenario.
///
/// `genes[i]` is member i's assigned copy count; bit i of `trait_mask`
/// is member i's assigned trait value.
pub fn joint_probability(
    view: &ComponentView,
    genes: &[GeneCount],
    trait_mask: u64,
    model: &ModelParams,
) -> f64 {
    let mut p = 1.0;
    for i in 0..view.members.len() {
        let count = genes[i];
        let gene_p = match view.parents[i] {
            None => model.gene_prior.prob(count),
            Some((mother, father)) => {
                gene_count_given_parents(model, count, genes[mother], genes[father])
            }
        };
        let has_trait = trait_mask >> i & 1 == 1;
        p *= gene_p * model.trait_prob(count, has_trait);
    }
    p
}

/// P(child carries `child` copies | parents carry `mother` / `father`).
///
/// Each parent independently passes a functional copy with the model's
/// transmission probability; not passing one is the complement of the
/// same value.
fn gene_count_given_parents(
    model: &ModelParams,
    child: GeneCount,
    mother: GeneCount,
    father: GeneCount,
) -> f64 {
    let pm = model.transmission_prob(mother);
    let pf = model.transmission_prob(father);
    match child {
        GeneCount::Zero => (1.0 - pf) * (1.0 - pm),
        GeneCount::One => pf * (1.0 - pm) + pm * (1.0 - pf),
        GeneCount::Two => pf * pm,
    }
}
