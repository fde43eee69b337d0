//! Property-based tests for inference invariants.

use proptest::prelude::*;

use hd_common::GeneCount;
use hd_config::ModelParams;
use hd_core::inference::{infer_posteriors, infer_posteriors_exhaustive};
use hd_core::pedigree::{PersonRecord, Population};

/// Declarative pedigree member used to build random populations.
#[derive(Debug, Clone)]
struct MemberSpec {
    /// Parent picks, applied only when at least two earlier members exist.
    parents: Option<(prop::sample::Index, prop::sample::Index)>,
    observed: Option<bool>,
}

fn member_strategy() -> impl Strategy<Value = MemberSpec> {
    (
        prop::option::of((any::<prop::sample::Index>(), any::<prop::sample::Index>())),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(parents, observed)| MemberSpec { parents, observed })
}

/// Random well-formed pedigrees of one to five persons. Parents always
/// precede children in the record list, so the relation is acyclic.
fn records_strategy() -> impl Strategy<Value = Vec<PersonRecord>> {
    prop::collection::vec(member_strategy(), 1..=5).prop_map(|members| {
        members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let parents = match &member.parents {
                    Some((mother, father)) if i >= 2 => Some((
                        format!("p{}", mother.index(i)),
                        format!("p{}", father.index(i)),
                    )),
                    _ => None,
                };
                PersonRecord {
                    name: format!("p{i}"),
                    mother: parents.clone().map(|(m, _)| m),
                    father: parents.map(|(_, f)| f),
                    observed_trait: member.observed,
                }
            })
            .collect()
    })
}

fn build(records: Vec<PersonRecord>) -> Population {
    Population::from_records(records).expect("generated records are well-formed")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn posteriors_sum_to_one(records in records_strategy()) {
        let population = build(records);
        let model = ModelParams::default();
        let result = infer_posteriors(&population, &model)
            .expect("single-table observations are never contradictory");

        for posterior in &result.posteriors {
            let gene_sum: f64 = posterior.gene.iter().sum();
            let trait_sum: f64 = posterior.trait_status.iter().sum();
            prop_assert!((gene_sum - 1.0).abs() < 1e-9, "gene sums to {gene_sum}");
            prop_assert!((trait_sum - 1.0).abs() < 1e-9, "trait sums to {trait_sum}");
        }
    }

    #[test]
    fn decomposed_matches_exhaustive(records in records_strategy()) {
        let population = build(records);
        let model = ModelParams::default();

        let decomposed = infer_posteriors(&population, &model).unwrap();
        let exhaustive = infer_posteriors_exhaustive(&population, &model).unwrap();

        for (a, b) in decomposed.posteriors.iter().zip(&exhaustive.posteriors) {
            for count in GeneCount::ALL {
                prop_assert!(
                    (a.gene_prob(count) - b.gene_prob(count)).abs() < 1e-9,
                    "gene {count}: {} vs {}",
                    a.gene_prob(count),
                    b.gene_prob(count)
                );
            }
            prop_assert!((a.trait_prob(true) - b.trait_prob(true)).abs() < 1e-9);
        }
    }

    #[test]
    fn posteriors_are_label_invariant(records in records_strategy()) {
        let population = build(records.clone());
        let mut reversed = records;
        reversed.reverse();
        let reordered = build(reversed);

        let model = ModelParams::default();
        let first = infer_posteriors(&population, &model).unwrap();
        let second = infer_posteriors(&reordered, &model).unwrap();

        for (id, person) in population.iter() {
            let a = first.posterior(id);
            let b = second.posterior(reordered.id_of(&person.name).unwrap());
            for count in GeneCount::ALL {
                prop_assert!(
                    (a.gene_prob(count) - b.gene_prob(count)).abs() < 1e-9,
                    "{} gene {count}: {} vs {}",
                    person.name,
                    a.gene_prob(count),
                    b.gene_prob(count)
                );
            }
            prop_assert!((a.trait_prob(true) - b.trait_prob(true)).abs() < 1e-9);
        }
    }

    #[test]
    fn observed_traits_are_certain_in_the_posterior(records in records_strategy()) {
        let population = build(records);
        let model = ModelParams::default();
        let result = infer_posteriors(&population, &model).unwrap();

        for (id, person) in population.iter() {
            if let Some(observed) = person.observed_trait {
                let p = result.posterior(id).trait_prob(observed);
                prop_assert!((p - 1.0).abs() < 1e-9, "{}: {p}", person.name);
            }
        }
    }
}
