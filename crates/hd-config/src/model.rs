//! Inheritance model parameter types.
//!
//! The model is fixed for the lifetime of an inference run: a founder
//! gene-count prior, a trait-given-gene-count table, and a single mutation
//! rate. Parameters are immutable once constructed and passed by reference
//! into the inference engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hd_common::schema::is_compatible;
use hd_common::{Error, GeneCount, Result};

use crate::PARAMS_SCHEMA_VERSION;

/// Tolerance for probability sums during validation.
const SUM_TOLERANCE: f64 = 1e-9;

/// Complete inheritance model parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unconditional gene-count distribution for founders.
    pub gene_prior: GenePrior,

    /// P(trait | gene count), one row per copy count.
    pub trait_given_gene: TraitTable,

    /// Probability that a transmitted allele is gained or lost.
    pub mutation_rate: f64,
}

/// Founder gene-count prior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

/// Trait-conditional table, one row per gene count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitTable {
    pub zero: TraitProbs,
    pub one: TraitProbs,
    pub two: TraitProbs,
}

/// P(trait present / absent) for one gene count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitProbs {
    pub present: f64,
    pub absent: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            schema_version: PARAMS_SCHEMA_VERSION.to_string(),
            description: None,
            gene_prior: GenePrior {
                zero: 0.96,
                one: 0.03,
                two: 0.01,
            },
            trait_given_gene: TraitTable {
                zero: TraitProbs {
                    present: 0.01,
                    absent: 0.99,
                },
                one: TraitProbs {
                    present: 0.56,
                    absent: 0.44,
                },
                two: TraitProbs {
                    present: 0.65,
                    absent: 0.35,
                },
            },
            mutation_rate: 0.01,
        }
    }
}

impl GenePrior {
    /// Prior probability of carrying `count` copies.
    pub fn prob(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }
}

impl TraitTable {
    /// The row conditioned on `count` copies.
    pub fn row(&self, count: GeneCount) -> &TraitProbs {
        match count {
            GeneCount::Zero => &self.zero,
            GeneCount::One => &self.one,
            GeneCount::Two => &self.two,
        }
    }
}

impl TraitProbs {
    /// P(trait = `present`) for this row.
    pub fn prob(&self, present: bool) -> f64 {
        if present {
            self.present
        } else {
            self.absent
        }
    }
}

impl ModelParams {
    /// Load parameters from a JSON file and validate them.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let params: ModelParams = serde_json::from_str(&raw)?;
        if !is_compatible(&params.schema_version, PARAMS_SCHEMA_VERSION) {
            return Err(Error::SchemaVersion {
                found: params.schema_version,
                expected: PARAMS_SCHEMA_VERSION.to_string(),
            });
        }
        params.validate()?;
        Ok(params)
    }

    /// P(trait = `present` | `count` copies).
    pub fn trait_prob(&self, count: GeneCount, present: bool) -> f64 {
        self.trait_given_gene.row(count).prob(present)
    }

    /// Probability that a parent carrying `count` copies transmits a
    /// functional copy to a child.
    ///
    /// The mutation rate enters the model only here. The complement of
    /// this value is the probability of transmitting no copy; callers
    /// must derive it as `1.0 - transmission_prob(..)` rather than
    /// re-deriving mutation terms.
    pub fn transmission_prob(&self, count: GeneCount) -> f64 {
        let m = self.mutation_rate;
        match count {
            GeneCount::Two => 1.0 - m,
            GeneCount::One => 0.5 * (1.0 - m),
            GeneCount::Zero => m,
        }
    }

    /// Validate ranges and probability sums.
    pub fn validate(&self) -> Result<()> {
        check_unit("mutation_rate", self.mutation_rate)?;
        check_unit("gene_prior.zero", self.gene_prior.zero)?;
        check_unit("gene_prior.one", self.gene_prior.one)?;
        check_unit("gene_prior.two", self.gene_prior.two)?;

        let prior_sum = self.gene_prior.zero + self.gene_prior.one + self.gene_prior.two;
        if (prior_sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::InvalidParams(format!(
                "gene_prior sums to {prior_sum}, expected 1"
            )));
        }

        for count in GeneCount::ALL {
            let row = self.trait_given_gene.row(count);
            check_unit(&format!("trait_given_gene[{count}].present"), row.present)?;
            check_unit(&format!("trait_given_gene[{count}].absent"), row.absent)?;
            let row_sum = row.present + row.absent;
            if (row_sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(Error::InvalidParams(format!(
                    "trait_given_gene[{count}] sums to {row_sum}, expected 1"
                )));
            }
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidParams(format!(
            "{field} = {value} is not a probability"
        )));
    }
    Ok(())
}
