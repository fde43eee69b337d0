//! Posterior report rendering.
//!
//! Text output lists, per person, the gene distribution ordered 2, 1, 0
//! and the trait distribution, each value to four decimal places. JSON
//! output is a name-keyed object at full precision with a schema version.

use std::collections::BTreeMap;

use serde::Serialize;

use hd_common::{GeneCount, OutputFormat, Result, SCHEMA_VERSION};

use crate::inference::InferenceResult;
use crate::pedigree::Population;

/// JSON document for one inference run.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    schema_version: &'a str,
    persons: BTreeMap<&'a str, PersonJson>,
}

#[derive(Debug, Serialize)]
struct PersonJson {
    gene: GeneJson,
    #[serde(rename = "trait")]
    trait_status: TraitJson,
}

#[derive(Debug, Serialize)]
struct GeneJson {
    #[serde(rename = "2")]
    two: f64,
    #[serde(rename = "1")]
    one: f64,
    #[serde(rename = "0")]
    zero: f64,
}

#[derive(Debug, Serialize)]
struct TraitJson {
    #[serde(rename = "true")]
    present: f64,
    #[serde(rename = "false")]
    absent: f64,
}

/// Render posteriors in the requested format.
pub fn render(
    population: &Population,
    result: &InferenceResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(population, result)),
        OutputFormat::Json => render_json(population, result),
    }
}

fn render_text(population: &Population, result: &InferenceResult) -> String {
    let mut out = String::new();
    for (id, person) in population.iter() {
        let posterior = result.posterior(id);
        out.push_str(&format!("{}:\n", person.name));
        out.push_str("  Gene:\n");
        for count in [GeneCount::Two, GeneCount::One, GeneCount::Zero] {
            out.push_str(&format!("    {}: {:.4}\n", count, posterior.gene_prob(count)));
        }
        out.push_str("  Trait:\n");
        out.push_str(&format!("    True: {:.4}\n", posterior.trait_prob(true)));
        out.push_str(&format!("    False: {:.4}\n", posterior.trait_prob(false)));
    }
    out
}

fn render_json(population: &Population, result: &InferenceResult) -> Result<String> {
    let mut persons = BTreeMap::new();
    for (id, person) in population.iter() {
        let posterior = result.posterior(id);
        persons.insert(
            person.name.as_str(),
            PersonJson {
                gene: GeneJson {
                    two: posterior.gene_prob(GeneCount::Two),
                    one: posterior.gene_prob(GeneCount::One),
                    zero: posterior.gene_prob(GeneCount::Zero),
                },
                trait_status: TraitJson {
                    present: posterior.trait_prob(true),
                    absent: posterior.trait_prob(false),
                },
            },
        );
    }
    let report = JsonReport {
        schema_version: SCHEMA_VERSION,
        persons,
    };
    let mut rendered = serde_json::to_string_pretty(&report)?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer_posteriors;
    use crate::pedigree::PersonRecord;
    use hd_config::ModelParams;

    fn lone_founder(observed: Option<bool>) -> Population {
        Population::from_records(vec![PersonRecord {
            name: "Harry".to_string(),
            mother: None,
            father: None,
            observed_trait: observed,
        }])
        .unwrap()
    }

    #[test]
    fn text_report_rounds_to_four_decimals() {
        let population = lone_founder(None);
        let result = infer_posteriors(&population, &ModelParams::default()).unwrap();
        let text = render(&population, &result, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Harry:\n  Gene:\n    2: 0.0100\n    1: 0.0300\n    0: 0.9600\n  Trait:\n    True: 0.0329\n    False: 0.9671\n"
        );
    }

    #[test]
    fn observed_founder_text_matches_bayes_values() {
        let population = lone_founder(Some(true));
        let result = infer_posteriors(&population, &ModelParams::default()).unwrap();
        let text = render(&population, &result, OutputFormat::Text).unwrap();
        assert!(text.contains("    2: 0.1976\n"));
        assert!(text.contains("    1: 0.5106\n"));
        assert!(text.contains("    0: 0.2918\n"));
        assert!(text.contains("    True: 1.0000\n"));
    }

    #[test]
    fn json_report_is_name_keyed_and_versioned() {
        let population = lone_founder(None);
        let result = infer_posteriors(&population, &ModelParams::default()).unwrap();
        let rendered = render(&population, &result, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        let gene = &value["persons"]["Harry"]["gene"];
        assert!((gene["0"].as_f64().unwrap() - 0.96).abs() < 1e-9);
        let trait_status = &value["persons"]["Harry"]["trait"];
        assert!((trait_status["true"].as_f64().unwrap() - 0.0329).abs() < 1e-9);
    }
}
