//! CSV pedigree loader.
//!
//! Expected columns: `name,mother,father,trait`. The trait cell is "1"
//! for observed-present, "0" for observed-absent, empty for unobserved.
//! Mother and father cells are either both empty or both name rows in
//! the same file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use hd_common::{Error, Result};

use super::{PersonRecord, Population};

/// One raw CSV row prior to validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    trait_flag: String,
}

/// Load a pedigree from a CSV file.
pub fn load_pedigree(path: &Path) -> Result<Population> {
    let file = File::open(path)?;
    let population = load_pedigree_from_reader(file)?;
    debug!(persons = population.len(), path = %path.display(), "loaded pedigree");
    Ok(population)
}

/// Load a pedigree from any reader producing CSV bytes.
pub fn load_pedigree_from_reader<R: Read>(reader: R) -> Result<Population> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let row: RawRow = row?;
        records.push(parse_row(row)?);
    }
    Population::from_records(records)
}

fn parse_row(row: RawRow) -> Result<PersonRecord> {
    let observed_trait = match row.trait_flag.as_str() {
        "" => None,
        "0" => Some(false),
        "1" => Some(true),
        other => {
            return Err(Error::InvalidTraitFlag {
                name: row.name,
                value: other.to_string(),
            })
        }
    };
    Ok(PersonRecord {
        name: row.name,
        mother: non_empty(row.mother),
        father: non_empty(row.father),
        observed_trait,
    })
}

fn non_empty(cell: String) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell)
    }
}
