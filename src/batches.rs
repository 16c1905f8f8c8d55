//! Job tables compiled into the binary, one per asset drop, in the order they
//! were produced.

use crate::domain::ConversionJob;

/// A named, ordered list of jobs.
#[derive(Debug, Clone)]
pub struct Batch {
    pub name: &'static str,
    pub jobs: Vec<ConversionJob>,
}

const TABLES: &[(&str, &str)] = &[
    ("loot_v1", include_str!("../batches/loot_v1.yaml")),
    ("rewards_v2", include_str!("../batches/rewards_v2.yaml")),
    ("rewards_v3", include_str!("../batches/rewards_v3.yaml")),
    ("rewards_v4", include_str!("../batches/rewards_v4.yaml")),
];

pub fn parse(name: &'static str, yaml: &str) -> Result<Batch, serde_yaml::Error> {
    let jobs: Vec<ConversionJob> = serde_yaml::from_str(yaml)?;
    Ok(Batch { name, jobs })
}

/// Every embedded batch. A table that fails to parse is reported as its own
/// `Err` so the remaining batches can still run.
pub fn all() -> Vec<Result<Batch, (&'static str, serde_yaml::Error)>> {
    TABLES
        .iter()
        .map(|(name, yaml)| parse(name, yaml).map_err(|e| (*name, e)))
        .collect()
}
