//! Key generation and table filling.

use crate::config::{KeyMode, WorkloadConfig};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, trace, warn};
use unihash::HashTable;

/// Outcome of a fill run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Seed used for key generation.
    pub seed: u64,
    /// Inserts reported as successful.
    pub added: u64,
    /// Inserts reported as failed.
    pub failed: u64,
}

/// Generate `count` keys according to `mode`.
pub fn generate_keys<R: Rng>(mode: KeyMode, count: u64, rng: &mut R) -> Vec<u64> {
    match mode {
        KeyMode::Sequential => (0..count).collect(),
        KeyMode::Random => (0..count).map(|_| rng.random_range(0..count)).collect(),
    }
}

/// Value stored for `key`.
pub fn value_for(key: u64) -> String {
    format!("Test-Data-{key}")
}

/// Fill `table` with generated keys and their values.
pub fn fill(table: &mut HashTable<String>, config: &WorkloadConfig) -> FillReport {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    debug!(seed, mode = %config.mode, count = config.count, "generating keys");

    let mut report = FillReport {
        seed,
        ..Default::default()
    };

    for key in generate_keys(config.mode, config.count, &mut rng) {
        if table.add(key, value_for(key)) {
            trace!(key, "added");
            report.added += 1;
        } else {
            warn!(key, "add failed");
            report.failed += 1;
        }
    }

    report
}
