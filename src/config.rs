//! Table configuration and builder.

use crate::error::TableResult;
use crate::table::HashTable;
use crate::universal::UniversalFn;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Deserialize;

/// Default upper bound on keys.
pub const DEFAULT_MAX_KEY: u64 = 10_000;

/// Default number of slots.
pub const DEFAULT_TABLE_SIZE: usize = 1_000;

/// Table settings, deserializable from a config file.
///
/// ```toml
/// max_key = 10000
/// table_size = 1000
/// seed = 42        # optional
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Largest key the caller intends to insert.
    pub max_key: u64,
    /// Number of slots.
    pub table_size: usize,
    /// Seed for choosing the hash function. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_key: DEFAULT_MAX_KEY,
            table_size: DEFAULT_TABLE_SIZE,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Create a builder from this config.
    pub fn builder(&self) -> HashTableBuilder {
        let builder = HashTableBuilder::new()
            .max_key(self.max_key)
            .table_size(self.table_size);
        match self.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }
}

/// Builder for [`HashTable`].
#[derive(Debug, Clone)]
pub struct HashTableBuilder {
    max_key: u64,
    table_size: usize,
    seed: Option<u64>,
    function: Option<UniversalFn>,
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTableBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_key: DEFAULT_MAX_KEY,
            table_size: DEFAULT_TABLE_SIZE,
            seed: None,
            function: None,
        }
    }

    /// Set the largest key the caller intends to insert.
    ///
    /// The prime modulus is the smallest prime above this bound.
    pub fn max_key(mut self, max_key: u64) -> Self {
        self.max_key = max_key;
        self
    }

    /// Set the number of slots.
    pub fn table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Seed the RNG used to choose the hash function.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a pre-selected hash function.
    ///
    /// Overrides `max_key`, `table_size`, and `seed`.
    pub fn function(mut self, function: UniversalFn) -> Self {
        self.function = Some(function);
        self
    }

    /// Build the table.
    pub fn build<V>(self) -> TableResult<HashTable<V>> {
        if let Some(function) = self.function {
            return Ok(HashTable::with_function(function));
        }
        match self.seed {
            Some(seed) => {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                HashTable::with_rng(self.max_key, self.table_size, &mut rng)
            }
            None => HashTable::new(self.max_key, self.table_size),
        }
    }
}
