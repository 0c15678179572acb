//! Fixed-size chained hashtable.
//!
//! The table owns a boxed slice of slots. A slot is either empty or holds a
//! [`Bucket`], created on the first insert that lands there. One
//! [`UniversalFn`] is chosen at construction and used for every operation
//! until the table is dropped; the slot count never changes.
//!
//! # Thread Safety
//!
//! Mutation requires `&mut self`. Callers sharing a table across threads
//! must wrap the whole table in a single lock; bucket insertion rewires
//! several links and is not atomic.

use crate::bucket::Bucket;
use crate::error::TableResult;
use crate::stats::ChainStats;
use crate::universal::{UniversalFn, UniversalHash};
use rand::Rng;
use tracing::{debug, trace};

/// Hashtable with integer keys, universal hashing, and ordered chains.
pub struct HashTable<V> {
    slots: Box<[Option<Bucket<V>>]>,
    function: UniversalFn,
    len: usize,
}

impl<V> HashTable<V> {
    /// Create a table for keys in `0..=max_key` with `table_size` slots.
    ///
    /// The hash function is drawn using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// - [`TableError::ZeroTableSize`](crate::TableError::ZeroTableSize) if `table_size` is 0
    /// - [`TableError::ModulusOverflow`](crate::TableError::ModulusOverflow) if no prime above
    ///   `max_key` fits in a `u64`
    pub fn new(max_key: u64, table_size: usize) -> TableResult<Self> {
        Self::with_rng(max_key, table_size, &mut rand::rng())
    }

    /// Create a table, drawing the hash function from `rng`.
    ///
    /// A seeded RNG gives deterministic slot placement.
    pub fn with_rng<R: Rng>(max_key: u64, table_size: usize, rng: &mut R) -> TableResult<Self> {
        let generator = UniversalHash::new(max_key, table_size)?;
        let function = generator.choose(rng);
        debug!(
            max_key,
            table_size,
            p = function.modulus(),
            a = function.a(),
            b = function.b(),
            "selected hash function"
        );
        Ok(Self::with_function(function))
    }

    /// Create a table bound to a pre-selected function.
    ///
    /// The slot count is the function's table size.
    pub fn with_function(function: UniversalFn) -> Self {
        let slots = (0..function.table_size())
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            function,
            len: 0,
        }
    }

    /// Insert `value` under `key`.
    ///
    /// The entry is placed in key order within its chain. Inserting a key
    /// that is already present adds a second entry after the existing one;
    /// lookups keep returning the first.
    ///
    /// Returns `true` if the target chain is non-empty afterwards, which is
    /// always the case.
    pub fn add(&mut self, key: u64, value: V) -> bool {
        let index = self.function.hash(key);
        let bucket = self.slots[index].get_or_insert_with(|| {
            trace!(index, "creating bucket");
            Bucket::new()
        });
        bucket.insert(key, value);
        self.len += 1;
        !bucket.is_empty()
    }

    /// Look up the value for `key`.
    ///
    /// Returns `None` if the key was never inserted.
    pub fn get(&self, key: u64) -> Option<&V> {
        self.bucket(self.function.hash(key))?.get(key)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        let index = self.function.hash(key);
        self.slots[index].as_mut()?.get_mut(key)
    }

    /// Check if `key` has been inserted.
    pub fn contains_key(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// Chain length for every slot, in slot order.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map_or(0, |bucket| bucket.iter().count()))
            .collect()
    }

    /// Summarise the chain-length distribution.
    pub fn stats(&self) -> ChainStats {
        ChainStats::from_lengths(&self.chain_lengths())
    }

    /// Get the bucket at a slot index, if one has been created.
    #[inline]
    pub fn bucket(&self, index: usize) -> Option<&Bucket<V>> {
        self.slots.get(index)?.as_ref()
    }

    /// Slot index that `key` hashes to.
    #[inline]
    pub fn bucket_index(&self, key: u64) -> usize {
        self.function.hash(key)
    }

    /// Total number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no entry has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// The prime modulus of the hash function.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.function.modulus()
    }

    /// The hash function bound to this table.
    #[inline]
    pub fn function(&self) -> UniversalFn {
        self.function
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashTable")
            .field("function", &self.function)
            .field("len", &self.len)
            .field("table_size", &self.slots.len())
            .finish_non_exhaustive()
    }
}
