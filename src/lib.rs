//! unihash: fixed-size chained hashtable with universal hashing.
//!
//! This crate provides:
//!
//! - **Universal hashing**: [`UniversalHash`] computes a prime modulus above
//!   the key bound and hands out members of the family
//!   `h(k) = ((a*k + b) mod p) mod m`, chosen at random or by parameter
//! - **Ordered chains**: [`Bucket`], a doubly-linked chain kept sorted by key
//! - **Hashtable**: [`HashTable`], a fixed array of chains bound to one
//!   randomly chosen function for its whole lifetime
//! - **Diagnostics**: [`ChainStats`] over the per-slot chain lengths
//!
//! # Architecture
//!
//! ```text
//!   key --> UniversalFn (a, b, p, m) --> slot index
//!                                            |
//!          +-----+-----+-----+-----+-----+   v
//!          |  0  |  1  |  2  | ... | m-1 |
//!          +-----+-----+-----+-----+-----+
//!             |           |
//!             v           v
//!          [3]<->[9]    [4]<->[4]<->[17]      (ascending by key)
//! ```
//!
//! # Example
//!
//! ```
//! use unihash::HashTable;
//!
//! let mut table = HashTable::new(10_000, 1_000)?;
//! table.add(1234, "Test-Data-1234");
//!
//! assert_eq!(table.get(1234), Some(&"Test-Data-1234"));
//! assert_eq!(table.get(9999), None);
//! assert_eq!(table.chain_lengths().iter().sum::<usize>(), 1);
//! # Ok::<(), unihash::TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bucket;
mod config;
mod error;
mod stats;
mod table;
mod universal;

pub use bucket::{Bucket, Iter as BucketIter};
pub use config::{DEFAULT_MAX_KEY, DEFAULT_TABLE_SIZE, HashTableBuilder, TableConfig};
pub use error::{TableError, TableResult};
pub use stats::ChainStats;
pub use table::HashTable;
pub use universal::{MAX_PRIME, UniversalFn, UniversalHash, is_prime, prime_modulus};
