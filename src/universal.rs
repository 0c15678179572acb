//! Universal hash family over a prime field.
//!
//! For a prime `p` greater than every key and a table of `m` slots, the
//! family is
//!
//! ```text
//! H = { h(k) = ((a*k + b) mod p) mod m  |  a in [1, p-1], b in [0, p-1] }
//! ```
//!
//! Picking `(a, b)` uniformly at random bounds the probability that two
//! distinct keys collide by `1/m`, whatever the key set is, as long as the
//! choice is made independently of the keys. The expected number of other
//! keys sharing a slot with any fixed key is therefore below `n/m`.

use crate::error::{TableError, TableResult};
use rand::Rng;

/// Largest prime that fits in a `u64` (2^64 - 59).
pub const MAX_PRIME: u64 = 18_446_744_073_709_551_557;

/// Test `n` for primality by trial division up to `floor(sqrt(n)) + 1`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    // the +1 bound would otherwise test n against itself for n in 2..=3
    let limit = (n.isqrt() + 1).min(n - 1);
    (2..=limit).all(|d| n % d != 0)
}

/// Return the smallest prime strictly greater than `max_key`.
///
/// Returns `None` if that prime does not fit in a `u64`.
pub fn prime_modulus(max_key: u64) -> Option<u64> {
    if max_key >= MAX_PRIME {
        return None;
    }
    (max_key + 1..=MAX_PRIME).find(|&n| is_prime(n))
}

/// Generator for members of the universal family.
///
/// Holds the prime modulus and target table size; hands out
/// [`UniversalFn`]s either for explicit parameters or chosen at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalHash {
    prime: u64,
    table_size: usize,
}

impl UniversalHash {
    /// Create a generator for keys in `0..=max_key` and `table_size` slots.
    pub fn new(max_key: u64, table_size: usize) -> TableResult<Self> {
        if table_size == 0 {
            return Err(TableError::ZeroTableSize);
        }
        let prime = prime_modulus(max_key).ok_or(TableError::ModulusOverflow { max_key })?;
        Ok(Self { prime, table_size })
    }

    /// The prime modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.prime
    }

    /// The table size `m`.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Build the function for parameters `(a, b)`.
    ///
    /// Parameters are not range checked. Values outside `a in [1, p-1]`,
    /// `b in [0, p-1]` still hash into `[0, m-1]` but lose the collision
    /// bound. Use [`try_function`](Self::try_function) to reject them.
    pub fn function(&self, a: u64, b: u64) -> UniversalFn {
        UniversalFn {
            a,
            b,
            prime: self.prime,
            table_size: self.table_size,
        }
    }

    /// Build the function for `(a, b)`, rejecting out of range parameters.
    pub fn try_function(&self, a: u64, b: u64) -> TableResult<UniversalFn> {
        let p = self.prime;
        if a == 0 || a >= p || b >= p {
            return Err(TableError::InvalidParameters { a, b, p });
        }
        Ok(self.function(a, b))
    }

    /// Pick a member of the family uniformly at random.
    ///
    /// Draws `a` from `[1, p-1]` and `b` from `[0, p-1]`.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> UniversalFn {
        let a = rng.random_range(1..self.prime);
        let b = rng.random_range(0..self.prime);
        self.function(a, b)
    }
}

/// One member of the family: `k -> ((a*k + b) mod p) mod m`.
///
/// Intermediate arithmetic is done in 128 bits so that `a*k + b` cannot
/// overflow for any `u64` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalFn {
    a: u64,
    b: u64,
    prime: u64,
    table_size: usize,
}

impl UniversalFn {
    /// Map `key` to a slot index in `[0, m-1]`.
    #[inline]
    pub fn hash(&self, key: u64) -> usize {
        let h = (self.a as u128 * key as u128 + self.b as u128) % self.prime as u128;
        (h % self.table_size as u128) as usize
    }

    /// Multiplier `a`.
    #[inline]
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Offset `b`.
    #[inline]
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Prime modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.prime
    }

    /// Table size `m`.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.table_size
    }
}
