//! Error types for hashtable construction.

/// Errors that can occur while constructing a table or a hash function.
///
/// Lookups and insertions never fail: a miss is `None` and buckets grow
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The table must have at least one slot.
    #[error("table size must be positive")]
    ZeroTableSize,

    /// No prime strictly greater than the key bound fits in a `u64`.
    #[error("no prime modulus above {max_key} fits in 64 bits")]
    ModulusOverflow {
        /// The requested key bound.
        max_key: u64,
    },

    /// Hash parameters outside `a in [1, p-1]`, `b in [0, p-1]`.
    #[error("hash parameters out of range (a={a}, b={b}, p={p})")]
    InvalidParameters {
        /// Multiplier.
        a: u64,
        /// Offset.
        b: u64,
        /// Prime modulus.
        p: u64,
    },
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_all_variants() {
        assert_eq!(
            format!("{}", TableError::ZeroTableSize),
            "table size must be positive"
        );
        assert_eq!(
            format!("{}", TableError::ModulusOverflow { max_key: u64::MAX }),
            "no prime modulus above 18446744073709551615 fits in 64 bits"
        );
        assert_eq!(
            format!("{}", TableError::InvalidParameters { a: 0, b: 3, p: 7 }),
            "hash parameters out of range (a=0, b=3, p=7)"
        );
    }

    #[test]
    fn test_error_is_error_trait() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<TableError>();
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TableError::ZeroTableSize, TableError::ZeroTableSize);
        assert_ne!(
            TableError::ZeroTableSize,
            TableError::ModulusOverflow { max_key: 0 }
        );
    }

    #[test]
    fn test_table_result_err() {
        let result: TableResult<i32> = Err(TableError::ZeroTableSize);
        assert!(matches!(result, Err(TableError::ZeroTableSize)));
    }
}
