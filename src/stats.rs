//! Chain-length distribution summary.

use std::collections::BTreeMap;
use std::fmt;

/// Summary of a table's chain lengths.
///
/// With `n` keys in `m` slots and a function drawn from the universal
/// family, `mean` is exactly `n/m` and chains should cluster around it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainStats {
    /// Number of slots.
    pub slots: usize,
    /// Total entries across all chains.
    pub entries: usize,
    /// Slots with no entries.
    pub empty: usize,
    /// Shortest chain.
    pub min: usize,
    /// Longest chain.
    pub max: usize,
    /// Mean chain length.
    pub mean: f64,
    /// Population variance of chain length.
    pub variance: f64,
    /// Chain length -> number of slots with that length.
    pub histogram: BTreeMap<usize, usize>,
}

impl ChainStats {
    /// Summarise a sequence of per-slot chain lengths.
    pub fn from_lengths(lengths: &[usize]) -> Self {
        if lengths.is_empty() {
            return Self::default();
        }

        let slots = lengths.len();
        let entries: usize = lengths.iter().sum();
        let mean = entries as f64 / slots as f64;
        let variance = lengths
            .iter()
            .map(|&len| {
                let d = len as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / slots as f64;

        let mut histogram = BTreeMap::new();
        for &len in lengths {
            *histogram.entry(len).or_insert(0) += 1;
        }

        Self {
            slots,
            entries,
            empty: histogram.get(&0).copied().unwrap_or(0),
            min: lengths.iter().copied().min().unwrap_or(0),
            max: lengths.iter().copied().max().unwrap_or(0),
            mean,
            variance,
            histogram,
        }
    }

    /// Standard deviation of chain length.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl fmt::Display for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slots={} entries={} empty={} min={} max={} mean={:.3} stddev={:.3}",
            self.slots,
            self.entries,
            self.empty,
            self.min,
            self.max,
            self.mean,
            self.std_dev()
        )
    }
}
