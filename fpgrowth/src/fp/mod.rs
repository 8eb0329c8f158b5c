//! FP-Growth over string-labelled transactions.
//!
//! Transactions are compressed into an [`FPTree`]: each transaction's
//! frequent items, sorted by descending frequency, become a root-to-node path,
//! and nodes sharing a label are chained from the tree's header table.
//! Mining walks those chains to build conditional trees per item and recurses
//! until a tree collapses to a single path, whose itemsets are enumerated
//! directly.
//!
//! Recursion depth is bounded by the number of distinct frequent labels
//! (nested conditional trees); tree height is bounded by the longest
//! transaction. Neither insertion nor ancestor walks recurse.

pub mod builder;
pub mod combinations;
pub mod mining;
pub mod storage;
pub mod tree;

#[cfg(test)]
mod tests;

use log::debug;

use crate::error::Result;
use crate::support::Support;

pub use builder::{build_frequency_table, build_header_table, ordered_items};
pub use storage::{FrequentLevel, ItemsetStorage, PatternKey, Patterns, frequent_levels};
pub use tree::{FPNode, FPTree, FrequencyTable, HeaderEntry};

/// Mine every itemset occurring in at least `threshold` transactions.
///
/// The result also holds the empty key mapped to the transaction count.
pub fn fp_growth<'a, T, S>(transactions: &'a [T], threshold: usize) -> Patterns
where
    T: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    let fp_tree = FPTree::new(transactions, threshold);
    let patterns = fp_tree.mine_patterns(threshold);
    debug!(
        "mined {} patterns at threshold {}",
        patterns.len(),
        threshold
    );
    patterns
}

/// [`fp_growth`] with the threshold given as absolute or relative support.
pub fn fp_growth_with_support<'a, T, S>(transactions: &'a [T], support: Support) -> Result<Patterns>
where
    T: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    let threshold = support.min_count(transactions.len())?;
    Ok(fp_growth(transactions, threshold))
}
