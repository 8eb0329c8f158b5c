use super::tree::{FPTree, FrequencyTable, HeaderEntry};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count every label occurrence (repeats within a transaction included,
/// each scaled by its transaction's weight) and keep those reaching
/// `threshold`. A zero threshold keeps nothing.
pub fn build_frequency_table<'a, S, I>(transactions: I, threshold: usize) -> FrequencyTable
where
    S: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a [S], usize)>,
{
    if threshold == 0 {
        return FrequencyTable::new();
    }

    let mut item_counts: HashMap<String, usize> = HashMap::new();
    for (transaction, weight) in transactions {
        for item in transaction {
            let item = item.as_ref();
            match item_counts.get_mut(item) {
                Some(count) => *count += weight,
                None => {
                    item_counts.insert(item.to_string(), weight);
                }
            }
        }
    }

    item_counts.retain(|_, count| *count >= threshold);
    item_counts
}

/// One empty chain per frequent label.
pub fn build_header_table(frequent: &FrequencyTable) -> HashMap<String, HeaderEntry> {
    frequent
        .keys()
        .map(|item| (item.clone(), HeaderEntry::default()))
        .collect()
}

/// Insertion order of two frequent labels: higher frequency first, equal
/// frequencies by ascending label.
pub fn compare_items(frequent: &FrequencyTable, a: &str, b: &str) -> Ordering {
    let count_a = frequent.get(a).copied().unwrap_or(0);
    let count_b = frequent.get(b).copied().unwrap_or(0);
    count_b.cmp(&count_a).then_with(|| a.cmp(b))
}

/// All frequent labels in insertion order.
pub fn ordered_items(frequent: &FrequencyTable) -> Vec<&str> {
    let mut items: Vec<&str> = frequent.keys().map(String::as_str).collect();
    items.sort_unstable_by(|a, b| compare_items(frequent, a, b));
    items
}

/// Keep the frequent labels of `transaction`, sorted in insertion order.
/// Repeated labels stay adjacent.
pub fn sort_transaction<'a, S: AsRef<str>>(
    transaction: &'a [S],
    frequent: &FrequencyTable,
) -> Vec<&'a str> {
    let mut items: Vec<&str> = transaction
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| frequent.contains_key(*item))
        .collect();
    items.sort_by(|a, b| compare_items(frequent, a, b));
    items
}

impl FPTree {
    /// Build a tree from weighted transactions.
    ///
    /// `root_item` is the label a conditional tree is conditioned on and
    /// `root_count` its support in the parent tree; both are carried into
    /// pattern generation only.
    pub fn build<'a, S, I>(
        transactions: I,
        threshold: usize,
        root_item: Option<String>,
        root_count: usize,
    ) -> Self
    where
        S: AsRef<str> + 'a,
        I: IntoIterator<Item = (&'a [S], usize)> + Clone,
    {
        let frequent = build_frequency_table(transactions.clone(), threshold);
        let header_table = build_header_table(&frequent);
        let mut tree = FPTree::with_root(root_item, root_count, frequent, header_table);

        for (transaction, weight) in transactions {
            let sorted_items = sort_transaction(transaction, &tree.frequent);
            if !sorted_items.is_empty() {
                tree.insert_path(&sorted_items, weight);
            }
        }

        tree
    }

    /// Top-level tree over plain transactions. The root carries no label and
    /// counts every transaction.
    pub fn new<'a, T, S>(transactions: &'a [T], threshold: usize) -> Self
    where
        T: AsRef<[S]>,
        S: AsRef<str> + 'a,
    {
        let tree = Self::build(
            transactions.iter().map(|t| (t.as_ref(), 1)),
            threshold,
            None,
            transactions.len(),
        );
        debug!(
            "built FP-tree from {} transactions: {} frequent items, {} nodes",
            transactions.len(),
            tree.frequent.len(),
            tree.node_count()
        );
        tree
    }

    /// Conditional tree for `item`, built from its prefix paths.
    pub fn conditional_tree(&self, item: &str, threshold: usize) -> Self {
        let prefix_paths = self.get_prefix_paths(item);
        let root_count = self.frequent.get(item).copied().unwrap_or(0);

        FPTree::build(
            prefix_paths
                .iter()
                .map(|(path, count)| (path.as_slice(), *count)),
            threshold,
            Some(item.to_string()),
            root_count,
        )
    }
}
