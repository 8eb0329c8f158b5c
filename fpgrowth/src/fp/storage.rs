use std::collections::HashMap;
use std::fmt;

/// Canonical key of a mined itemset: its labels in sorted order.
///
/// Only used for comparison and merging; the order carries no meaning.
/// Repeated labels are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(Vec<String>);

/// Mined itemsets and their support counts.
pub type Patterns = HashMap<PatternKey, usize>;

impl PatternKey {
    /// The key with no labels; reported for the top-level tree only.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        items.sort_unstable();
        Self(items)
    }

    /// Copy of this key with `label` added, re-sorted.
    pub fn with(&self, label: &str) -> Self {
        let mut items = self.0.clone();
        let pos = items.partition_point(|item| item.as_str() <= label);
        items.insert(pos, label.to_string());
        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for PatternKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Flat storage for itemsets of one size: all labels in one vector,
/// addressed through `(start, len)` offsets.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<String>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All mined itemsets sharing one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset(&mut self, key: &PatternKey, support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(key.items());
        self.offsets.push((start, key.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[String] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, key: &PatternKey, support: usize) -> usize {
        debug_assert_eq!(key.len(), self.itemset_size);
        self.storage.add_itemset(key, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[String] {
        self.storage.get_itemset(idx)
    }

    /// Itemsets with their supports, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.storage.support(idx)))
    }
}

/// Group patterns by itemset size, skipping the empty key.
///
/// Level `i` of the result holds the itemsets of size `i + 1`; within a level
/// itemsets are ordered by key so the grouping is reproducible.
pub fn frequent_levels(patterns: &Patterns) -> Vec<FrequentLevel> {
    let mut sorted: Vec<(&PatternKey, usize)> = patterns
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, &support)| (key, support))
        .collect();
    sorted.sort_unstable_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut levels: Vec<FrequentLevel> = Vec::new();
    for (key, support) in sorted {
        while levels.len() < key.len() {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        levels[key.len() - 1].add_itemset(key, support);
    }
    levels
}
