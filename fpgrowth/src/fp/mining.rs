use super::builder::ordered_items;
use super::combinations::add_subset_patterns;
use super::storage::{PatternKey, Patterns};
use super::tree::FPTree;
use log::trace;

impl FPTree {
    /// All frequent itemsets of this tree, each joined with the root label.
    ///
    /// A tree without branching is enumerated directly; otherwise every
    /// frequent item is mined through its conditional tree.
    pub fn mine_patterns(&self, threshold: usize) -> Patterns {
        if self.has_single_path(self.root_index) {
            self.generate_pattern_list()
        } else {
            self.mine_recursive(threshold)
        }
    }

    /// Base case: the root's own key plus every subset of the frequent items,
    /// counted by the least frequent member.
    pub fn generate_pattern_list(&self) -> Patterns {
        let mut patterns = Patterns::new();
        let suffix = self.root_item();

        patterns.insert(self.suffix_key(), self.root().count);

        let path: Vec<(&str, usize)> = ordered_items(&self.frequent)
            .into_iter()
            .map(|item| (item, self.frequent[item]))
            .collect();
        add_subset_patterns(&path, suffix, &mut patterns);

        patterns
    }

    /// Recursive case: conditional mining of every item, re-keyed with the
    /// root label, plus the root's own key.
    pub fn mine_recursive(&self, threshold: usize) -> Patterns {
        let mut patterns = self.zip_patterns(self.mine_conditional_subtrees(threshold));
        patterns.insert(self.suffix_key(), self.root().count);
        patterns
    }

    /// Mine each frequent item's conditional tree, least frequent first, and
    /// sum the results per key.
    pub fn mine_conditional_subtrees(&self, threshold: usize) -> Patterns {
        let mut patterns = Patterns::new();

        for item in ordered_items(&self.frequent).into_iter().rev() {
            let subtree = self.conditional_tree(item, threshold);
            trace!(
                "conditional tree for '{}' under {:?}: {} frequent items, {} nodes",
                item,
                self.root_item(),
                subtree.frequent.len(),
                subtree.node_count()
            );

            for (key, count) in subtree.mine_patterns(threshold) {
                *patterns.entry(key).or_insert(0) += count;
            }
        }

        patterns
    }

    /// Add the root label to every key. The top-level tree has no root
    /// label and returns `patterns` untouched.
    pub fn zip_patterns(&self, patterns: Patterns) -> Patterns {
        match self.root_item() {
            Some(suffix) => patterns
                .into_iter()
                .map(|(key, count)| (key.with(suffix), count))
                .collect(),
            None => patterns,
        }
    }

    fn suffix_key(&self) -> PatternKey {
        self.root_item().into_iter().collect()
    }
}
