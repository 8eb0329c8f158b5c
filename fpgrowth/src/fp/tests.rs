use super::*;
use std::collections::HashMap;

fn transactions(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|item| item.to_string()).collect())
        .collect()
}

fn key(labels: &str) -> PatternKey {
    PatternKey::new(labels.split_whitespace())
}

fn patterns(entries: &[(&str, usize)]) -> Patterns {
    entries.iter().map(|&(k, count)| (key(k), count)).collect()
}

#[test]
fn test_pattern_key() {
    let k = PatternKey::new(["c", "a", "b"]);
    assert_eq!(k.items(), &["a", "b", "c"]); // sorted!
    assert_eq!(k.to_string(), "a b c");

    let with = PatternKey::new(["a", "c"]).with("b");
    assert_eq!(with, k);
    assert!(PatternKey::empty().is_empty());
    assert_eq!(PatternKey::empty().to_string(), "");
}

#[test]
fn test_itemset_storage() {
    let mut storage = ItemsetStorage::new();

    storage.add_itemset(&key("milk bread"), 4);
    storage.add_itemset(&key("eggs"), 2);

    assert_eq!(storage.get_itemset(0), &["bread", "milk"]);
    assert_eq!(storage.get_itemset(1), &["eggs"]);
    assert_eq!(storage.support(0), 4);
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_frequent_levels() {
    let mined = patterns(&[("", 5), ("b", 5), ("a", 3), ("a b", 3), ("b c", 4)]);
    let levels = frequent_levels(&mined);

    // Empty key is skipped
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[1].itemset_size, 2);

    let pairs: Vec<_> = levels[1].iter().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, &["a", "b"]);
    assert_eq!(pairs[0].1, 3);
    assert_eq!(pairs[1].0, &["b", "c"]);
    assert_eq!(pairs[1].1, 4);
}

#[test]
fn test_frequency_table() {
    let txs = transactions(&[&["a", "b"], &["b", "c"], &["b"]]);
    let table = build_frequency_table(txs.iter().map(|t| (t.as_slice(), 1)), 2);

    let expected: HashMap<String, usize> = [("b".to_string(), 3)].into_iter().collect();
    assert_eq!(table, expected);

    // Weights scale every occurrence
    let table = build_frequency_table(txs.iter().map(|t| (t.as_slice(), 2)), 2);
    assert_eq!(table.len(), 3);
    assert_eq!(table["b"], 6);

    // Zero threshold keeps nothing
    let table = build_frequency_table(txs.iter().map(|t| (t.as_slice(), 1)), 0);
    assert!(table.is_empty());
}

#[test]
fn test_header_table() {
    let txs = transactions(&[&["a", "b"], &["a"]]);
    let table = build_frequency_table(txs.iter().map(|t| (t.as_slice(), 1)), 1);
    let headers = build_header_table(&table);

    assert_eq!(headers.len(), 2);
    assert!(headers.values().all(|entry| entry.head.is_none()));
}

#[test]
fn test_node_operations() {
    let mut tree = FPTree::with_root(None, 0, FrequencyTable::new(), HashMap::new());

    assert_eq!(tree.find_child(tree.root_index, "a"), None);
    let a = tree.add_child(tree.root_index, "a", 1);
    let b = tree.add_child(tree.root_index, "b", 1);

    assert_eq!(tree.find_child(tree.root_index, "a"), Some(a));
    assert_eq!(tree.find_child(tree.root_index, "b"), Some(b));
    assert_eq!(tree.nodes[a].parent, Some(tree.root_index));
    assert_eq!(tree.nodes[tree.root_index].children, vec![a, b]); // creation order
}

#[test]
fn test_fp_tree_insert() {
    // Frequencies: a=2, b=2, c=1, d=1
    let txs = transactions(&[&["c", "b", "a"], &["a", "b", "d"]]);
    let tree = FPTree::new(&txs, 1);

    // root → a → b → {c, d}
    let a = tree.find_child(tree.root_index, "a").unwrap();
    let b = tree.find_child(a, "b").unwrap();
    assert_eq!(tree.nodes[a].count, 2);
    assert_eq!(tree.nodes[b].count, 2);
    assert_eq!(tree.nodes[b].children.len(), 2);
    assert_eq!(tree.node_count(), 5);

    // Every frequent label has a chain
    for label in ["a", "b", "c", "d"] {
        assert_eq!(tree.node_chain(label).count(), 1);
    }
    assert_eq!(tree.root().count, 2);
    assert_eq!(tree.root_item(), None);
}

#[test]
fn test_header_chain_order() {
    // Frequencies: x=3, a=2, b=2, sorted rows: [x a], [x b], [x a b]
    let txs = transactions(&[&["a", "x"], &["b", "x"], &["a", "b", "x"]]);
    let tree = FPTree::new(&txs, 1);

    let x = tree.find_child(tree.root_index, "x").unwrap();
    let a = tree.find_child(x, "a").unwrap();
    let b_under_x = tree.find_child(x, "b").unwrap();
    let b_under_a = tree.find_child(a, "b").unwrap();

    // Chain visits b nodes in creation order
    let chain: Vec<_> = tree.node_chain("b").collect();
    assert_eq!(chain, vec![b_under_x, b_under_a]);
    assert_eq!(tree.item_support("b"), 2);
    assert_eq!(tree.header_table["b"].tail, Some(b_under_a));

    let paths = tree.get_prefix_paths("b");
    assert_eq!(paths, vec![
        (vec!["x".to_string()], 1),
        (vec!["a".to_string(), "x".to_string()], 1), // nearest ancestor first
    ]);

    // Nodes right below the root have an empty base
    assert_eq!(tree.get_prefix_paths("x"), vec![(Vec::new(), 3)]);
}

#[test]
fn test_tie_break_by_label() {
    // x and y are equally frequent; both rows become [x y]
    let txs = transactions(&[&["y", "x"], &["x", "y"]]);
    let tree = FPTree::new(&txs, 1);

    assert_eq!(ordered_items(&tree.frequent), vec!["x", "y"]);
    assert!(tree.has_single_path(tree.root_index));
    assert_eq!(
        tree.single_path(tree.root_index),
        vec![("x".to_string(), 2), ("y".to_string(), 2)]
    );
}

#[test]
fn test_fp_tree_single_path() {
    let single = FPTree::new(&transactions(&[&["a", "b", "c"], &["a", "b"]]), 1);
    assert!(single.has_single_path(single.root_index));

    let branching = FPTree::new(&transactions(&[&["a", "b"], &["a", "c"]]), 1);
    assert!(!branching.has_single_path(branching.root_index)); // has branching!

    // The branch sits below a, so the subtree under b is still a single path
    let a = branching.find_child(branching.root_index, "a").unwrap();
    let b = branching.find_child(a, "b").unwrap();
    assert!(branching.has_single_path(b));

    // Root without children
    let empty = FPTree::new(&transactions(&[]), 1);
    assert!(empty.has_single_path(empty.root_index));
}

#[test]
fn test_conditional_tree() {
    let txs = transactions(&[&["a", "b"], &["b", "c", "d"], &["a", "b", "c"], &["a", "b", "c", "d"], &["b", "c"]]);
    let tree = FPTree::new(&txs, 3);

    let cond = tree.conditional_tree("a", 3);
    assert_eq!(cond.root_item(), Some("a"));
    assert_eq!(cond.root().count, 3);
    // Base of a: [b] x1, [c b] x2, so only b survives
    assert_eq!(cond.frequent.len(), 1);
    assert_eq!(cond.frequent["b"], 3);
}

#[test]
fn test_example_scenario() {
    let txs = transactions(&[&["a", "b"], &["b", "c", "d"], &["a", "b", "c"], &["a", "b", "c", "d"], &["b", "c"]]);
    let tree = FPTree::new(&txs, 3);

    // d falls below the threshold
    let expected_frequent: HashMap<String, usize> =
        [("a", 3), ("b", 5), ("c", 4)].into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    assert_eq!(tree.frequent, expected_frequent);
    assert!(!tree.has_single_path(tree.root_index));

    let result = tree.mine_patterns(3);
    assert_eq!(
        result,
        patterns(&[("", 5), ("a", 3), ("b", 5), ("c", 4), ("a b", 3), ("b c", 4)])
    );
    assert!(!result.contains_key(&key("a c")));
    assert!(!result.contains_key(&key("a b c")));
}

#[test]
fn test_generate_pattern_list() {
    // Chain a(3) → b(2) → c(1)
    let txs = transactions(&[&["a", "b", "c"], &["a", "b"], &["a"]]);
    let tree = FPTree::new(&txs, 1);
    assert!(tree.has_single_path(tree.root_index));

    let expected = patterns(&[
        ("", 3),
        ("a", 3),
        ("b", 2),
        ("c", 1),
        ("a b", 2),
        ("a c", 1),
        ("b c", 1),
        ("a b c", 1),
    ]);
    assert_eq!(tree.generate_pattern_list(), expected);
}

#[test]
fn test_single_path_equivalence() {
    let txs = transactions(&[&["a", "b", "c"], &["a", "b"], &["a"]]);
    let tree = FPTree::new(&txs, 1);

    assert_eq!(tree.generate_pattern_list(), tree.mine_recursive(1));

    // Built and mined at threshold 2: c drops out and both cases agree
    // on what remains.
    let tree = FPTree::new(&txs, 2);
    assert!(tree.has_single_path(tree.root_index));

    let recursive = tree.mine_recursive(2);
    assert_eq!(
        recursive,
        patterns(&[("", 3), ("a", 3), ("b", 2), ("a b", 2)])
    );
    assert_eq!(tree.generate_pattern_list(), recursive);
}

#[test]
fn test_conditional_suffix_patterns() {
    let txs = transactions(&[&["a", "b"], &["b", "c", "d"], &["a", "b", "c"], &["a", "b", "c", "d"], &["b", "c"]]);
    let tree = FPTree::new(&txs, 3);

    // Conditional tree of a: root(a, 3) → b(3)
    let cond = tree.conditional_tree("a", 3);
    assert_eq!(cond.mine_patterns(3), patterns(&[("a", 3), ("a b", 3)]));

    // Keys pick up the root label; the top-level tree leaves them alone
    let zipped = cond.zip_patterns(patterns(&[("b", 3)]));
    assert_eq!(zipped, patterns(&[("a b", 3)]));
    assert_eq!(tree.zip_patterns(patterns(&[("b", 3)])), patterns(&[("b", 3)]));
}

#[test]
fn test_empty_and_degenerate_inputs() {
    let empty = transactions(&[]);
    assert_eq!(fp_growth(&empty, 2), patterns(&[("", 0)]));

    let txs = transactions(&[&["a", "b"], &["a"]]);
    // Above every frequency
    assert_eq!(fp_growth(&txs, 3), patterns(&[("", 2)]));
    // Zero threshold keeps nothing either
    assert_eq!(fp_growth(&txs, 0), patterns(&[("", 2)]));
}

#[test]
fn test_duplicate_labels_pass_through() {
    // a is counted twice within the one transaction
    let txs = transactions(&[&["a", "a", "b"]]);
    let tree = FPTree::new(&txs, 1);
    assert_eq!(tree.frequent["a"], 2);
    assert_eq!(tree.node_chain("a").count(), 2);

    let result = tree.mine_patterns(1);
    assert_eq!(result[&key("a")], 2);
    assert_eq!(result[&key("a b")], 1);
}

#[test]
fn test_combination_generation() {
    let mut seen = Vec::new();
    combinations::generate_combinations(&[1, 2, 3], 2, &mut |c: &[i32]| seen.push(c.to_vec()));
    assert_eq!(seen, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);

    let mut result = Patterns::new();
    let path = [("p", 10), ("q", 8), ("r", 5), ("s", 4)];
    combinations::add_subset_patterns(&path, Some("z"), &mut result);

    // 2^4 - 1 subsets, each joined with the suffix
    assert_eq!(result.len(), 15);
    assert_eq!(result[&key("p q z")], 8);
    assert_eq!(result[&key("p q r s z")], 4);
    assert_eq!(result[&key("p z")], 10);
}

#[test]
fn test_fp_growth_with_support() {
    let txs = transactions(&[&["a", "b"], &["b", "c", "d"], &["a", "b", "c"], &["a", "b", "c", "d"], &["b", "c"]]);

    // 0.6 * 5 = 3
    let relative = fp_growth_with_support(&txs, Support::Relative(0.6)).unwrap();
    assert_eq!(relative, fp_growth(&txs, 3));
    assert!(fp_growth_with_support(&txs, Support::Relative(2.0)).is_err());
}
