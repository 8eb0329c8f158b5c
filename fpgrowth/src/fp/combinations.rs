use super::storage::{PatternKey, Patterns};

/// Record every non-empty subset of `path` as a pattern.
///
/// Each subset is keyed together with `suffix` and counted with the smallest
/// support among its members. All `2^n - 1` subsets are produced, so `path`
/// is expected to be short.
pub fn add_subset_patterns(path: &[(&str, usize)], suffix: Option<&str>, result: &mut Patterns) {
    for k in 1..=path.len() {
        let mut callback = |combination: &[(&str, usize)]| {
            let support = combination
                .iter()
                .map(|&(_, support)| support)
                .min()
                .unwrap_or(0);
            let key: PatternKey = combination
                .iter()
                .map(|&(item, _)| item.to_string())
                .chain(suffix.map(str::to_string))
                .collect();
            result.insert(key, support);
        };
        generate_combinations(path, k, &mut callback);
    }
}

/// Call `callback` once for each `k`-element combination of `items`, in
/// lexicographic order of positions.
pub fn generate_combinations<T, F>(items: &[T], k: usize, callback: &mut F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, callback);
}

fn generate_combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Copy,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once too few items remain to fill the combination.
    let remaining = k - current.len();
    for i in start..=items.len() - remaining {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
