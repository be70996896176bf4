use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each key produced by the iterator.
pub fn count_by<I>(keys: I) -> HashMap<I::Item, u64>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Rank counted keys: count descending, key ascending on ties, truncated
/// to `n`. Every top-N list in the stats engine goes through this one
/// comparator so rankings are identical across runs.
pub fn top_n<K: Ord>(counts: HashMap<K, u64>, n: usize) -> Vec<(K, u64)> {
    let mut entries: Vec<(K, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by() {
        let counts = count_by(["a", "b", "a", "c", "a", "b"].into_iter());
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["c"], 1);
    }

    #[test]
    fn test_top_n_orders_by_count_then_key() {
        let counts = count_by(["x", "y", "y", "z", "w", "w"].into_iter());
        let ranked = top_n(counts, 10);
        // w and y tie at 2 and sort by key; x and z tie at 1 and do too
        assert_eq!(ranked, vec![("w", 2), ("y", 2), ("x", 1), ("z", 1)]);
    }

    #[test]
    fn test_top_n_truncates() {
        let counts = count_by((0u32..25).map(|i| i / 5));
        let ranked = top_n(counts, 3);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_top_n_fewer_entries_than_n() {
        let counts = count_by(["only"].into_iter());
        assert_eq!(top_n(counts, 10), vec![("only", 1)]);
    }
}
