use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

pub struct Helpers {}

impl Helpers {
    /// unique values of a field, in ascending order
    pub fn distinct_sorted<T, F>(items: &[T], field: F) -> Vec<String>
    where
        F: Fn(&T) -> &str,
    {
        items
            .iter()
            .map(|item| field(item).to_string())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// group items by key and add up the value of every item in the group
    pub fn sum_by_key<T, K, KF, VF>(items: &[T], key: KF, value: VF) -> HashMap<K, f64>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> f64,
    {
        let mut totals: HashMap<K, f64> = HashMap::new();
        for item in items {
            *totals.entry(key(item)).or_insert(0.0) += value(item);
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_sorted_removes_duplicates() {
        let names = ["b", "a", "c", "a", "b"];
        assert_eq!(Helpers::distinct_sorted(&names, |e| *e), vec!["a", "b", "c"]);
    }

    #[test]
    fn distinct_sorted_of_nothing_is_empty() {
        let names: [&str; 0] = [];
        assert!(Helpers::distinct_sorted(&names, |e| *e).is_empty());
    }

    #[test]
    fn sum_by_key_groups_values() {
        let items = [("x", 1.0), ("y", 2.0), ("x", 3.5)];
        let totals = Helpers::sum_by_key(&items, |e| e.0, |e| e.1);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["x"], 4.5);
        assert_eq!(totals["y"], 2.0);
    }
}
