//! Collection helpers

use std::collections::HashMap;
use std::hash::Hash;

/// Group items by a derived key.
///
/// The relative order of the input is preserved within each group; the
/// iteration order of the groups themselves is unspecified.
pub fn group_by<I, T, K, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}
