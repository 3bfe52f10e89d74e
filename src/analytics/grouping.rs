use std::collections::HashMap;
use std::hash::Hash;

use crate::models::Transaction;

/// Insertion-ordered group-and-summarize over the accepted set.
///
/// Every aggregation in this crate is a key extractor plus a fold over one
/// grouping primitive, so the engine and the report tables can never
/// disagree on grouping semantics. Groups come back in first-seen order,
/// which the callers' stable sorts rely on for tie-breaking.
pub fn group_by<K, S, KF, FF>(transactions: &[Transaction], key_of: KF, mut fold: FF) -> Vec<(K, S)>
where
    K: Eq + Hash + Clone,
    S: Default,
    KF: Fn(&Transaction) -> K,
    FF: FnMut(&mut S, &Transaction),
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, S)> = Vec::new();

    for transaction in transactions {
        let key = key_of(transaction);

        let index = match slots.get(&key) {
            Some(&index) => index,
            None => {
                let index = groups.len();
                slots.insert(key.clone(), index);
                groups.push((key, S::default()));
                index
            }
        };

        fold(&mut groups[index].1, transaction);
    }

    groups
}
