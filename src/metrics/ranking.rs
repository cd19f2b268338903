//! Grouped counts and top-N selection
//!
//! Groups are collected in a `BTreeMap`, so they come out in name order;
//! a stable sort on the metric then leaves tied names in ascending order.

use std::collections::BTreeMap;

/// A named value in a ranking
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub name: String,
    pub value: T,
}

impl<T> Ranked<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Sum `value` per key
pub fn tally<I, K>(items: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = (K, u64)>,
    K: AsRef<str>,
{
    let mut totals = BTreeMap::new();
    for (key, value) in items {
        *totals.entry(key.as_ref().to_string()).or_insert(0) += value;
    }
    totals
}

/// Count occurrences per key
pub fn count<I, K>(keys: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    tally(keys.into_iter().map(|k| (k, 1)))
}

/// Highest value first, ties by name
pub fn rank_desc(totals: BTreeMap<String, u64>) -> Vec<Ranked<u64>> {
    let mut ranked: Vec<Ranked<u64>> = totals
        .into_iter()
        .map(|(name, value)| Ranked { name, value })
        .collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}

/// The first `n` entries of a descending ranking
pub fn top_n(totals: BTreeMap<String, u64>, n: usize) -> Vec<Ranked<u64>> {
    let mut ranked = rank_desc(totals);
    ranked.truncate(n);
    ranked
}

/// The single leader, if any group exists
pub fn leader(totals: BTreeMap<String, u64>) -> Option<Ranked<u64>> {
    rank_desc(totals).into_iter().next()
}

/// Keep the map's key order (used for season-ordered series)
pub fn in_key_order(totals: BTreeMap<String, u64>) -> Vec<Ranked<u64>> {
    totals
        .into_iter()
        .map(|(name, value)| Ranked { name, value })
        .collect()
}
