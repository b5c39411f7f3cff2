//! `Split<T>` and `CondorcetSplits<T>` (spec §3 data model, §4.8).

use std::hash::Hash;

use indexmap::IndexSet;

/// An ordered 2-partition of the item set: disjoint `head`/`tail`, union is
/// the whole item set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split<T: Clone + Eq + Hash> {
    pub head: IndexSet<T>,
    pub tail: IndexSet<T>,
}

/// Result of [`crate::condorcet::optimum::CondorcetOptimum::splits`]: the
/// shared optimal `splitCost`, and every mask of the requested size achieving
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct CondorcetSplits<T: Clone + Eq + Hash> {
    pub cost: f64,
    pub splits: Vec<Split<T>>,
}
