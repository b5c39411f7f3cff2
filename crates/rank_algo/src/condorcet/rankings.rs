//! `Ranking<T>` and `CondorcetRankings<T>` (spec §3 data model, §4.8).

use std::hash::Hash;

/// A total ordering of a set of items, read top-rank-first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ranking<T>(Vec<T>);

impl<T> Ranking<T> {
    pub fn new(order: Vec<T>) -> Self {
        Ranking(order)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

/// Result of [`crate::condorcet::optimum::CondorcetOptimum::rankings`]: the
/// shared optimal cost, every ranking achieving it (subject to truncation),
/// and whether enumeration stopped early.
#[derive(Clone, Debug, PartialEq)]
pub struct CondorcetRankings<T: Clone + Eq + Hash> {
    pub cost: f64,
    pub rankings: Vec<Ranking<T>>,
    pub is_truncated: bool,
}
