//! Four-tuple lexicographic tie-break score (spec §4.9).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_tiebreak_score.py`:
//! `kemeny`/`borda`/`signKemeny`/`signBorda` are all the same `ranking_cost`
//! evaluated under four different derived matrices, ordered lexicographically
//! in that field order.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::condorcet::matrix::CondorcetMatrix;
use crate::condorcet::rankings::Ranking;
use crate::condorcet::utils::ranking_cost;

/// A ranking's cost under four criteria, compared lexicographically in field
/// order: `kemeny`, `borda`, `sign_kemeny`, `sign_borda`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TieBreakScore {
    pub kemeny: f64,
    pub borda: f64,
    pub sign_kemeny: f64,
    pub sign_borda: f64,
}

impl TieBreakScore {
    /// Score `ranking` against the four derived forms of `matrix`.
    pub fn of<T: Clone + Eq + Hash>(ranking: &Ranking<T>, matrix: &CondorcetMatrix<T>) -> Self {
        let borda_matrix = matrix.borda();
        let sign_matrix = matrix.sign();
        let sign_borda_matrix = borda_matrix.sign();
        TieBreakScore {
            kemeny: ranking_cost(ranking, matrix),
            borda: ranking_cost(ranking, &borda_matrix),
            sign_kemeny: ranking_cost(ranking, &sign_matrix),
            sign_borda: ranking_cost(ranking, &sign_borda_matrix),
        }
    }
}

impl Eq for TieBreakScore {}

impl PartialOrd for TieBreakScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreakScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kemeny
            .total_cmp(&other.kemeny)
            .then_with(|| self.borda.total_cmp(&other.borda))
            .then_with(|| self.sign_kemeny.total_cmp(&other.sign_kemeny))
            .then_with(|| self.sign_borda.total_cmp(&other.sign_borda))
    }
}
