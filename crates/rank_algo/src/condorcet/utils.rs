//! Ranking/split cost evaluation against an arbitrary matrix (spec §8.6/§8.7).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_utils.py`:
//! these are generic over *which* matrix is passed (raw `M`, `borda(M)`, or
//! `sign(M)`), which is exactly how [`crate::condorcet::tiebreak_score`]
//! reuses them for all four tie-break criteria.

use std::hash::Hash;

use crate::condorcet::matrix::CondorcetMatrix;
use crate::condorcet::rankings::Ranking;
use crate::condorcet::splits::Split;

/// Total violation cost of `ranking` under `matrix`: the sum, over every
/// ordered pair where the first item outranks the second, of `max(0, -M[i,j])`.
pub fn ranking_cost<T: Clone + Eq + Hash>(ranking: &Ranking<T>, matrix: &CondorcetMatrix<T>) -> f64 {
    let items = matrix.items();
    let order = ranking.as_slice();
    let mut cost = 0.0f64;
    for (pos, ahead) in order.iter().enumerate() {
        let ahead_idx = items.index_of(ahead).expect("ranking item in matrix's item set");
        for behind in &order[pos + 1..] {
            let behind_idx = items.index_of(behind).expect("ranking item in matrix's item set");
            cost += (-matrix.get(ahead_idx, behind_idx)).max(0) as f64;
        }
    }
    cost
}

/// Total violation cost of placing every item in `split.head` ahead of every
/// item in `split.tail`, under `matrix`.
pub fn split_cost<T: Clone + Eq + Hash>(split: &Split<T>, matrix: &CondorcetMatrix<T>) -> f64 {
    let items = matrix.items();
    let mut cost = 0.0f64;
    for ahead in &split.head {
        let ahead_idx = items.index_of(ahead).expect("split item in matrix's item set");
        for behind in &split.tail {
            let behind_idx = items.index_of(behind).expect("split item in matrix's item set");
            cost += (-matrix.get(ahead_idx, behind_idx)).max(0) as f64;
        }
    }
    cost
}
