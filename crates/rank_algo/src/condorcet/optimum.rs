//! Condorcet optimum enumeration: optimal rankings and optimal splits (spec §4.8).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_optimum.py`:
//! both `rankings` and `splits` read off the [`SubsetCosts`] DP table built in
//! [`crate::condorcet::subset_costs`]. Per spec §9's recursion note, the
//! ranking-enumeration DFS runs here with an explicit work stack rather than
//! recursing to depth n.

use std::hash::Hash;

use indexmap::IndexSet;
use rank_core::bitmask::iter_bits;

use crate::condorcet::matrix::CondorcetMatrix;
use crate::condorcet::rankings::{CondorcetRankings, Ranking};
use crate::condorcet::splits::{CondorcetSplits, Split};
use crate::condorcet::subset_costs::SubsetCosts;
use crate::items::Items;

const ATOL: f64 = 1e-8;
const RTOL: f64 = 1e-5;

/// Tolerant equality per spec §4.8: `|a-b| <= atol + rtol * max(|a|,|b|)`.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * a.abs().max(b.abs())
}

/// Enumerator of optimal total orderings and optimal head/tail splits over a
/// [`SubsetCosts`] table.
#[derive(Clone, Debug)]
pub struct CondorcetOptimum<T: Clone + Eq + Hash> {
    subset_costs: SubsetCosts<T>,
}

impl<T: Clone + Eq + Hash> CondorcetOptimum<T> {
    pub fn new(subset_costs: SubsetCosts<T>) -> Self {
        CondorcetOptimum { subset_costs }
    }

    pub fn of(matrix: &CondorcetMatrix<T>) -> Self {
        Self::new(SubsetCosts::of(matrix))
    }

    pub fn subset_costs(&self) -> &SubsetCosts<T> {
        &self.subset_costs
    }

    /// All total orderings achieving `optCost[full]`.
    ///
    /// If `max_num` is supplied, enumeration stops after `max_num + 1`
    /// rankings are found; the result is truncated to `max_num` and
    /// `is_truncated` is set.
    pub fn rankings(&self, max_num: Option<usize>) -> CondorcetRankings<T> {
        let costs = &self.subset_costs;
        let full = costs.full_mask();
        let cost = costs.opt_cost(full);
        let items = costs.items();

        let mut results: Vec<Vec<usize>> = Vec::new();
        let mut stack: Vec<(u64, Vec<usize>)> = vec![(full, Vec::new())];
        let mut is_truncated = false;

        'outer: while let Some((mask, path)) = stack.pop() {
            if mask == 0 {
                results.push(path);
                if let Some(m) = max_num {
                    if results.len() > m {
                        is_truncated = true;
                        break 'outer;
                    }
                }
                continue;
            }

            let opt = costs.opt_cost(mask);
            for i in iter_bits(mask) {
                let i = i as usize;
                let prev_mask = mask ^ (1u64 << i);
                let candidate = costs.opt_cost(prev_mask) + costs.incr(i, prev_mask);
                if is_close(opt, candidate) {
                    let mut new_path = path.clone();
                    new_path.push(i);
                    stack.push((prev_mask, new_path));
                }
            }
        }

        if let Some(m) = max_num {
            if results.len() > m {
                results.truncate(m);
                is_truncated = true;
            }
        }

        // Each path was discovered outermost-first (largest mask peeled
        // first), which is exactly top-rank-first.
        let rankings = results
            .into_iter()
            .map(|path| {
                Ranking::new(
                    path.iter()
                        .map(|&idx| items.item_at(idx).clone())
                        .collect(),
                )
            })
            .collect();

        CondorcetRankings {
            cost,
            rankings,
            is_truncated,
        }
    }

    /// Among all masks with `maskSize(S) = n - head_size`, the ones
    /// minimising `splitCost(S)`.
    pub fn splits(&self, head_size: usize) -> CondorcetSplits<T> {
        let costs = &self.subset_costs;
        let n = costs.n();
        let items = costs.items();
        let full = costs.full_mask();

        let Some(tail_size) = n.checked_sub(head_size) else {
            return CondorcetSplits {
                cost: f64::INFINITY,
                splits: Vec::new(),
            };
        };

        let mut best_cost = f64::INFINITY;
        let mut best_masks: Vec<u64> = Vec::new();
        for mask in 0u64..costs.num_masks() as u64 {
            if costs.mask_size(mask) as usize != tail_size {
                continue;
            }
            let cost = costs.split_cost(mask);
            if cost < best_cost {
                best_cost = cost;
                best_masks.clear();
                best_masks.push(mask);
            } else if cost == best_cost {
                best_masks.push(mask);
            }
        }

        let splits = best_masks
            .into_iter()
            .map(|tail_mask| {
                let head_mask = full & !tail_mask;
                Split {
                    head: mask_to_set(items, head_mask),
                    tail: mask_to_set(items, tail_mask),
                }
            })
            .collect();

        CondorcetSplits {
            cost: best_cost,
            splits,
        }
    }
}

fn mask_to_set<T: Clone + Eq + Hash>(items: &Items<T>, mask: u64) -> IndexSet<T> {
    iter_bits(mask)
        .map(|i| items.item_at(i as usize).clone())
        .collect()
}
