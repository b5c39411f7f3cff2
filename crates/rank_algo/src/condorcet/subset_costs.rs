//! The subset-cost DP table — the hottest component (spec §4.7).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_subset_costs.py`:
//! `incr[i, S]` is built per item `i` by peeling the least-significant bit of
//! `S`; `splitCost`, `maskSize`, and `optCost` are derived columns over the
//! same `2^n`-indexed table. `NaN` marks "item `i` already in `S`" per spec
//! §3/§9's NaN-as-sentinel note.
//!
//! Unlike the Python reference's `@cached_property` laziness, `splitCost`,
//! `maskSize`, and `optCost` are computed eagerly at construction here: every
//! one of them is read by every downstream operation (`rankings`, `splits`),
//! so there is no value in deferring the work behind a `OnceCell`.

use std::hash::Hash;

use rank_core::bitmask::iter_bits;

use crate::condorcet::matrix::CondorcetMatrix;
use crate::items::Items;

/// The `incr`/`splitCost`/`maskSize`/`optCost` tables over `2^n` subsets of
/// an item set's indices.
#[derive(Clone, Debug)]
pub struct SubsetCosts<T: Clone + Eq + Hash> {
    items: Items<T>,
    n: usize,
    incr: Vec<f64>,
    split_cost: Vec<f64>,
    mask_size: Vec<u32>,
    opt_cost: Vec<f64>,
}

impl<T: Clone + Eq + Hash> SubsetCosts<T> {
    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn num_masks(&self) -> usize {
        1usize << self.n
    }

    /// Bitmask with all `n` item bits set.
    pub fn full_mask(&self) -> u64 {
        if self.n == 0 {
            0
        } else {
            (1u64 << self.n) - 1
        }
    }

    /// `incr[i, S]`: violation of placing item `i` ahead of all members of
    /// `S`. `NaN` iff bit `i` is set in `S`.
    pub fn incr(&self, i: usize, mask: u64) -> f64 {
        self.incr[i * self.num_masks() + mask as usize]
    }

    /// `splitCost[S] = nansum_i incr[i, S]`.
    pub fn split_cost(&self, mask: u64) -> f64 {
        self.split_cost[mask as usize]
    }

    /// `maskSize[S] = popcount(S)`.
    pub fn mask_size(&self, mask: u64) -> u32 {
        self.mask_size[mask as usize]
    }

    /// `optCost[S]`: minimum violation over all orderings of `S` alone.
    pub fn opt_cost(&self, mask: u64) -> f64 {
        self.opt_cost[mask as usize]
    }

    /// Build the DP tables for `matrix`.
    pub fn of(matrix: &CondorcetMatrix<T>) -> Self {
        let n = matrix.len();
        assert!(
            n < 63,
            "subset-cost DP is exponential in n by design (spec §5: not intended for n >= ~20); \
             n must stay under the u64/usize bitmask width"
        );
        let num_masks = 1usize << n;
        let violation = matrix.violation();

        let mut incr = vec![0.0f64; n * num_masks];
        for i in 0..n {
            let base = i * num_masks;
            for mask in 1usize..num_masks {
                if (mask >> i) & 1 == 1 {
                    incr[base + mask] = f64::NAN;
                } else {
                    let lsb = mask & mask.wrapping_neg();
                    let u = lsb.trailing_zeros() as usize;
                    incr[base + mask] = incr[base + (mask ^ lsb)] + violation[i * n + u] as f64;
                }
            }
        }

        let mut split_cost = vec![0.0f64; num_masks];
        let mut mask_size = vec![0u32; num_masks];
        for mask in 0..num_masks {
            mask_size[mask] = mask.count_ones();
            let mut sum = 0.0f64;
            for i in 0..n {
                let v = incr[i * num_masks + mask];
                if !v.is_nan() {
                    sum += v;
                }
            }
            split_cost[mask] = sum;
        }

        let mut opt_cost = vec![0.0f64; num_masks];
        for mask in 1..num_masks {
            let mut best = f64::INFINITY;
            for i in iter_bits(mask as u64) {
                let i = i as usize;
                let prev = mask ^ (1usize << i);
                let candidate = opt_cost[prev] + incr[i * num_masks + prev];
                if candidate < best {
                    best = candidate;
                }
                if best == 0.0 {
                    break;
                }
            }
            opt_cost[mask] = best;
        }

        SubsetCosts {
            items: matrix.items().clone(),
            n,
            incr,
            split_cost,
            mask_size,
            opt_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condorcet::matrix::CondorcetMatrixBuilder;
    use crate::items::Items;

    fn e1() -> SubsetCosts<&'static str> {
        let items = Items::new(["A", "B", "C", "D", "E"]).unwrap();
        let mut b = CondorcetMatrixBuilder::new(items);
        b.add_entry(&"A", &"B", -4).unwrap();
        b.add_entry(&"A", &"C", 2).unwrap();
        b.add_entry(&"A", &"D", 1).unwrap();
        b.add_entry(&"A", &"E", -8).unwrap();
        b.add_entry(&"B", &"C", -128).unwrap();
        b.add_entry(&"B", &"D", -32).unwrap();
        b.add_entry(&"B", &"E", 512).unwrap();
        b.add_entry(&"C", &"D", -16).unwrap();
        b.add_entry(&"C", &"E", 256).unwrap();
        b.add_entry(&"D", &"E", -64).unwrap();
        SubsetCosts::of(&b.build())
    }

    #[test]
    fn empty_mask_has_zero_cost() {
        let sc = e1();
        assert_eq!(sc.opt_cost(0), 0.0);
        assert_eq!(sc.split_cost(0), 0.0);
        assert_eq!(sc.mask_size(0), 0);
    }

    #[test]
    fn incr_is_nan_iff_item_already_in_mask() {
        let sc = e1();
        let mask_with_a = 0b00001u64;
        assert!(sc.incr(0, mask_with_a).is_nan());
        assert!(!sc.incr(1, mask_with_a).is_nan());
    }

    #[test]
    fn opt_cost_of_full_set_matches_e1_expected_cost() {
        let sc = e1();
        assert_eq!(sc.opt_cost(sc.full_mask()), 50.0);
    }

    #[test]
    fn mask_size_is_popcount() {
        let sc = e1();
        assert_eq!(sc.mask_size(0b10110), 3);
    }

    #[test]
    fn dp_consistency_holds_for_every_nonempty_mask() {
        // Spec §8 invariant 5: optCost[S] <= optCost[S\{i}] + incr[i, S\{i}] for
        // all i in S, with equality for at least one i.
        let sc = e1();
        for mask in 1u64..sc.num_masks() as u64 {
            let mut equality_found = false;
            for i in iter_bits(mask) {
                let i = i as usize;
                let prev = mask ^ (1u64 << i);
                let candidate = sc.opt_cost(prev) + sc.incr(i, prev);
                assert!(sc.opt_cost(mask) <= candidate + 1e-9);
                if (sc.opt_cost(mask) - candidate).abs() <= 1e-8 {
                    equality_found = true;
                }
            }
            assert!(equality_found, "no i in mask {mask:b} achieves optCost equality");
        }
    }
}
