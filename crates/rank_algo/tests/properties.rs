//! Property-based tests over random instances (spec §8 invariants 1-5, 10).

use proptest::prelude::*;
use rank_algo::condorcet::{CondorcetMatrixBuilder, SubsetCosts};
use rank_algo::Items;
use rank_core::bitmask::iter_bits;
use rank_core::{DiGraph, TopoSort};

const LABELS: [&str; 6] = ["p0", "p1", "p2", "p3", "p4", "p5"];

fn build_random_matrix(n: usize, entries: &[i64]) -> rank_algo::condorcet::CondorcetMatrix<&'static str> {
    let items = Items::new(LABELS[..n].iter().copied()).unwrap();
    let mut builder = CondorcetMatrixBuilder::new(items);
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            builder.add_entry(&LABELS[i], &LABELS[j], entries[k]).unwrap();
            k += 1;
        }
    }
    builder.build()
}

proptest! {
    // Invariants 1-4: antisymmetry, violation non-negativity, Borda
    // antisymmetry, sign in {-1,0,1} and antisymmetric.
    #[test]
    fn matrix_invariants_hold(
        n in 2usize..=6,
        entries in prop::collection::vec(-50i64..50, 0..15),
    ) {
        let pair_count = n * (n.saturating_sub(1)) / 2;
        prop_assume!(entries.len() >= pair_count);
        let matrix = build_random_matrix(n, &entries);

        let violation = matrix.violation();
        let borda = matrix.borda();
        let sign = matrix.sign();

        for i in 0..n {
            prop_assert_eq!(matrix.get(i, i), 0);
            for j in 0..n {
                prop_assert_eq!(matrix.get(i, j), -matrix.get(j, i));
                prop_assert!(violation[i * n + j] >= 0);
                prop_assert_eq!(violation[i * n + j], (-matrix.get(i, j)).max(0));
                prop_assert_eq!(borda.get(i, j), -borda.get(j, i));
                let s = sign.get(i, j);
                prop_assert!(s == -1 || s == 0 || s == 1);
                prop_assert_eq!(s, -sign.get(j, i));
            }
        }
    }

    // Invariant 5: DP consistency of optCost.
    #[test]
    fn dp_consistency_holds(
        n in 2usize..=5,
        entries in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let pair_count = n * (n.saturating_sub(1)) / 2;
        prop_assume!(entries.len() >= pair_count);
        let matrix = build_random_matrix(n, &entries);
        let costs = SubsetCosts::of(&matrix);

        for mask in 1u64..costs.num_masks() as u64 {
            let mut equality_found = false;
            for i in iter_bits(mask) {
                let i = i as usize;
                let prev = mask ^ (1u64 << i);
                let candidate = costs.opt_cost(prev) + costs.incr(i, prev);
                prop_assert!(costs.opt_cost(mask) <= candidate + 1e-9);
                if (costs.opt_cost(mask) - candidate).abs() <= 1e-8 {
                    equality_found = true;
                }
            }
            prop_assert!(equality_found);
        }
    }

    // Invariant 10: topo correctness over random DAGs (edges only go from a
    // lower to a higher generated index, which guarantees acyclicity).
    #[test]
    fn topo_order_respects_every_edge(
        n in 2usize..=8,
        edge_bits in prop::collection::vec(any::<bool>(), 0..28),
    ) {
        let mut builder = DiGraph::<usize>::builder();
        for i in 0..n {
            builder.add_node(i);
        }
        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if k < edge_bits.len() && edge_bits[k] {
                    builder.add_edge(i, j);
                    edges.push((i, j));
                }
                k += 1;
            }
        }
        let g = builder.build();
        let topo = TopoSort::of(&g);
        prop_assert!(topo.is_dag());
        let order = topo.order().unwrap();
        let position = |node: usize| order.iter().position(|&x| x == node).unwrap();
        for (u, v) in edges {
            prop_assert!(position(u) < position(v));
        }
    }
}
