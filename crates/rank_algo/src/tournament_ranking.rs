//! Glues condensation, the Condorcet optimum engine, and tie-break scoring
//! into one `SegmentedRanking` (spec §4.11).
//!
//! Grounded on `examples/original_source/src/ranking/tournament_ranking.py`:
//! condense the head-to-head win-digraph, then for each SCC in topological
//! order emit a one-item segment (singleton component) or solve a restricted
//! Condorcet optimum and optionally tie-break it against the overall matrix.

use std::hash::Hash;

use rank_core::condense;

use crate::condorcet::matrix::{CondorcetMatrix, CondorcetMatrixBuilder};
use crate::condorcet::optimum::CondorcetOptimum;
use crate::condorcet::tiebreak::CondorcetRankingTieBreak;
use crate::items::Items;
use crate::segmented_ranking::{SegmentedRanking, SegmentedRankingBuilder};
use crate::tournament::Tournament;

/// Run the full pipeline over `tournament`: condense its head-to-head
/// win-digraph, solve each component's Condorcet optimum, and optionally
/// tie-break multi-ranking components against the overall matrix.
pub fn tournament_ranking<T>(tournament: &Tournament<T>, use_tiebreaker: bool) -> SegmentedRanking<T>
where
    T: Clone + Eq + Hash + std::fmt::Debug,
{
    let h2h = tournament.h2h_digraph();
    let condensed = condense(&h2h);
    let topo_order = condensed
        .topo_sort()
        .order()
        .expect("SCC condensation is always acyclic");

    let full_matrix = build_full_matrix(tournament);

    let mut builder = SegmentedRankingBuilder::new();
    for component in topo_order {
        let nodes: Vec<T> = component.nodes().cloned().collect();
        if nodes.len() == 1 {
            builder.add_item(nodes.into_iter().next().unwrap());
            continue;
        }

        let restricted_matrix = restrict_matrix(&full_matrix, &nodes);
        let optimum = CondorcetOptimum::of(&restricted_matrix);
        let rankings = optimum.rankings(None);

        let segment = if use_tiebreaker && rankings.rankings.len() > 1 {
            let tiebreak = CondorcetRankingTieBreak::new(full_matrix.clone(), rankings);
            tiebreak
                .optimum()
                .expect("component always has at least one optimal ranking")
                .rankings
        } else {
            rankings.rankings
        };
        builder.add_segment(segment);
    }

    builder.build()
}

fn build_full_matrix<T: Clone + Eq + Hash + std::fmt::Debug>(
    tournament: &Tournament<T>,
) -> CondorcetMatrix<T> {
    let items = Items::new(tournament.sides()).expect("tournament sides are distinct");
    let mut builder = CondorcetMatrixBuilder::new(items);
    for duel in tournament.duels() {
        let diff = duel.score.lhs as i64 - duel.score.rhs as i64;
        builder
            .add_entry(&duel.lhs, &duel.rhs, diff)
            .expect("duel endpoints are tournament sides");
    }
    builder.build()
}

fn restrict_matrix<T: Clone + Eq + Hash>(
    full_matrix: &CondorcetMatrix<T>,
    nodes: &[T],
) -> CondorcetMatrix<T> {
    let items = Items::new(nodes.iter().cloned()).expect("SCC nodes are distinct");
    let mut builder = CondorcetMatrixBuilder::new(items);
    for i in nodes {
        for j in nodes {
            if i == j {
                continue;
            }
            let fi = full_matrix.items().index_of(i).expect("node is a full-matrix item");
            let fj = full_matrix.items().index_of(j).expect("node is a full-matrix item");
            builder.possibly_add_entry(i, j, full_matrix.get(fi, fj));
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::TournamentBuilder;

    fn original_test_tournament() -> Tournament<&'static str> {
        let mut b = TournamentBuilder::new();
        b.add_path(&["a", "b", "c", "d", "e"]);
        b.add_path(&["a", "c", "d", "b", "e"]);
        b.add_path(&["a", "d", "b", "c", "e"]);
        b.add_path(&["b", "a"]);
        b.add_path(&["c", "e"]);
        b.build()
    }

    #[test]
    fn without_tiebreaker_middle_scc_keeps_all_three_rotations() {
        let tournament = original_test_tournament();
        let segmented = tournament_ranking(&tournament, false);

        let sizes: Vec<usize> = segmented.segments().iter().map(|s| s.len()).collect();
        assert_eq!(sizes, vec![1, 3, 1]);

        assert_eq!(segmented.segments()[0][0].as_slice(), &["a"]);
        assert_eq!(segmented.segments()[2][0].as_slice(), &["e"]);

        let middle: Vec<Vec<&str>> = segmented.segments()[1]
            .iter()
            .map(|r| r.as_slice().to_vec())
            .collect();
        for rotation in [vec!["b", "c", "d"], vec!["c", "d", "b"], vec!["d", "b", "c"]] {
            assert!(middle.contains(&rotation));
        }
    }

    #[test]
    fn with_tiebreaker_middle_scc_collapses_to_one_ranking() {
        let tournament = original_test_tournament();
        let segmented = tournament_ranking(&tournament, true);

        let sizes: Vec<usize> = segmented.segments().iter().map(|s| s.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1]);
        assert_eq!(segmented.segments()[1][0].as_slice(), &["b", "c", "d"]);
    }

    #[test]
    fn cardinality_matches_segment_sizes_product() {
        let tournament = original_test_tournament();
        let segmented = tournament_ranking(&tournament, false);
        assert_eq!(segmented.cardinality(), 3);
    }
}
