//! A sequence of segments, each carrying the rankings permissible within it
//! (spec §3 data model, §4.11).
//!
//! Grounded on `examples/original_source/src/ranking/dtypes/segmented_ranking.py`:
//! each segment corresponds to one SCC of the head-to-head win-digraph; the
//! product of segment sizes is the count of globally-optimal total rankings.

use std::hash::Hash;

use crate::condorcet::rankings::Ranking;

/// An ordered sequence of segments, each a set of equally-optimal rankings
/// over the same item subset.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedRanking<T: Clone + Eq + Hash> {
    segments: Vec<Vec<Ranking<T>>>,
}

impl<T: Clone + Eq + Hash> SegmentedRanking<T> {
    pub fn segments(&self) -> &[Vec<Ranking<T>>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Product of `|segment|` over all segments: the number of globally-optimal
    /// total rankings this value represents (spec §4.11).
    pub fn cardinality(&self) -> u128 {
        self.segments.iter().map(|seg| seg.len() as u128).product()
    }

    /// One concrete full ranking: the first ranking of each segment, concatenated.
    pub fn arbitrary(&self) -> Ranking<T> {
        let mut order = Vec::new();
        for segment in &self.segments {
            if let Some(first) = segment.first() {
                order.extend(first.as_slice().iter().cloned());
            }
        }
        Ranking::new(order)
    }
}

/// Builder for [`SegmentedRanking`].
#[derive(Clone, Debug, Default)]
pub struct SegmentedRankingBuilder<T: Clone + Eq + Hash> {
    segments: Vec<Vec<Ranking<T>>>,
}

impl<T: Clone + Eq + Hash> SegmentedRankingBuilder<T> {
    pub fn new() -> Self {
        SegmentedRankingBuilder {
            segments: Vec::new(),
        }
    }

    /// Append a size-1 segment containing exactly `item`.
    pub fn add_item(&mut self, item: T) -> &mut Self {
        self.segments.push(vec![Ranking::new(vec![item])]);
        self
    }

    /// Append a segment carrying the given set of equally-optimal rankings.
    pub fn add_segment(&mut self, rankings: Vec<Ranking<T>>) -> &mut Self {
        self.segments.push(rankings);
        self
    }

    pub fn build(self) -> SegmentedRanking<T> {
        SegmentedRanking {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_is_product_of_segment_sizes() {
        let mut b = SegmentedRankingBuilder::new();
        b.add_item("a");
        b.add_segment(vec![
            Ranking::new(vec!["b", "c"]),
            Ranking::new(vec!["c", "b"]),
            Ranking::new(vec!["b", "c"]),
        ]);
        b.add_item("d");
        let sr = b.build();
        assert_eq!(sr.cardinality(), 3);
        assert_eq!(sr.len(), 3);
    }

    #[test]
    fn arbitrary_concatenates_first_ranking_of_each_segment() {
        let mut b = SegmentedRankingBuilder::new();
        b.add_item("a");
        b.add_segment(vec![Ranking::new(vec!["b", "c"])]);
        let sr = b.build();
        assert_eq!(sr.arbitrary().as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn empty_builder_yields_empty_segmented_ranking() {
        let sr = SegmentedRankingBuilder::<&str>::new().build();
        assert!(sr.is_empty());
        assert_eq!(sr.cardinality(), 1); // empty product
    }
}
