//! Lexicographic tie-break over a set of equally-optimal rankings (spec §4.9).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_ranking_tiebreak.py`:
//! score every candidate ranking with [`TieBreakScore`] and feed it through a
//! [`rank_core::ArgMinMaxAccumulator`] — the accumulator's `argmin` is, by
//! construction, exactly the lex-minimal subset the spec calls for, ties and
//! all.

use std::hash::Hash;

use rank_core::ArgMinMaxAccumulator;

use crate::condorcet::matrix::CondorcetMatrix;
use crate::condorcet::rankings::CondorcetRankings;
use crate::condorcet::tiebreak_score::TieBreakScore;

/// Errors raised by the tie-break step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimumError {
    /// `optimum()` was called with no candidate rankings.
    NoRankings,
}

impl std::fmt::Display for OptimumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimumError::NoRankings => write!(f, "no rankings to tie-break"),
        }
    }
}

impl std::error::Error for OptimumError {}

/// Tie-breaks a [`CondorcetRankings`] against the four criteria in
/// [`TieBreakScore`] field order.
#[derive(Clone, Debug)]
pub struct CondorcetRankingTieBreak<T: Clone + Eq + Hash> {
    matrix: CondorcetMatrix<T>,
    rankings: CondorcetRankings<T>,
}

impl<T: Clone + Eq + Hash> CondorcetRankingTieBreak<T> {
    pub fn new(matrix: CondorcetMatrix<T>, rankings: CondorcetRankings<T>) -> Self {
        CondorcetRankingTieBreak { matrix, rankings }
    }

    /// The subset of the input rankings that are lex-minimal under
    /// `TieBreakScore`, preserving `cost` and `is_truncated`.
    ///
    /// # Errors
    /// `OptimumError::NoRankings` if the input set is empty.
    pub fn optimum(&self) -> Result<CondorcetRankings<T>, OptimumError> {
        if self.rankings.rankings.is_empty() {
            return Err(OptimumError::NoRankings);
        }

        let mut acc = ArgMinMaxAccumulator::new();
        for ranking in &self.rankings.rankings {
            let score = TieBreakScore::of(ranking, &self.matrix);
            acc.process(ranking.clone(), score);
        }
        let snapshot = acc.snapshot();

        Ok(CondorcetRankings {
            cost: self.rankings.cost,
            rankings: snapshot.argmin,
            is_truncated: self.rankings.is_truncated,
        })
    }
}
