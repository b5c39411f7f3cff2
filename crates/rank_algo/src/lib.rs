//! rank_algo — the Condorcet/tournament ranking engine.
//!
//! Depends only on `rank_core`'s graph and bitmask machinery. Builds:
//!
//! - an antisymmetric [`condorcet::CondorcetMatrix`] and its Borda/sign/violation
//!   derivations;
//! - the `2^n`-indexed subset-cost DP ([`condorcet::SubsetCosts`]) and the
//!   optimum enumerator ([`condorcet::CondorcetOptimum`]) built on it;
//! - lexicographic tie-break scoring ([`condorcet::TieBreakScore`],
//!   [`condorcet::CondorcetRankingTieBreak`]);
//! - a pairwise [`tournament::Tournament`] and the [`tournament_ranking::tournament_ranking`]
//!   pipeline that glues SCC condensation, the optimum engine, and tie-break
//!   scoring into a [`segmented_ranking::SegmentedRanking`].

#![forbid(unsafe_code)]

pub mod condorcet;
pub mod items;
pub mod segmented_ranking;
pub mod tournament;
pub mod tournament_ranking;

pub use items::{Items, MatrixError};
pub use condorcet::OptimumError;
pub use segmented_ranking::{SegmentedRanking, SegmentedRankingBuilder};
pub use tournament::{Duel, DuelScore, Tournament, TournamentBuilder};
pub use tournament_ranking::tournament_ranking;
