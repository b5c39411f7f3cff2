//! The Condorcet optimisation engine: matrix, subset-cost DP, optimum
//! enumeration, and tie-break scoring (spec §4.6–§4.9).

pub mod matrix;
pub mod optimum;
pub mod rankings;
pub mod splits;
pub mod subset_costs;
pub mod tiebreak;
pub mod tiebreak_score;
pub mod utils;

pub use matrix::{CondorcetMatrix, CondorcetMatrixBuilder};
pub use optimum::{is_close, CondorcetOptimum};
pub use rankings::{CondorcetRankings, Ranking};
pub use splits::{CondorcetSplits, Split};
pub use subset_costs::SubsetCosts;
pub use tiebreak::{CondorcetRankingTieBreak, OptimumError};
pub use tiebreak_score::TieBreakScore;
pub use utils::{ranking_cost, split_cost};
