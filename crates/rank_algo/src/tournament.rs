//! Pairwise tournament scores and the head-to-head win-digraph (spec §4.10).
//!
//! Grounded on `examples/original_source/src/ranking/tournament/tournament.py`
//! and `duel.py`/`duel_score.py`: a `Tournament` is a two-level mapping
//! `lhs -> rhs -> DuelScore`; the builder keeps both directions of every
//! recorded head-to-head in sync so `scoreOrZero` never needs to guess a
//! missing reciprocal.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use rank_core::DiGraph;

/// Non-negative win/loss counts for one side of a head-to-head. An additive
/// monoid under component-wise `+`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DuelScore {
    pub lhs: u64,
    pub rhs: u64,
}

impl DuelScore {
    pub fn new(lhs: u64, rhs: u64) -> Self {
        DuelScore { lhs, rhs }
    }

    pub fn zero() -> Self {
        DuelScore::default()
    }
}

impl std::ops::Add for DuelScore {
    type Output = DuelScore;
    fn add(self, other: Self) -> Self {
        DuelScore::new(self.lhs + other.lhs, self.rhs + other.rhs)
    }
}

impl std::ops::AddAssign for DuelScore {
    fn add_assign(&mut self, other: Self) {
        self.lhs += other.lhs;
        self.rhs += other.rhs;
    }
}

impl std::fmt::Display for DuelScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.lhs, self.rhs)
    }
}

/// One stored `(lhs, rhs, score)` triple from a [`Tournament`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duel<T> {
    pub lhs: T,
    pub rhs: T,
    pub score: DuelScore,
}

impl<T: std::fmt::Display> std::fmt::Display for Duel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.score, self.rhs)
    }
}

/// A two-level mapping from each side to its opponents' [`DuelScore`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tournament<T: Clone + Eq + Hash> {
    table: IndexMap<T, IndexMap<T, DuelScore>>,
}

impl<T: Clone + Eq + Hash> Tournament<T> {
    /// Union of outer and inner keys, insertion order.
    pub fn sides(&self) -> IndexSet<T> {
        let mut sides = IndexSet::new();
        for (lhs, inner) in &self.table {
            sides.insert(lhs.clone());
            for rhs in inner.keys() {
                sides.insert(rhs.clone());
            }
        }
        sides
    }

    /// `score(lhs, rhs)`, or `DuelScore::zero()` if the pair was never recorded.
    pub fn score_or_zero(&self, lhs: &T, rhs: &T) -> DuelScore {
        self.table
            .get(lhs)
            .and_then(|inner| inner.get(rhs))
            .copied()
            .unwrap_or_default()
    }

    /// All stored `(lhs, rhs, score)` triples. In a normalised tournament
    /// (built via [`TournamentBuilder`]) every unordered pair appears twice.
    pub fn duels(&self) -> Vec<Duel<T>> {
        self.table
            .iter()
            .flat_map(|(lhs, inner)| {
                inner.iter().map(move |(rhs, score)| Duel {
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                    score: *score,
                })
            })
            .collect()
    }

    /// `(wins, losses)` of `side` against every recorded opponent; a tied
    /// duel (`lhs == rhs`) contributes to neither.
    pub fn match_results(&self, side: &T) -> DuelScore {
        let mut wins = 0u64;
        let mut losses = 0u64;
        if let Some(inner) = self.table.get(side) {
            for score in inner.values() {
                match score.lhs.cmp(&score.rhs) {
                    std::cmp::Ordering::Greater => wins += 1,
                    std::cmp::Ordering::Less => losses += 1,
                    std::cmp::Ordering::Equal => {}
                }
            }
        }
        DuelScore::new(wins, losses)
    }

    /// Component-wise sum of `side`'s `DuelScore`s against every opponent.
    pub fn total_score(&self, side: &T) -> DuelScore {
        self.table
            .get(side)
            .map(|inner| inner.values().fold(DuelScore::zero(), |acc, s| acc + *s))
            .unwrap_or_default()
    }

    /// Restrict to exactly `sides`, keeping scores unchanged.
    pub fn select(&self, sides: &IndexSet<T>) -> Tournament<T> {
        let mut table = IndexMap::new();
        for (lhs, inner) in &self.table {
            if !sides.contains(lhs) {
                continue;
            }
            let new_inner: IndexMap<T, DuelScore> = inner
                .iter()
                .filter(|(rhs, _)| sides.contains(*rhs))
                .map(|(rhs, score)| (rhs.clone(), *score))
                .collect();
            table.insert(lhs.clone(), new_inner);
        }
        Tournament { table }
    }

    /// Restrict to every side except `sides`.
    pub fn drop(&self, sides: &IndexSet<T>) -> Tournament<T> {
        let keep: IndexSet<T> = self.sides().into_iter().filter(|s| !sides.contains(s)).collect();
        self.select(&keep)
    }

    /// Directed edge `u -> v` iff `scoreOrZero(u,v).lhs > .rhs`.
    pub fn h2h_digraph(&self) -> DiGraph<T> {
        let mut builder = DiGraph::builder();
        for side in self.sides() {
            builder.add_node(side);
        }
        for duel in self.duels() {
            if duel.score.lhs > duel.score.rhs {
                builder.add_edge(duel.lhs, duel.rhs);
            }
        }
        builder.build()
    }
}

/// Builder for [`Tournament`]. Every recorded head-to-head is mirrored in
/// both directions.
#[derive(Clone, Debug, Default)]
pub struct TournamentBuilder<T: Clone + Eq + Hash> {
    table: IndexMap<T, IndexMap<T, DuelScore>>,
}

impl<T: Clone + Eq + Hash> TournamentBuilder<T> {
    pub fn new() -> Self {
        TournamentBuilder {
            table: IndexMap::new(),
        }
    }

    /// Record `wins`-`losses` of `lhs` over `rhs` (and the mirrored
    /// `losses`-`wins` of `rhs` over `lhs`), accumulating into any prior
    /// score for the pair.
    pub fn add_win(&mut self, lhs: T, rhs: T, wins: u64, losses: u64) -> &mut Self {
        *self
            .table
            .entry(lhs.clone())
            .or_default()
            .entry(rhs.clone())
            .or_insert_with(DuelScore::zero) += DuelScore::new(wins, losses);
        *self
            .table
            .entry(rhs)
            .or_default()
            .entry(lhs)
            .or_insert_with(DuelScore::zero) += DuelScore::new(losses, wins);
        self
    }

    /// Record one win for every earlier element over every later element of
    /// `path`.
    pub fn add_path(&mut self, path: &[T]) -> &mut Self {
        for i in 0..path.len() {
            for j in (i + 1)..path.len() {
                self.add_win(path[i].clone(), path[j].clone(), 1, 0);
            }
        }
        self
    }

    /// [`Self::add_path`] over every path in `paths`.
    pub fn add_paths<'a, I>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a [T]>,
        T: 'a,
    {
        for path in paths {
            self.add_path(path);
        }
        self
    }

    pub fn build(self) -> Tournament<T> {
        Tournament { table: self.table }
    }
}
