//! Antisymmetric pairwise-preference matrix and its derived forms (spec §4.6).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_matrix.py`:
//! a builder enforces `M[i,j] = -M[j,i]` by construction (every write touches
//! both cells), and `violation`/`borda`/`sign` are pure derivations of the
//! built matrix.

use std::hash::Hash;

use crate::items::{Items, MatrixError};

/// An n×n antisymmetric integer matrix over a fixed [`Items`] sequence.
///
/// Backed by a flat, row-major `Vec<i64>` — none of the teacher crates reach
/// for `ndarray` for a dense small integer matrix, so a flat vector indexed
/// by `row * n + col` is the idiomatic choice here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CondorcetMatrix<T: Clone + Eq + Hash> {
    items: Items<T>,
    values: Vec<i64>,
}

impl<T: Clone + Eq + Hash> CondorcetMatrix<T> {
    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `M[i,j]` by fixed index.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.values[i * self.len() + j]
    }

    fn row_sum(&self, i: usize) -> i64 {
        let n = self.len();
        (0..n).map(|j| self.get(i, j)).sum()
    }

    fn col_sum(&self, j: usize) -> i64 {
        let n = self.len();
        (0..n).map(|i| self.get(i, j)).sum()
    }

    /// `violation = max(0, -M)` elementwise, as a flat row-major `n*n` table.
    pub fn violation(&self) -> Vec<i64> {
        self.values.iter().map(|&v| (-v).max(0)).collect()
    }

    /// `borda[i,j] = rowSum[i] + colSum[j]`. Antisymmetric (spec §4.6/§8.3).
    pub fn borda(&self) -> CondorcetMatrix<T> {
        let n = self.len();
        let row_sums: Vec<i64> = (0..n).map(|i| self.row_sum(i)).collect();
        let col_sums: Vec<i64> = (0..n).map(|j| self.col_sum(j)).collect();
        let mut values = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                values[i * n + j] = row_sums[i] + col_sums[j];
            }
        }
        CondorcetMatrix {
            items: self.items.clone(),
            values,
        }
    }

    /// Elementwise sign of `M`, values in `{-1,0,1}` (spec §4.6/§8.4).
    pub fn sign(&self) -> CondorcetMatrix<T> {
        CondorcetMatrix {
            items: self.items.clone(),
            values: self.values.iter().map(|&v| v.signum()).collect(),
        }
    }
}

/// Builder for [`CondorcetMatrix`]. Every write enforces antisymmetry.
#[derive(Clone, Debug)]
pub struct CondorcetMatrixBuilder<T: Clone + Eq + Hash> {
    items: Items<T>,
    values: Vec<i64>,
}

impl<T: Clone + Eq + Hash> CondorcetMatrixBuilder<T> {
    pub fn new(items: Items<T>) -> Self {
        let n = items.len();
        CondorcetMatrixBuilder {
            items,
            values: vec![0i64; n * n],
        }
    }

    fn write(&mut self, i: usize, j: usize, v: i64) {
        let n = self.items.len();
        self.values[i * n + j] = v;
        self.values[j * n + i] = -v;
    }

    /// Set `M[i,j] = v` and `M[j,i] = -v`.
    ///
    /// # Errors
    /// `MatrixError::UnknownItem` if `i` or `j` is outside the item set.
    pub fn add_entry(&mut self, i: &T, j: &T, v: i64) -> Result<&mut Self, MatrixError> {
        let i_idx = self.items.index_of(i).ok_or(MatrixError::UnknownItem)?;
        let j_idx = self.items.index_of(j).ok_or(MatrixError::UnknownItem)?;
        self.write(i_idx, j_idx, v);
        Ok(self)
    }

    /// As [`Self::add_entry`], but silently ignores unknown items (used when
    /// restricting a global matrix to a subset of its items).
    pub fn possibly_add_entry(&mut self, i: &T, j: &T, v: i64) -> &mut Self {
        if let (Some(i_idx), Some(j_idx)) = (self.items.index_of(i), self.items.index_of(j)) {
            self.write(i_idx, j_idx, v);
        }
        self
    }

    pub fn build(self) -> CondorcetMatrix<T> {
        CondorcetMatrix {
            items: self.items,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e1_matrix() -> CondorcetMatrix<&'static str> {
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
        b.build()
    }

    #[test]
    fn builder_enforces_antisymmetry() {
        let m = e1_matrix();
        let n = m.len();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(m.get(i, j), -m.get(j, i));
            }
            assert_eq!(m.get(i, i), 0);
        }
    }

    #[test]
    fn add_entry_rejects_unknown_item() {
        let items = Items::new(["A", "B"]).unwrap();
        let mut b = CondorcetMatrixBuilder::new(items);
        assert_eq!(
            b.add_entry(&"A", &"Z", 1),
            Err(MatrixError::UnknownItem)
        );
    }

    #[test]
    fn possibly_add_entry_ignores_unknown_item() {
        let items = Items::new(["A", "B"]).unwrap();
        let mut b = CondorcetMatrixBuilder::new(items);
        b.possibly_add_entry(&"A", &"Z", 7);
        let m = b.build();
        assert_eq!(m.get(0, 1), 0);
    }

    #[test]
    fn violation_is_nonnegative_and_matches_max_0_neg_m() {
        let m = e1_matrix();
        let v = m.violation();
        let n = m.len();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(v[i * n + j], (-m.get(i, j)).max(0));
                assert!(v[i * n + j] >= 0);
            }
        }
    }

    #[test]
    fn borda_is_antisymmetric() {
        let m = e1_matrix();
        let borda = m.borda();
        let n = borda.len();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(borda.get(i, j), -borda.get(j, i));
            }
        }
    }

    #[test]
    fn sign_is_in_expected_range_and_antisymmetric() {
        let m = e1_matrix();
        let sign = m.sign();
        let n = sign.len();
        for i in 0..n {
            for j in 0..n {
                let s = sign.get(i, j);
                assert!(s == -1 || s == 0 || s == 1);
                assert_eq!(s, -sign.get(j, i));
            }
        }
    }
}
