//! Fixed, index-stable item sequence shared by the Condorcet types (spec §3).
//!
//! Grounded on `examples/original_source/src/ranking/condorcet/condorcet_matrix.py`:
//! an `Items<T>` value pins each item to an index for the lifetime of the
//! matrix built over it; duplicates are rejected at construction rather than
//! silently deduplicated.

use std::hash::Hash;

use indexmap::IndexSet;

/// Errors raised while building Condorcet-domain values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// `Items::new` was given the same item twice.
    DuplicateItem,
    /// A strict accessor (e.g. `CondorcetMatrixBuilder::add_entry`) was given
    /// an item outside the fixed item set.
    UnknownItem,
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DuplicateItem => write!(f, "duplicate item in item set"),
            MatrixError::UnknownItem => write!(f, "item not present in item set"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// An ordered sequence of `n` distinct items; each item's index is fixed for
/// the life of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Items<T: Clone + Eq + Hash> {
    order: Vec<T>,
    index: IndexSet<T>,
}

impl<T: Clone + Eq + Hash> Items<T> {
    /// Build from an iterator of items.
    ///
    /// # Errors
    /// `MatrixError::DuplicateItem` if the same item appears twice.
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, MatrixError> {
        let order: Vec<T> = items.into_iter().collect();
        let index: IndexSet<T> = order.iter().cloned().collect();
        if index.len() != order.len() {
            return Err(MatrixError::DuplicateItem);
        }
        Ok(Items { order, index })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The items, in construction order.
    pub fn as_slice(&self) -> &[T] {
        &self.order
    }

    /// The fixed index of `item`, if present.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index.get_index_of(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    /// The item at fixed index `i`.
    pub fn item_at(&self, i: usize) -> &T {
        &self.order[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let err = Items::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(err, MatrixError::DuplicateItem);
    }

    #[test]
    fn preserves_construction_order_and_index() {
        let items = Items::new(["c", "a", "b"]).unwrap();
        assert_eq!(items.as_slice(), &["c", "a", "b"]);
        assert_eq!(items.index_of(&"a"), Some(1));
        assert_eq!(items.index_of(&"z"), None);
        assert_eq!(items.item_at(2), &"b");
    }
}
