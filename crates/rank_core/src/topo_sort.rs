//! Kahn's-algorithm topological sort (spec §4.3).
//!
//! Grounded on `examples/original_source/src/util/graphs/topo_sort.py`:
//! nodes with indegree 0 are processed in insertion order, decrementing
//! successors; if the resulting order does not cover every node, the graph
//! is cyclic.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::digraph::DiGraph;
use crate::GraphError;

/// Topological sort of the nodes of a [`DiGraph`].
///
/// If the originating digraph is cyclic, `order` is absent and `is_dag` is
/// `false`. Otherwise `order` holds *a* valid topological ordering — not
/// necessarily unique, and not necessarily canonical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopoSort<N: Clone + Eq + Hash> {
    order: Option<Vec<N>>,
}

impl<N: Clone + Eq + Hash> TopoSort<N> {
    /// True iff a topological ordering exists, i.e. the digraph is acyclic.
    pub fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// Alias of [`TopoSort::is_dag`], matching the original's dual
    /// `exists`/`is_dag` properties.
    pub fn exists(&self) -> bool {
        self.is_dag()
    }

    /// The topological ordering.
    ///
    /// # Errors
    /// `GraphError::GraphIsCyclic` if the originating digraph has a cycle.
    pub fn order(&self) -> Result<&[N], GraphError> {
        self.order
            .as_deref()
            .ok_or(GraphError::GraphIsCyclic)
    }

    /// Compute the topological sort of `digraph` via Kahn's algorithm.
    pub fn of(digraph: &DiGraph<N>) -> Self
    where
        N: std::fmt::Debug,
    {
        let mut indegrees: IndexMap<N, usize> =
            digraph.nodes().map(|n| (n.clone(), 0usize)).collect();
        for node in digraph.nodes() {
            for neighbour in digraph.neighbours(node).expect("node came from digraph.nodes()") {
                *indegrees.entry(neighbour.clone()).or_insert(0) += 1;
            }
        }

        let mut queue: std::collections::VecDeque<N> = indegrees
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(n, _)| n.clone())
            .collect();

        let mut order = Vec::with_capacity(indegrees.len());
        while let Some(u) = queue.pop_front() {
            order.push(u.clone());
            for v in digraph.neighbours(&u).expect("node came from digraph") {
                let deg = indegrees.get_mut(v).expect("neighbour tracked in indegrees");
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(v.clone());
                }
            }
        }

        if order.len() == indegrees.len() {
            TopoSort { order: Some(order) }
        } else {
            TopoSort { order: None }
        }
    }
}
