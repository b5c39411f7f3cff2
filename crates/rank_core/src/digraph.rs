//! Immutable directed graph with an insertion-ordered adjacency map (spec §4.2).
//!
//! Grounded on `examples/original_source/src/util/graphs/digraph.py`: nodes
//! are added explicitly or implicitly via `add_edge`, and a built `DiGraph`
//! exposes `nodes()` in insertion order and `neighbours(v)` that fails for an
//! unknown node rather than returning an empty iterator silently.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::GraphError;

/// Immutable directed graph over nodes of type `N`.
///
/// Construct via [`DiGraph::builder`]; the built value never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiGraph<N: Clone + Eq + Hash> {
    edges: IndexMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash> std::hash::Hash for DiGraph<N> {
    /// Hashes nodes and their neighbour lists in insertion order. A condensed
    /// graph uses subgraphs as node keys (§4.5), so `DiGraph` must itself be
    /// hashable; insertion order is stable for a built, immutable value, so
    /// this is consistent with `Eq`.
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for (node, children) in &self.edges {
            node.hash(state);
            children.hash(state);
        }
    }
}

impl<N: Clone + Eq + Hash> DiGraph<N> {
    /// Start building a new digraph.
    pub fn builder() -> DiGraphBuilder<N> {
        DiGraphBuilder::new()
    }

    /// True iff `node` appears in the digraph, as either endpoint of an edge.
    pub fn has_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of nodes in the digraph.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes of the digraph, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    /// Out-neighbours of `node`, in insertion order.
    ///
    /// # Errors
    /// `GraphError::NodeNotFound` if `node` is not present in the digraph —
    /// an empty neighbourhood for a *known* node is a distinct, valid state
    /// from a node that was never added.
    pub fn neighbours(&self, node: &N) -> Result<&[N], GraphError>
    where
        N: std::fmt::Debug,
    {
        self.edges
            .get(node)
            .map(|v| v.as_slice())
            .ok_or_else(|| GraphError::NodeNotFound(format!("{node:?}")))
    }
}

impl<N: Clone + Eq + Hash + std::fmt::Debug> std::fmt::Display for DiGraph<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens: Vec<String> = self
            .edges
            .iter()
            .map(|(node, children)| {
                let children_str = if children.is_empty() {
                    "∅".to_string()
                } else {
                    let set: IndexSet<&N> = children.iter().collect();
                    format!("{set:?}")
                };
                format!("{node:?} -> {children_str}")
            })
            .collect();
        write!(f, "DiGraph({})", tokens.join(", "))
    }
}

/// Builder for [`DiGraph`]. Adding an edge implicitly adds both endpoints.
#[derive(Debug, Default)]
pub struct DiGraphBuilder<N: Clone + Eq + Hash> {
    edges: IndexMap<N, IndexSet<N>>,
}

impl<N: Clone + Eq + Hash> DiGraphBuilder<N> {
    pub fn new() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }

    /// Add `node` if absent. Does not add any edges.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.edges.entry(node).or_default();
        self
    }

    /// Add a directed edge `source -> sink`, adding both endpoints first.
    pub fn add_edge(&mut self, source: N, sink: N) -> &mut Self {
        self.add_node(source.clone());
        self.add_node(sink.clone());
        self.edges.get_mut(&source).unwrap().insert(sink);
        self
    }

    pub fn build(self) -> DiGraph<N> {
        let edges = self
            .edges
            .into_iter()
            .map(|(node, children)| (node, children.into_iter().collect()))
            .collect();
        DiGraph { edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_implicitly_adds_nodes() {
        let mut b = DiGraph::<&str>::builder();
        b.add_edge("a", "b");
        let g = b.build();
        assert!(g.has_node("a"));
        assert!(g.has_node("b"));
        assert_eq!(g.neighbours(&"a").unwrap(), &["b"]);
    }

    #[test]
    fn nodes_preserve_insertion_order() {
        let mut b = DiGraph::<i32>::builder();
        b.add_node(3);
        b.add_edge(1, 2);
        let g = b.build();
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn neighbours_of_unknown_node_fails() {
        let g = DiGraph::<&str>::builder().build();
        assert_eq!(
            g.neighbours(&"missing"),
            Err(GraphError::NodeNotFound("\"missing\"".to_string()))
        );
    }

    #[test]
    fn known_node_with_no_edges_has_empty_but_ok_neighbourhood() {
        let mut b = DiGraph::<&str>::builder();
        b.add_node("solo");
        let g = b.build();
        assert_eq!(g.neighbours(&"solo").unwrap(), &[] as &[&str]);
    }

    #[test]
    fn duplicate_edges_are_idempotent() {
        let mut b = DiGraph::<&str>::builder();
        b.add_edge("a", "b");
        b.add_edge("a", "b");
        let g = b.build();
        assert_eq!(g.neighbours(&"a").unwrap(), &["b"]);
    }
}
