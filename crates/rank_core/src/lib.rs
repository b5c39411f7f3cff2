//! rank_core — Leaf utilities for the Condorcet ranking engine.
//!
//! This crate is domain-free: it knows nothing about items, matrices, or
//! tournaments. It provides the graph and bitmask machinery that the
//! ranking-domain layer (`rank_algo`) builds on.
//!
//! - Bitmask enumeration
//! - Immutable `DiGraph` + builder, `TopoSort`, `TransitiveReduction`, SCC
//!   `condense`
//! - `ArgMinMaxAccumulator`, a generic streaming min/max-with-ties collector
//!
//! Every public type here is value-semantic and immutable once built; builders
//! are the only mutable carriers.

#![forbid(unsafe_code)]

pub mod arg_min_max;
pub mod bitmask;
pub mod condensation;
pub mod digraph;
pub mod topo_sort;
pub mod transitive_reduction;

pub use arg_min_max::{ArgMinMax, ArgMinMaxAccumulator};
pub use condensation::condense;
pub use digraph::{DiGraph, DiGraphBuilder};
pub use topo_sort::TopoSort;
pub use transitive_reduction::TransitiveReduction;

/// Errors raised when a graph query reaches for data that does not exist.
///
/// Cyclicity and missing nodes are also observable as plain booleans
/// (`DiGraph::has_node`, `TopoSort::is_dag`) where that is the more natural
/// idiom; this error type is the other surface, raised by the accessors that
/// need the missing data (`DiGraph::neighbours`, `TopoSort::order`,
/// `TransitiveReduction::reduced_digraph`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// `neighbours(v)` was called for a `v` absent from the digraph.
    NodeNotFound(String),
    /// `order()`/`reduced_digraph()` was requested of a cyclic graph.
    GraphIsCyclic,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GraphError::NodeNotFound(node) => write!(f, "node not in digraph: {node}"),
            GraphError::GraphIsCyclic => {
                write!(f, "digraph is cyclic, no topological order exists")
            }
        }
    }
}

impl std::error::Error for GraphError {}
