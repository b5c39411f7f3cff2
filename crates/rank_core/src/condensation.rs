//! Strongly-connected-component condensation (spec §4.5).
//!
//! Grounded on `examples/original_source/src/util/graphs/condensation.py`:
//! Tarjan's algorithm decomposes the digraph into SCCs in insertion-order-
//! stable fashion, each wrapped as a sub-[`DiGraph`] containing only the
//! edges internal to the component. Cross-component edges form the
//! condensation DAG, whose *nodes are themselves sub-digraphs*; the
//! condensation is then transitively reduced.
//!
//! Per spec §4.5/§9's recursion note, Tarjan runs here with an explicit work
//! stack rather than recursing to a depth of `n`.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::digraph::DiGraph;
use crate::transitive_reduction::TransitiveReduction;

/// Condense `digraph` into its strongly-connected components, and
/// transitively reduce the resulting DAG-of-subgraphs.
pub fn condense<N>(digraph: &DiGraph<N>) -> TransitiveReduction<DiGraph<N>>
where
    N: Clone + Eq + Hash + std::fmt::Debug,
{
    let components = tarjan_scc(digraph);
    let condensed_dag = condensed_dag(digraph, &components);
    TransitiveReduction::of(&condensed_dag)
}

/// Iterative Tarjan's SCC algorithm.
///
/// Returns each component as a `Vec<N>`, in the order Tarjan discovers roots
/// (insertion-order-stable given a fixed iteration over `digraph.nodes()`).
fn tarjan_scc<N>(digraph: &DiGraph<N>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash + std::fmt::Debug,
{
    #[derive(Clone, Copy)]
    enum Frame {
        /// About to visit `node`'s neighbour at `next_child_idx`.
        Visit { next_child_idx: usize },
    }

    let mut index: IndexMap<N, usize> = IndexMap::new();
    let mut lowlink: IndexMap<N, usize> = IndexMap::new();
    let mut on_stack: IndexSet<N> = IndexSet::new();
    let mut tarjan_stack: Vec<N> = Vec::new();
    let mut next_index = 0usize;
    let mut components: Vec<Vec<N>> = Vec::new();

    for start in digraph.nodes().cloned().collect::<Vec<_>>() {
        if index.contains_key(&start) {
            continue;
        }

        // Explicit work stack of (node, frame); each frame remembers which
        // neighbour index to resume at, emulating the call-stack state of
        // the recursive original.
        let mut work: Vec<(N, Frame)> = vec![(start.clone(), Frame::Visit { next_child_idx: 0 })];
        index.insert(start.clone(), next_index);
        lowlink.insert(start.clone(), next_index);
        next_index += 1;
        tarjan_stack.push(start.clone());
        on_stack.insert(start.clone());

        while let Some((node, Frame::Visit { next_child_idx })) = work.pop() {
            let neighbours = digraph
                .neighbours(&node)
                .expect("node originates from digraph.nodes()");

            if next_child_idx < neighbours.len() {
                let neighbour = neighbours[next_child_idx].clone();
                // Resume this frame at the next child once its subtree (if any) returns.
                work.push((node.clone(), Frame::Visit { next_child_idx: next_child_idx + 1 }));

                if !index.contains_key(&neighbour) {
                    index.insert(neighbour.clone(), next_index);
                    lowlink.insert(neighbour.clone(), next_index);
                    next_index += 1;
                    tarjan_stack.push(neighbour.clone());
                    on_stack.insert(neighbour.clone());
                    work.push((neighbour, Frame::Visit { next_child_idx: 0 }));
                } else if on_stack.contains(&neighbour) {
                    let neighbour_index = index[&neighbour];
                    let node_lowlink = lowlink.get_mut(&node).unwrap();
                    if neighbour_index < *node_lowlink {
                        *node_lowlink = neighbour_index;
                    }
                } else {
                    // Neighbour already finished in another component; no lowlink update.
                }
            } else {
                // All children processed; propagate lowlink to parent frame, and
                // pop an SCC if `node` is a root.
                if let Some(&(ref parent, _)) = work.last() {
                    let child_lowlink = lowlink[&node];
                    let parent_lowlink = lowlink.get_mut(parent).unwrap();
                    if child_lowlink < *parent_lowlink {
                        *parent_lowlink = child_lowlink;
                    }
                }

                if lowlink[&node] == index[&node] {
                    let mut component = Vec::new();
                    loop {
                        let popped = tarjan_stack.pop().expect("root's own SCC is on the stack");
                        on_stack.shift_remove(&popped);
                        let is_root = popped == node;
                        component.push(popped);
                        if is_root {
                            break;
                        }
                    }
                    components.push(component);
                }
            }
        }
    }

    components
}

fn condensed_dag<N>(digraph: &DiGraph<N>, components: &[Vec<N>]) -> DiGraph<DiGraph<N>>
where
    N: Clone + Eq + Hash + std::fmt::Debug,
{
    let subgraphs: Vec<DiGraph<N>> = components.iter().map(|c| subgraph(digraph, c)).collect();

    let mut node_subgraph: IndexMap<N, usize> = IndexMap::new();
    for (idx, subgraph) in subgraphs.iter().enumerate() {
        for node in subgraph.nodes() {
            node_subgraph.insert(node.clone(), idx);
        }
    }

    let mut builder = DiGraph::<DiGraph<N>>::builder();
    for (idx, subgraph) in subgraphs.iter().enumerate() {
        builder.add_node(subgraph.clone());
        for node in subgraph.nodes() {
            for neighbour in digraph.neighbours(node).expect("node from digraph") {
                let neighbour_idx = node_subgraph[neighbour];
                if neighbour_idx != idx {
                    builder.add_edge(subgraph.clone(), subgraphs[neighbour_idx].clone());
                }
            }
        }
    }
    builder.build()
}

fn subgraph<N>(digraph: &DiGraph<N>, component: &[N]) -> DiGraph<N>
where
    N: Clone + Eq + Hash + std::fmt::Debug,
{
    let component_set: IndexSet<N> = component.iter().cloned().collect();
    let mut builder = DiGraph::builder();
    for node in component {
        builder.add_node(node.clone());
        for neighbour in digraph.neighbours(node).expect("node from component") {
            if component_set.contains(neighbour) {
                builder.add_edge(node.clone(), neighbour.clone());
            }
        }
    }
    builder.build()
}
