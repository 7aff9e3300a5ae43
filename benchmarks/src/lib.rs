//! Shared helpers for trailhead benchmark suites.

use trailhead_harness::problems::transition_graph::TransitionGraph;
use trailhead_search::algorithm::SearchAlgorithm;

/// Board sizes used by the N-queens benchmarks.
pub const QUEENS_SIZES: [usize; 3] = [6, 8, 10];

/// A complete `branching`-ary tree of the given depth with unit costs.
///
/// Nodes are numbered breadth-first from 1. The goal id is one past the
/// last node, so every search exhausts the tree.
#[must_use]
pub fn complete_tree(branching: u32, depth: u32) -> TransitionGraph {
    let mut edges = Vec::new();
    let mut next_id = 2u32;
    let mut layer = vec![1u32];
    for _ in 0..depth {
        let mut next_layer = Vec::with_capacity(layer.len() * branching as usize);
        for &parent in &layer {
            let children: Vec<(u32, u64)> = (0..branching)
                .map(|i| (next_id + i, 1))
                .collect();
            next_layer.extend(children.iter().map(|(id, _)| *id));
            next_id += branching;
            edges.push((parent, children));
        }
        layer = next_layer;
    }
    TransitionGraph::new(edges, 1, next_id)
}

/// Run one search and return `(found, nodes_expanded)`.
///
/// # Panics
///
/// Panics if the problem raises a domain error. Benchmark problems are
/// well-formed, so a failure here is fatal.
pub fn run_once<A>(algorithm: &mut A, problem: &A::Problem) -> (bool, u64)
where
    A: SearchAlgorithm,
{
    let found = algorithm.search(problem).expect("benchmark search");
    (found, algorithm.nodes_expanded())
}
