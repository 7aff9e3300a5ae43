//! Problem implementations for the harness runner.

pub mod n_queens;
pub mod transition_graph;
