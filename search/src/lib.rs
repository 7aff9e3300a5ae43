//! Trailhead Search: a fixed search template with pluggable traversal
//! strategies and pluggable problem domains.
//!
//! Strategies know nothing about the domain; domains know nothing about
//! the strategy. They meet only at the [`problem::Problem`] contract.
//!
//! # Crate dependency graph
//!
//! ```text
//! trailhead_search  ←  trailhead_harness
//! (template, BFS/DFS)   (problem domains, runner)
//! ```
//!
//! # Key types
//!
//! - [`problem::Problem`]: initial state, goal test, actions, transition
//! - [`algorithm::SearchAlgorithm`]: the template loop and its steps
//! - [`breadth_first::BreadthFirstSearch`]: FIFO strategy
//! - [`depth_first::DepthFirstSearch`]: LIFO strategy with sibling-order tie-break
//! - [`trace::SearchTrace`]: optional traversal audit log with canonical digest

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod breadth_first;
pub mod depth_first;
pub mod error;
pub mod frontier;
pub mod problem;
pub mod trace;
