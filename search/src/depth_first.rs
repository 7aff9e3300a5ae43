//! Depth-first strategy: LIFO frontier, visited-set dedup, goal test at
//! expansion time.
//!
//! Successors of one expansion are collected in discovery order and pushed
//! onto the stack in reverse, so the first action's successor ends up on
//! top and siblings are popped in the order the domain enumerated them.

use std::collections::HashSet;

use crate::algorithm::{finish_run, SearchAlgorithm, SearchCounters};
use crate::frontier::{Frontier, LifoFrontier};
use crate::problem::Problem;
use crate::trace::{DiscoveryOutcome, SearchTrace};

/// Strategy name used in logs and traces.
pub const DEPTH_FIRST: &str = "depth_first";

/// Depth-first search over any [`Problem`].
///
/// No shortest-path guarantee; covers the whole reachable space before
/// reporting failure. Like breadth-first, the initial state is never marked
/// visited.
pub struct DepthFirstSearch<P: Problem> {
    frontier: LifoFrontier<P::State>,
    visited: HashSet<P::State>,
    current: Option<P::State>,
    result: Option<P::State>,
    counters: SearchCounters,
    record_trace: bool,
    trace: Option<SearchTrace>,
}

impl<P: Problem> DepthFirstSearch<P> {
    /// Create a strategy with zero counters, no result and tracing off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frontier: LifoFrontier::new(),
            visited: HashSet::new(),
            current: None,
            result: None,
            counters: SearchCounters::default(),
            record_trace: false,
            trace: None,
        }
    }

    /// Create a strategy that records a [`SearchTrace`] for every run.
    #[must_use]
    pub fn with_trace() -> Self {
        Self {
            record_trace: true,
            ..Self::new()
        }
    }

    /// Number of states still on the stack.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

impl<P: Problem> Default for DepthFirstSearch<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Problem> SearchAlgorithm for DepthFirstSearch<P> {
    type Problem = P;

    fn name(&self) -> &'static str {
        DEPTH_FIRST
    }

    fn initialize(&mut self, problem: &P) {
        self.counters.reset();
        self.frontier.reset();
        self.visited.clear();
        self.current = None;
        self.result = None;
        self.trace = self.record_trace.then(|| SearchTrace::new(DEPTH_FIRST));

        let initial = problem.initial_state();
        if problem.is_goal(&initial) {
            tracing::debug!(state = ?initial, "initial state satisfies goal");
            self.result = Some(initial.clone());
        }
        self.frontier.push(initial);
    }

    fn is_search_complete(&self) -> bool {
        self.frontier.is_empty() || self.result.is_some()
    }

    fn next_node(&mut self) {
        self.counters.record_retrieved();
        self.current = self.frontier.pop();
        if let (Some(trace), Some(state)) = (self.trace.as_mut(), self.current.as_ref()) {
            trace.record_retrieved(self.counters.nodes_retrieved - 1, state);
        }
    }

    fn evaluate_node(&mut self) {
        self.counters.record_evaluated();
    }

    fn expand_node(&mut self, problem: &P) -> Result<(), P::Error> {
        self.counters.record_expanded();
        let Some(current) = self.current.as_ref() else {
            return Ok(());
        };
        tracing::trace!(state = ?current, "expanding");

        let mut batch = Vec::new();
        for action in problem.actions(current) {
            let (next, _cost) = problem.transition(current, &action)?;

            if problem.is_goal(&next) {
                if let Some(trace) = self.trace.as_mut() {
                    trace.record_discovery(current, &action, &next, DiscoveryOutcome::GoalReached);
                }
                tracing::debug!(state = ?next, "goal found during expansion");
                // The partial batch is dropped; the run is complete.
                self.result = Some(next);
                return Ok(());
            }

            let outcome = if self.visited.contains(&next) {
                DiscoveryOutcome::DuplicateSuppressed
            } else {
                DiscoveryOutcome::Enqueued
            };
            if let Some(trace) = self.trace.as_mut() {
                trace.record_discovery(current, &action, &next, outcome);
            }
            if outcome == DiscoveryOutcome::Enqueued {
                self.visited.insert(next.clone());
                batch.push(next);
            }
        }

        for state in batch.into_iter().rev() {
            self.frontier.push(state);
        }
        Ok(())
    }

    fn retrieve_result(&self) -> Option<&P::State> {
        self.result.as_ref()
    }

    fn counters(&self) -> &SearchCounters {
        &self.counters
    }

    fn finish(&mut self) {
        finish_run(
            DEPTH_FIRST,
            self.result.is_some(),
            self.counters,
            self.frontier.high_water(),
            self.trace.as_mut(),
        );
    }

    fn trace(&self) -> Option<&SearchTrace> {
        self.trace.as_ref()
    }
}
