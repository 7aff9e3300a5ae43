//! The search template: a fixed control loop with strategy-supplied steps.
//!
//! ```text
//! initialize → while !is_search_complete { next_node; evaluate_node; expand_node } → finish
//! ```
//!
//! Every step implementation must bump its counter on entry, before any
//! strategy-specific work. Counters belong to the strategy instance and are
//! reset only by `initialize`.

use crate::problem::Problem;
use crate::trace::{SearchTrace, TerminationReason};

/// Per-instance instrumentation counters.
///
/// Each loop iteration increments all three exactly once. They are never
/// consulted by control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounters {
    pub nodes_retrieved: u64,
    pub nodes_evaluated: u64,
    pub nodes_expanded: u64,
}

impl SearchCounters {
    pub fn record_retrieved(&mut self) {
        self.nodes_retrieved += 1;
    }

    pub fn record_evaluated(&mut self) {
        self.nodes_evaluated += 1;
    }

    pub fn record_expanded(&mut self) {
        self.nodes_expanded += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A traversal strategy plugged into the search template.
///
/// Implementors supply the steps; [`SearchAlgorithm::search`] sequences them.
/// The problem is borrowed for the duration of one `search` call and handed
/// to the steps that query it.
pub trait SearchAlgorithm {
    /// The problem type this strategy instance searches.
    type Problem: Problem;

    /// Stable strategy name for logs and traces.
    fn name(&self) -> &'static str;

    /// Reset all run state and prime the frontier with the initial state.
    ///
    /// Resets counters to zero and clears any previous result. If the
    /// initial state is a goal it becomes the result immediately.
    fn initialize(&mut self, problem: &Self::Problem);

    /// True once the frontier is empty or a result exists.
    fn is_search_complete(&self) -> bool;

    /// Pop the next state from the frontier into the current slot.
    fn next_node(&mut self);

    /// Evaluate the current state.
    fn evaluate_node(&mut self);

    /// Expand the current state into its successors.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by [`Problem::transition`].
    fn expand_node(
        &mut self,
        problem: &Self::Problem,
    ) -> Result<(), <Self::Problem as Problem>::Error>;

    /// The goal state found by the last run, if any.
    fn retrieve_result(&self) -> Option<&<Self::Problem as Problem>::State>;

    /// Counters for the last (or current) run.
    fn counters(&self) -> &SearchCounters;

    /// Called exactly once after the loop exits. No-op by default.
    fn finish(&mut self) {}

    /// Traversal record of the last run, when the strategy keeps one.
    fn trace(&self) -> Option<&SearchTrace> {
        None
    }

    /// Run the template to completion.
    ///
    /// Returns `Ok(true)` iff a goal state was found. There is no iteration
    /// cap: a problem with an infinite reachable space and no goal never
    /// returns.
    ///
    /// # Errors
    ///
    /// Any domain error aborts the run mid-loop and is returned as-is;
    /// counters keep the values reached so far and `finish` is not called.
    fn search(
        &mut self,
        problem: &Self::Problem,
    ) -> Result<bool, <Self::Problem as Problem>::Error> {
        self.initialize(problem);
        tracing::debug!(strategy = self.name(), "search started");
        while !self.is_search_complete() {
            self.next_node();
            self.evaluate_node();
            self.expand_node(problem)?;
        }
        self.finish();
        Ok(self.retrieve_result().is_some())
    }

    fn nodes_retrieved(&self) -> u64 {
        self.counters().nodes_retrieved
    }

    fn nodes_evaluated(&self) -> u64 {
        self.counters().nodes_evaluated
    }

    fn nodes_expanded(&self) -> u64 {
        self.counters().nodes_expanded
    }
}

/// Shared `finish` bookkeeping: close the trace and log the run summary.
pub(crate) fn finish_run(
    strategy: &'static str,
    found: bool,
    counters: SearchCounters,
    frontier_high_water: u64,
    trace: Option<&mut SearchTrace>,
) {
    let termination = TerminationReason::classify(found, counters.nodes_expanded);
    if let Some(trace) = trace {
        trace.close(crate::trace::TraceSummary {
            termination,
            counters,
            frontier_high_water,
        });
    }
    tracing::debug!(
        strategy,
        termination = termination.as_str(),
        nodes_retrieved = counters.nodes_retrieved,
        nodes_evaluated = counters.nodes_evaluated,
        nodes_expanded = counters.nodes_expanded,
        frontier_high_water,
        "search finished"
    );
}
