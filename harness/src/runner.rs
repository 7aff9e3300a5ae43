//! Harness runner: drives a problem through a traced search and packages
//! the outcome as a [`RunReport`].
//!
//! # Pipeline
//!
//! ```text
//! StrategyKind → with_trace() → search(problem) → finish → trace digest → RunReport
//! ```

use std::str::FromStr;

use trailhead_search::algorithm::{SearchAlgorithm, SearchCounters};
use trailhead_search::breadth_first::{BreadthFirstSearch, BREADTH_FIRST};
use trailhead_search::depth_first::{DepthFirstSearch, DEPTH_FIRST};
use trailhead_search::error::TraceError;
use trailhead_search::problem::Problem;

/// Which traversal strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
}

impl StrategyKind {
    /// The strategy's canonical name (matches its trace name).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => BREADTH_FIRST,
            Self::DepthFirst => DEPTH_FIRST,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth_first" => Ok(Self::BreadthFirst),
            "dfs" | "depth_first" => Ok(Self::DepthFirst),
            other => Err(RunError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Strategy name did not parse.
    #[error("unknown strategy {name:?} (expected bfs, dfs, breadth_first or depth_first)")]
    UnknownStrategy { name: String },
    /// The problem raised an error mid-search.
    #[error("{strategy} search aborted by domain error: {detail}")]
    Domain {
        strategy: &'static str,
        detail: String,
    },
    /// The trace could not be serialized.
    #[error(transparent)]
    Trace(#[from] TraceError),
    /// A traced strategy finished without a trace.
    #[error("{strategy} finished without a trace")]
    MissingTrace { strategy: &'static str },
}

/// Outcome of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub strategy: &'static str,
    pub found: bool,
    /// `Debug` label of the goal state, if one was found.
    pub result: Option<String>,
    pub counters: SearchCounters,
    pub frontier_high_water: u64,
    pub trace_events: usize,
    pub trace_digest: String,
}

impl RunReport {
    /// Render as `key=value` lines in a fixed order.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("strategy={}", self.strategy),
            format!("found={}", self.found),
            format!("result={}", self.result.as_deref().unwrap_or("none")),
            format!("nodes_retrieved={}", self.counters.nodes_retrieved),
            format!("nodes_evaluated={}", self.counters.nodes_evaluated),
            format!("nodes_expanded={}", self.counters.nodes_expanded),
            format!("frontier_high_water={}", self.frontier_high_water),
            format!("trace_events={}", self.trace_events),
            format!("trace_digest={}", self.trace_digest),
        ]
    }
}

/// Run `problem` under the chosen strategy with tracing on.
///
/// # Errors
///
/// Returns [`RunError::Domain`] if the problem fails mid-search, or
/// [`RunError::Trace`] if the trace cannot be digested.
pub fn run_search<P: Problem>(problem: &P, kind: StrategyKind) -> Result<RunReport, RunError> {
    tracing::info!(strategy = kind.as_str(), "harness run started");
    match kind {
        StrategyKind::BreadthFirst => run_with(BreadthFirstSearch::with_trace(), problem),
        StrategyKind::DepthFirst => run_with(DepthFirstSearch::with_trace(), problem),
    }
}

/// Run an already-configured strategy and build its report.
///
/// # Errors
///
/// See [`run_search`]. Also returns [`RunError::MissingTrace`] when the
/// strategy was not built with tracing on.
pub fn run_with<A>(mut algorithm: A, problem: &A::Problem) -> Result<RunReport, RunError>
where
    A: SearchAlgorithm,
{
    let strategy = algorithm.name();
    let found = algorithm.search(problem).map_err(|e| RunError::Domain {
        strategy,
        detail: e.to_string(),
    })?;

    let trace = algorithm
        .trace()
        .ok_or(RunError::MissingTrace { strategy })?;
    let frontier_high_water = trace.summary().map_or(0, |s| s.frontier_high_water);

    Ok(RunReport {
        strategy,
        found,
        result: algorithm.retrieve_result().map(|s| format!("{s:?}")),
        counters: *algorithm.counters(),
        frontier_high_water,
        trace_events: trace.events().len(),
        trace_digest: trace.digest()?,
    })
}
