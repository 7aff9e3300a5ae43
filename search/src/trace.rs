//! `SearchTrace`: per-run traversal audit log.
//!
//! The normative surface is the ordered list of [`TraceEvent`] entries:
//! one `Retrieved` per frontier pop and one `Discovered` per transition
//! applied during expansion. States and actions are recorded as their
//! `Debug` labels, so the trace never depends on state structure.
//!
//! Canonical bytes are compact JSON with lexicographically sorted keys
//! (`serde_json`'s default map is ordered). The digest is SHA-256 over a
//! domain prefix followed by those bytes.

use std::fmt::Debug;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::algorithm::SearchCounters;
use crate::error::TraceError;

/// Domain prefix for search trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"TRAILHEAD::SEARCH_TRACE::V1\0";

/// What happened to a successor produced during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// New state, marked visited and added to the frontier.
    Enqueued,
    /// State already visited; not re-added.
    DuplicateSuppressed,
    /// Successor satisfied the goal test; expansion stopped here.
    GoalReached,
}

/// A single traversal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A state was popped from the frontier.
    Retrieved { order: u64, state: String },
    /// A transition was applied while expanding `from`.
    Discovered {
        from: String,
        action: String,
        to: String,
        outcome: DiscoveryOutcome,
    },
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The initial state satisfied the goal; no node was expanded.
    GoalAtRoot,
    /// A successor satisfied the goal during expansion.
    GoalReached,
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
}

impl TerminationReason {
    /// Classify a finished run from its outcome and expansion count.
    #[must_use]
    pub fn classify(found: bool, nodes_expanded: u64) -> Self {
        match (found, nodes_expanded) {
            (true, 0) => Self::GoalAtRoot,
            (true, _) => Self::GoalReached,
            (false, _) => Self::FrontierExhausted,
        }
    }

    /// Stable snake-case name used in logs and canonical JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalAtRoot => "goal_at_root",
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Final figures recorded when the run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    pub termination: TerminationReason,
    pub counters: SearchCounters,
    pub frontier_high_water: u64,
}

/// The complete traversal record of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    strategy: &'static str,
    events: Vec<TraceEvent>,
    summary: Option<TraceSummary>,
}

impl SearchTrace {
    /// Start an empty trace for the named strategy.
    #[must_use]
    pub fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            events: Vec::new(),
            summary: None,
        }
    }

    /// Name of the strategy that produced this trace.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Ordered events.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Summary, present once the run has finished.
    #[must_use]
    pub fn summary(&self) -> Option<&TraceSummary> {
        self.summary.as_ref()
    }

    pub fn record_retrieved<S: Debug>(&mut self, order: u64, state: &S) {
        self.events.push(TraceEvent::Retrieved {
            order,
            state: format!("{state:?}"),
        });
    }

    pub fn record_discovery<S: Debug, A: Debug>(
        &mut self,
        from: &S,
        action: &A,
        to: &S,
        outcome: DiscoveryOutcome,
    ) {
        self.events.push(TraceEvent::Discovered {
            from: format!("{from:?}"),
            action: format!("{action:?}"),
            to: format!("{to:?}"),
            outcome,
        });
    }

    /// Close the trace with its final figures. A second call replaces the first.
    pub fn close(&mut self, summary: TraceSummary) {
        self.summary = Some(summary);
    }

    /// Labels of retrieved states, in pop order.
    #[must_use]
    pub fn retrieval_order(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Retrieved { state, .. } => Some(state.as_str()),
                TraceEvent::Discovered { .. } => None,
            })
            .collect()
    }

    /// `(from, to)` labels of every applied transition, in discovery order.
    #[must_use]
    pub fn discovered_transitions(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Discovered { from, to, .. } => Some((from.as_str(), to.as_str())),
                TraceEvent::Retrieved { .. } => None,
            })
            .collect()
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Serialize`] if JSON rendering fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, TraceError> {
        Ok(serde_json::to_vec(&self.to_json_value())?)
    }

    /// Content digest of the canonical bytes, formatted `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Serialize`] if JSON rendering fails.
    pub fn digest(&self) -> Result<String, TraceError> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_TRACE);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    fn to_json_value(&self) -> Value {
        json!({
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "strategy": self.strategy,
            "summary": self.summary.as_ref().map(summary_to_json),
        })
    }
}

fn event_to_json(e: &TraceEvent) -> Value {
    match e {
        TraceEvent::Retrieved { order, state } => {
            json!({"order": order, "state": state, "type": "retrieved"})
        }
        TraceEvent::Discovered {
            from,
            action,
            to,
            outcome,
        } => json!({
            "action": action,
            "from": from,
            "outcome": outcome_str(*outcome),
            "to": to,
            "type": "discovered",
        }),
    }
}

fn outcome_str(o: DiscoveryOutcome) -> &'static str {
    match o {
        DiscoveryOutcome::Enqueued => "enqueued",
        DiscoveryOutcome::DuplicateSuppressed => "duplicate_suppressed",
        DiscoveryOutcome::GoalReached => "goal_reached",
    }
}

fn summary_to_json(s: &TraceSummary) -> Value {
    json!({
        "frontier_high_water": s.frontier_high_water,
        "nodes_evaluated": s.counters.nodes_evaluated,
        "nodes_expanded": s.counters.nodes_expanded,
        "nodes_retrieved": s.counters.nodes_retrieved,
        "termination": s.termination.as_str(),
    })
}
