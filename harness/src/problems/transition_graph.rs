//! `TransitionGraph`: an explicit integer-id state graph.
//!
//! Actions are neighbour ids in declared order. Every applied transition is
//! appended to a discovered-transitions log, which lets tests assert the
//! exact order in which a strategy explored the graph.

use std::cell::RefCell;
use std::collections::BTreeMap;

use trailhead_search::problem::{Cost, Problem};

/// A node of a [`TransitionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphState(pub u32);

/// Raised when an action is not an edge out of the given state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid action {action} for state {state}")]
pub struct TransitionGraphError {
    pub state: u32,
    pub action: u32,
}

/// Graph problem with a single initial and a single goal id.
#[derive(Debug)]
pub struct TransitionGraph {
    transitions: BTreeMap<u32, Vec<(u32, Cost)>>,
    initial: GraphState,
    goal: GraphState,
    discovered: RefCell<Vec<(u32, u32)>>,
}

impl TransitionGraph {
    /// Build a graph from `(from, [(to, cost)])` entries.
    ///
    /// Later entries for the same `from` replace earlier ones.
    pub fn new<I>(transitions: I, initial: u32, goal: u32) -> Self
    where
        I: IntoIterator<Item = (u32, Vec<(u32, Cost)>)>,
    {
        Self {
            transitions: transitions.into_iter().collect(),
            initial: GraphState(initial),
            goal: GraphState(goal),
            discovered: RefCell::new(Vec::new()),
        }
    }

    /// Build a unit-cost graph from adjacency lists.
    #[must_use]
    pub fn unit(adjacency: &[(u32, &[u32])], initial: u32, goal: u32) -> Self {
        Self::new(
            adjacency
                .iter()
                .map(|(from, tos)| (*from, tos.iter().map(|to| (*to, 1)).collect())),
            initial,
            goal,
        )
    }

    /// `(from, action)` pairs passed to `transition`, in call order.
    #[must_use]
    pub fn discovered_transitions(&self) -> Vec<(u32, u32)> {
        self.discovered.borrow().clone()
    }

    /// Forget all recorded transitions.
    pub fn clear_discovered(&self) {
        self.discovered.borrow_mut().clear();
    }
}

impl Problem for TransitionGraph {
    type State = GraphState;
    type Action = u32;
    type Error = TransitionGraphError;

    fn initial_state(&self) -> GraphState {
        self.initial
    }

    fn is_goal(&self, state: &GraphState) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &GraphState) -> Vec<u32> {
        self.transitions
            .get(&state.0)
            .map(|edges| edges.iter().map(|(to, _)| *to).collect())
            .unwrap_or_default()
    }

    fn transition(
        &self,
        state: &GraphState,
        action: &u32,
    ) -> Result<(GraphState, Cost), TransitionGraphError> {
        self.discovered.borrow_mut().push((state.0, *action));

        self.transitions
            .get(&state.0)
            .and_then(|edges| edges.iter().find(|(to, _)| to == action))
            .map(|(to, cost)| (GraphState(*to), *cost))
            .ok_or(TransitionGraphError {
                state: state.0,
                action: *action,
            })
    }
}
