//! Problem contract consumed by every search strategy.

use std::fmt::Debug;
use std::hash::Hash;

/// Non-negative transition cost reported by [`Problem::transition`].
///
/// Strategies in this crate ignore cost; it is carried so that domains keep
/// a single contract regardless of which strategy consumes them.
pub type Cost = u64;

/// A state-space problem: initial state, goal test, action enumeration and
/// transition function.
///
/// # Contract
///
/// - `initial_state` returns the same logical state on every call.
/// - `is_goal` is total over every reachable state.
/// - `actions` is deterministic: the same state yields the same actions in
///   the same order. That order governs successor discovery order and is
///   preserved by every strategy.
/// - `transition` is only ever called with an action that `actions`
///   produced for that exact state. A domain may still reject it; the error
///   propagates out of the search unchanged.
///
/// Methods take `&self`. A domain that records its own bookkeeping (for
/// example a log of discovered transitions) does so through interior
/// mutability; strategies never observe it.
pub trait Problem {
    /// Opaque state value. Strategies only hash, compare and clone it.
    type State: Clone + Eq + Hash + Debug;
    /// Opaque action value identifying one outgoing transition.
    type Action: Debug;
    /// Domain-specific failure raised by [`Problem::transition`].
    type Error: std::error::Error;

    /// The starting state of this problem instance.
    fn initial_state(&self) -> Self::State;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate the actions available from `state`, in domain order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` to `state`, returning the successor and its cost.
    ///
    /// # Errors
    ///
    /// Returns the domain error if `action` is not valid for `state`.
    fn transition(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<(Self::State, Cost), Self::Error>;
}
