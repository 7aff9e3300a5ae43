//! Frontier containers for uninformed search.
//!
//! Both frontiers keep discovered-but-unexpanded states in insertion order
//! and differ only in which end `pop` takes from. Neither deduplicates:
//! the visited set lives in the strategy, because the initial state is
//! pushed without being marked visited.

use std::collections::VecDeque;

/// Ordered container of states awaiting expansion.
pub trait Frontier<S> {
    /// Add a state to the frontier.
    fn push(&mut self, state: S);

    /// Remove the next state according to the frontier's discipline.
    fn pop(&mut self) -> Option<S>;

    /// Current number of queued states.
    fn len(&self) -> usize;

    /// Whether no states are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier reached since the last [`Frontier::reset`].
    fn high_water(&self) -> u64;

    /// Drop all queued states and reset the high-water mark.
    fn reset(&mut self);
}

/// First-in-first-out frontier (breadth-first discipline).
#[derive(Debug, Clone)]
pub struct FifoFrontier<S> {
    queue: VecDeque<S>,
    high_water: u64,
}

impl<S> FifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, state: S) {
        self.queue.push_back(state);
        self.high_water = self.high_water.max(self.queue.len() as u64);
    }

    fn pop(&mut self) -> Option<S> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.high_water = 0;
    }
}

/// Last-in-first-out frontier (depth-first discipline).
#[derive(Debug, Clone)]
pub struct LifoFrontier<S> {
    stack: Vec<S>,
    high_water: u64,
}

impl<S> LifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            high_water: 0,
        }
    }
}

impl<S> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, state: S) {
        self.stack.push(state);
        self.high_water = self.high_water.max(self.stack.len() as u64);
    }

    fn pop(&mut self) -> Option<S> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.high_water = 0;
    }
}
